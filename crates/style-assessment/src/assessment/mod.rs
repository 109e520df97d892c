//! Questionnaire data, the answer key, and the scoring pipeline that turns a
//! response set into a result summary and a persisted record.

pub mod answer_key;
pub mod catalog;
pub mod domain;
pub mod payload;
mod questions;
pub mod scoring;

pub use answer_key::{AnswerKey, AnswerKeyError};
pub use catalog::{describe, CatalogError, CategoryDescription, DescriptionCatalog};
pub use domain::{
    ChoiceIndex, Identity, Question, ResponseParseError, ResponseSet, StyleCategory,
    StyleParseError, CHOICES_PER_QUESTION,
};
pub use payload::{record_header, record_time, SubmissionPayload};
pub use questions::standard_questions;
pub use scoring::{compute_summary, ChartRow, ResultSummary, ScoreTally, ScoringError};
