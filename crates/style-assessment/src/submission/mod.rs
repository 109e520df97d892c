//! Submission gateway: the HTTP client used by assessment sessions, the
//! backend service and router that score incoming submissions, and the
//! record sinks that persist them.

pub mod client;
mod csv_sink;
pub mod router;
pub mod service;
mod sheets;
pub mod sink;

pub use client::{GatewayError, HttpSubmissionGateway, SubmissionGateway, SubmitAck, SubmitRequest};
pub use csv_sink::CsvRecordSink;
pub use router::submission_router;
pub use service::{SubmissionError, SubmissionReceipt, SubmissionService};
pub use sheets::SheetsRecordSink;
pub use sink::{MemoryRecordSink, RecordSink, SinkError};
