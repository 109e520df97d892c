//! Personality style assessment: a fixed answer key tallies single-choice
//! responses into four behavioral styles, reports every style tied for the
//! lead, and forwards the raw answers plus summary to a persistence sink.

pub mod assessment;
pub mod config;
pub mod error;
pub mod session;
pub mod submission;
pub mod telemetry;
