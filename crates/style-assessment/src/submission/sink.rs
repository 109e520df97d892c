use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::assessment::SubmissionPayload;

/// Error enumeration for persistence sink failures.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("record file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("record encoding failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("sheets request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sheets rejected the append ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid sheets endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("record sink unavailable: {0}")]
    Unavailable(String),
}

/// Append-only store receiving one row per completed assessment.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn append(&self, payload: &SubmissionPayload) -> Result<(), SinkError>;
}

/// Keeps payloads in process memory; used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryRecordSink {
    payloads: Arc<Mutex<Vec<SubmissionPayload>>>,
}

impl MemoryRecordSink {
    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().expect("sink mutex poisoned").clone()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.payloads()
            .iter()
            .map(SubmissionPayload::to_row)
            .collect()
    }
}

#[async_trait]
impl RecordSink for MemoryRecordSink {
    async fn append(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        self.payloads
            .lock()
            .expect("sink mutex poisoned")
            .push(payload.clone());
        Ok(())
    }
}
