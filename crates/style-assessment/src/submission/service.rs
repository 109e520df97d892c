use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use tracing::{error, info};

use super::client::SubmitRequest;
use super::sink::{RecordSink, SinkError};
use crate::assessment::{
    compute_summary, record_time, AnswerKey, ResultSummary, ScoringError, SubmissionPayload,
};

/// Backend side of a submission: score, build the record, hand it to the sink.
pub struct SubmissionService<S> {
    key: Arc<AnswerKey>,
    sink: Arc<S>,
    record_offset: FixedOffset,
}

/// Outcome of a persisted submission.
#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub summary: ResultSummary,
    pub payload: SubmissionPayload,
}

impl<S> SubmissionService<S>
where
    S: RecordSink + 'static,
{
    pub fn new(sink: Arc<S>, record_offset: FixedOffset) -> Self {
        Self::with_key(AnswerKey::standard(), sink, record_offset)
    }

    pub fn with_key(key: AnswerKey, sink: Arc<S>, record_offset: FixedOffset) -> Self {
        Self {
            key: Arc::new(key),
            sink,
            record_offset,
        }
    }

    pub fn question_count(&self) -> usize {
        self.key.question_count()
    }

    /// Scores and persists a submission stamped with the current time.
    pub async fn submit(
        &self,
        request: SubmitRequest,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.submit_at(request, record_time(&self.record_offset))
            .await
    }

    pub async fn submit_at(
        &self,
        request: SubmitRequest,
        submitted_at: DateTime<FixedOffset>,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let identity = request.identity();
        if !identity.is_complete() {
            return Err(SubmissionError::IncompleteIdentity);
        }

        let summary = compute_summary(&request.responses, &self.key)?;
        let payload =
            SubmissionPayload::build(&identity, &request.responses, &summary, submitted_at);

        if let Err(err) = self.sink.append(&payload).await {
            error!(error = %err, company = %identity.company, "failed to persist assessment submission");
            return Err(err.into());
        }

        info!(
            company = %identity.company,
            dominant = %payload.dominant_style(),
            answered = request.responses.answered_count(),
            "assessment submission saved"
        );
        Ok(SubmissionReceipt { summary, payload })
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("name and company are both required")]
    IncompleteIdentity,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{Identity, ResponseSet, StyleCategory};
    use crate::submission::sink::MemoryRecordSink;

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).expect("utc offset")
    }

    #[tokio::test]
    async fn persists_scored_record() {
        let sink = Arc::new(MemoryRecordSink::default());
        let service = SubmissionService::new(sink.clone(), utc());
        let responses = ResponseSet::from_letters("A,B,D,D,A,B,A,B,B,D,A,B,D,C,A,D,D,D")
            .expect("valid letters");

        let receipt = service
            .submit(SubmitRequest::new(&Identity::new("Ada", "Acme"), &responses))
            .await
            .expect("submission persists");

        assert_eq!(
            receipt.summary.dominant(),
            &[StyleCategory::Driver, StyleCategory::Analytical]
        );
        let rows = sink.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][3], "Driver & Analytical");
        assert_eq!(rows[0][8], "A");
    }

    #[tokio::test]
    async fn rejects_blank_identity_before_touching_the_sink() {
        let sink = Arc::new(MemoryRecordSink::default());
        let service = SubmissionService::new(sink.clone(), utc());

        let result = service
            .submit(SubmitRequest::new(
                &Identity::new("  ", "Acme"),
                &ResponseSet::unanswered(18),
            ))
            .await;

        assert!(matches!(result, Err(SubmissionError::IncompleteIdentity)));
        assert!(sink.rows().is_empty());
    }
}
