//! Client-side assessment session: welcome, questionnaire, results.
//!
//! Local results and remote persistence are tracked separately. Submitting
//! computes the summary and moves to the results phase immediately; the
//! gateway call runs as a detached task whose outcome only sets the
//! persistence status.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::assessment::{
    compute_summary, AnswerKey, ChoiceIndex, Identity, ResponseSet, ResultSummary, ScoringError,
    CHOICES_PER_QUESTION,
};
use crate::submission::{SubmissionGateway, SubmitRequest};

/// Message shown when the gateway could not store the results.
pub const PERSISTENCE_WARNING: &str =
    "There was a problem submitting your results. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Welcome,
    Questionnaire,
    Results,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceStatus {
    Saved,
    Failed { warning: String, detail: String },
}

impl PersistenceStatus {
    fn failed(detail: impl Into<String>) -> Self {
        Self::Failed {
            warning: PERSISTENCE_WARNING.to_string(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please fill out both your name and company.")]
    IncompleteIdentity,
    #[error("Please answer all questions before submitting.")]
    Unanswered { missing: Vec<usize> },
    #[error("question {index} is out of range (questionnaire has {total})")]
    QuestionOutOfRange { index: usize, total: usize },
    #[error("choice {choice} is out of range")]
    ChoiceOutOfRange { choice: ChoiceIndex },
    #[error("action requires the {expected:?} phase, session is in {actual:?}")]
    WrongPhase {
        expected: SessionPhase,
        actual: SessionPhase,
    },
    #[error("results are already saved or still being saved")]
    NothingToRetry,
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Handle on the detached gateway call started by [`AssessmentSession::submit`].
#[derive(Debug)]
pub struct SubmissionTicket {
    handle: JoinHandle<PersistenceStatus>,
}

impl SubmissionTicket {
    pub async fn outcome(self) -> PersistenceStatus {
        match self.handle.await {
            Ok(status) => status,
            Err(err) => PersistenceStatus::failed(err.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    key: Arc<AnswerKey>,
    phase: SessionPhase,
    identity: Option<Identity>,
    responses: ResponseSet,
    results: Option<ResultSummary>,
    persistence: Option<PersistenceStatus>,
}

impl AssessmentSession {
    pub fn new(key: Arc<AnswerKey>) -> Self {
        let responses = ResponseSet::unanswered(key.question_count());
        Self {
            key,
            phase: SessionPhase::Welcome,
            identity: None,
            responses,
            results: None,
            persistence: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// (answered, total) for the progress indicator.
    pub fn progress(&self) -> (usize, usize) {
        (self.responses.answered_count(), self.responses.len())
    }

    pub fn results(&self) -> Option<&ResultSummary> {
        self.results.as_ref()
    }

    /// `None` while the gateway call is still outstanding.
    pub fn persistence(&self) -> Option<&PersistenceStatus> {
        self.persistence.as_ref()
    }

    pub fn warning(&self) -> Option<&str> {
        match &self.persistence {
            Some(PersistenceStatus::Failed { warning, .. }) => Some(warning),
            _ => None,
        }
    }

    fn expect_phase(&self, expected: SessionPhase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Leaves the welcome screen once both identity fields are filled in.
    pub fn start(&mut self, identity: Identity) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Welcome)?;
        if !identity.is_complete() {
            return Err(SessionError::IncompleteIdentity);
        }

        self.identity = Some(identity);
        self.responses = ResponseSet::unanswered(self.key.question_count());
        self.phase = SessionPhase::Questionnaire;
        Ok(())
    }

    /// Records the choice for the zero-based question `index`.
    pub fn answer(&mut self, index: usize, choice: ChoiceIndex) -> Result<(), SessionError> {
        self.expect_phase(SessionPhase::Questionnaire)?;
        if usize::from(choice) >= CHOICES_PER_QUESTION {
            return Err(SessionError::ChoiceOutOfRange { choice });
        }
        if !self.responses.set(index, Some(choice)) {
            return Err(SessionError::QuestionOutOfRange {
                index,
                total: self.responses.len(),
            });
        }
        Ok(())
    }

    /// Scores locally, moves to the results phase, and starts the gateway call.
    ///
    /// Must be called within a tokio runtime.
    pub fn submit<G>(&mut self, gateway: Arc<G>) -> Result<SubmissionTicket, SessionError>
    where
        G: SubmissionGateway + 'static,
    {
        self.expect_phase(SessionPhase::Questionnaire)?;
        let missing = self.responses.missing_ordinals();
        if !missing.is_empty() {
            return Err(SessionError::Unanswered { missing });
        }
        let identity = self
            .identity
            .clone()
            .ok_or(SessionError::IncompleteIdentity)?;

        let summary = compute_summary(&self.responses, &self.key)?;
        let request = SubmitRequest::new(&identity, &self.responses);

        self.results = Some(summary);
        self.persistence = None;
        self.phase = SessionPhase::Results;

        Ok(dispatch(gateway, request))
    }

    /// Sends the frozen answers again after a failed save.
    ///
    /// One attempt per call; the caller decides whether to offer it again.
    pub fn retry_submission<G>(
        &mut self,
        gateway: Arc<G>,
    ) -> Result<SubmissionTicket, SessionError>
    where
        G: SubmissionGateway + 'static,
    {
        self.expect_phase(SessionPhase::Results)?;
        if !matches!(self.persistence, Some(PersistenceStatus::Failed { .. })) {
            return Err(SessionError::NothingToRetry);
        }
        let identity = self
            .identity
            .clone()
            .ok_or(SessionError::IncompleteIdentity)?;

        let request = SubmitRequest::new(&identity, &self.responses);
        self.persistence = None;
        Ok(dispatch(gateway, request))
    }

    pub fn record_persistence(&mut self, status: PersistenceStatus) {
        self.persistence = Some(status);
    }
}

fn dispatch<G>(gateway: Arc<G>, request: SubmitRequest) -> SubmissionTicket
where
    G: SubmissionGateway + 'static,
{
    let handle = tokio::spawn(async move {
        match gateway.submit(&request).await {
            Ok(ack) if ack.success => PersistenceStatus::Saved,
            Ok(ack) => {
                let detail = ack
                    .message
                    .unwrap_or_else(|| "backend reported failure".to_string());
                warn!(%detail, "assessment submission not acknowledged");
                PersistenceStatus::failed(detail)
            }
            Err(err) => {
                warn!(error = %err, "assessment submission failed");
                PersistenceStatus::failed(err.to_string())
            }
        }
    });

    SubmissionTicket { handle }
}
