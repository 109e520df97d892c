use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::client::SubmitRequest;
use super::service::{SubmissionError, SubmissionService};
use super::sink::RecordSink;

/// Router exposing the assessment submission endpoint.
pub fn submission_router<S>(service: Arc<SubmissionService<S>>) -> Router
where
    S: RecordSink + 'static,
{
    Router::new()
        .route("/api/submit", post(submit_handler::<S>))
        .with_state(service)
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SubmissionService<S>>>,
    axum::Json(request): axum::Json<SubmitRequest>,
) -> Response
where
    S: RecordSink + 'static,
{
    match service.submit(request).await {
        Ok(receipt) => {
            let payload = json!({
                "success": true,
                "message": "Assessment submitted successfully!",
                "dominant_style": receipt.payload.dominant_style(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err @ (SubmissionError::IncompleteIdentity | SubmissionError::Scoring(_))) => {
            let payload = json!({
                "success": false,
                "error": err.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SubmissionError::Sink(err)) => {
            let payload = json!({
                "success": false,
                "message": "Failed to submit assessment.",
                "error": err.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
