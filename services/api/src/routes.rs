use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use style_assessment::assessment::{
    describe, standard_questions, CategoryDescription, Question, StyleCategory,
};
use style_assessment::error::AppError;
use style_assessment::submission::{submission_router, RecordSink, SubmissionService};

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) question_count: usize,
    pub(crate) questions: &'static [Question],
}

#[derive(Debug, Serialize)]
pub(crate) struct StyleResponse {
    pub(crate) category: StyleCategory,
    #[serde(flatten)]
    pub(crate) description: CategoryDescription,
}

pub(crate) fn with_assessment_routes<S>(service: Arc<SubmissionService<S>>) -> axum::Router
where
    S: RecordSink + 'static,
{
    submission_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/questions", axum::routing::get(questions_endpoint))
        .route("/api/styles/:category", axum::routing::get(style_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint() -> Json<QuestionsResponse> {
    let questions = standard_questions();
    Json(QuestionsResponse {
        question_count: questions.len(),
        questions,
    })
}

pub(crate) async fn style_endpoint(
    Extension(state): Extension<AppState>,
    Path(category): Path<String>,
) -> Result<Json<StyleResponse>, AppError> {
    let category: StyleCategory = category.parse()?;
    let description = describe(category, &state.catalog)?.clone();
    Ok(Json(StyleResponse {
        category,
        description,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::FixedOffset;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use style_assessment::assessment::DescriptionCatalog;
    use style_assessment::submission::MemoryRecordSink;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            catalog: Arc::new(DescriptionCatalog::standard()),
        }
    }

    fn app(state: AppState) -> axum::Router {
        let service = Arc::new(SubmissionService::new(
            Arc::new(MemoryRecordSink::default()),
            FixedOffset::east_opt(0).expect("utc offset"),
        ));
        with_assessment_routes(service).layer(Extension(state))
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn questions_route_lists_the_instrument() {
        let (status, body) = get_json(app(state(true)), "/api/questions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question_count"], 18);
        assert_eq!(body["questions"][0]["ordinal"], 1);
        assert_eq!(
            body["questions"][0]["choices"]
                .as_array()
                .expect("choices array")
                .len(),
            4
        );
    }

    #[tokio::test]
    async fn style_route_describes_known_styles() {
        let (status, body) = get_json(app(state(true)), "/api/styles/amiable").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["category"], "Amiable");
        assert_eq!(body["title"], "Amiable Style");
        assert!(body["interaction_tips"].as_array().is_some());
    }

    #[tokio::test]
    async fn style_route_returns_not_found_for_unknown_styles() {
        let (status, body) = get_json(app(state(true)), "/api/styles/visionary").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"]
            .as_str()
            .expect("error text")
            .contains("visionary"));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_flag() {
        let state = state(false);
        let (status, _) = get_json(app(state.clone()), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let (status, body) = get_json(app(state), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }
}
