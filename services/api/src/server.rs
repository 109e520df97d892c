use crate::cli::ServeArgs;
use crate::infra::{build_sink, AppState};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use style_assessment::assessment::DescriptionCatalog;
use style_assessment::config::AppConfig;
use style_assessment::error::AppError;
use style_assessment::submission::SubmissionService;
use style_assessment::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(sink) = args.sink.take() {
        config.submission.sink = sink;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        catalog: Arc::new(DescriptionCatalog::standard()),
    };

    let sink = build_sink(&config.submission, config.client.timeout)?;
    let sink_description = sink.describe();
    let submission_service = Arc::new(SubmissionService::new(
        Arc::new(sink),
        config.submission.record_offset,
    ));

    let app = with_assessment_routes(submission_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, sink = %sink_description, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
