use crate::assessment::{CatalogError, ResponseParseError, ScoringError, StyleParseError};
use crate::config::ConfigError;
use crate::session::SessionError;
use crate::submission::{GatewayError, SinkError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Sink(SinkError),
    Gateway(GatewayError),
    Scoring(ScoringError),
    Responses(ResponseParseError),
    UnknownStyle(StyleParseError),
    Catalog(CatalogError),
    Session(SessionError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Sink(err) => write!(f, "record sink error: {}", err),
            AppError::Gateway(err) => write!(f, "submission gateway error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::Responses(err) => write!(f, "invalid responses: {}", err),
            AppError::UnknownStyle(err) => write!(f, "{}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Session(err) => write!(f, "session error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Sink(err) => Some(err),
            AppError::Gateway(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Responses(err) => Some(err),
            AppError::UnknownStyle(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Session(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UnknownStyle(_) => StatusCode::NOT_FOUND,
            AppError::Scoring(_) | AppError::Responses(_) | AppError::Session(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Gateway(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Sink(_)
            | AppError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<SinkError> for AppError {
    fn from(value: SinkError) -> Self {
        Self::Sink(value)
    }
}

impl From<GatewayError> for AppError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

impl From<ScoringError> for AppError {
    fn from(value: ScoringError) -> Self {
        Self::Scoring(value)
    }
}

impl From<ResponseParseError> for AppError {
    fn from(value: ResponseParseError) -> Self {
        Self::Responses(value)
    }
}

impl From<StyleParseError> for AppError {
    fn from(value: StyleParseError) -> Self {
        Self::UnknownStyle(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<SessionError> for AppError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}
