use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;
use style_assessment::assessment::{DescriptionCatalog, SubmissionPayload};
use style_assessment::config::{ConfigError, SinkKind, SubmissionConfig};
use style_assessment::error::AppError;
use style_assessment::submission::{
    CsvRecordSink, MemoryRecordSink, RecordSink, SheetsRecordSink, SinkError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) catalog: Arc<DescriptionCatalog>,
}

/// Sink chosen at startup from configuration.
#[derive(Debug)]
pub(crate) enum ConfiguredSink {
    Csv(CsvRecordSink),
    Sheets(SheetsRecordSink),
    Memory(MemoryRecordSink),
}

impl ConfiguredSink {
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Csv(sink) => format!("csv:{}", sink.path().display()),
            Self::Sheets(sink) => format!("sheets:{}", sink.endpoint().path()),
            Self::Memory(_) => "memory".to_string(),
        }
    }
}

#[async_trait]
impl RecordSink for ConfiguredSink {
    async fn append(&self, payload: &SubmissionPayload) -> Result<(), SinkError> {
        match self {
            Self::Csv(sink) => sink.append(payload).await,
            Self::Sheets(sink) => sink.append(payload).await,
            Self::Memory(sink) => sink.append(payload).await,
        }
    }
}

pub(crate) fn build_sink(
    config: &SubmissionConfig,
    timeout: Duration,
) -> Result<ConfiguredSink, AppError> {
    match config.sink {
        SinkKind::Csv => Ok(ConfiguredSink::Csv(CsvRecordSink::new(&config.csv_path))),
        SinkKind::Memory => Ok(ConfiguredSink::Memory(MemoryRecordSink::default())),
        SinkKind::Sheets => {
            let sheets = &config.sheets;
            let spreadsheet_id = sheets
                .spreadsheet_id
                .as_deref()
                .ok_or(ConfigError::MissingSetting("SHEETS_SPREADSHEET_ID"))?;
            let access_token = sheets
                .access_token
                .as_deref()
                .ok_or(ConfigError::MissingSetting("SHEETS_ACCESS_TOKEN"))?;
            let sink = SheetsRecordSink::new(
                &sheets.api_base,
                spreadsheet_id,
                &sheets.range,
                access_token,
                timeout,
            )?;
            Ok(ConfiguredSink::Sheets(sink))
        }
    }
}

pub(crate) fn parse_sink_kind(raw: &str) -> Result<SinkKind, String> {
    SinkKind::parse(raw)
        .ok_or_else(|| format!("unknown sink '{raw}' (expected csv, sheets, memory)"))
}
