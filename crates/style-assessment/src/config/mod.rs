use chrono::FixedOffset;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Where the backend persists submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Csv,
    Sheets,
    Memory,
}

impl SinkKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" | "file" => Some(Self::Csv),
            "sheets" | "google-sheets" => Some(Self::Sheets),
            "memory" | "none" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub submission: SubmissionConfig,
    pub client: ClientConfig,
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "5001")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let sink_raw = var_or("SUBMISSION_SINK", "csv");
        let sink = SinkKind::parse(&sink_raw).ok_or(ConfigError::InvalidSink(sink_raw))?;

        let offset_minutes = var_or("RECORD_UTC_OFFSET_MINUTES", "300")
            .trim()
            .parse::<i32>()
            .map_err(|_| ConfigError::InvalidUtcOffset)?;
        let record_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(ConfigError::InvalidUtcOffset)?;

        let timeout_secs = var_or("SUBMIT_TIMEOUT_SECS", "10")
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout)?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            submission: SubmissionConfig {
                sink,
                csv_path: PathBuf::from(var_or("SUBMISSION_CSV_PATH", "submissions.csv")),
                record_offset,
                sheets: SheetsConfig {
                    api_base: var_or("SHEETS_API_BASE", "https://sheets.googleapis.com"),
                    spreadsheet_id: optional_var("SHEETS_SPREADSHEET_ID"),
                    range: var_or("SHEETS_RANGE", "Sheet1!A:A"),
                    access_token: optional_var("SHEETS_ACCESS_TOKEN"),
                },
            },
            client: ClientConfig {
                api_url: var_or("API_URL", "http://localhost:5001"),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Backend persistence settings.
#[derive(Debug, Clone)]
pub struct SubmissionConfig {
    pub sink: SinkKind,
    pub csv_path: PathBuf,
    /// Offset used when stamping persisted records.
    pub record_offset: FixedOffset,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub api_base: String,
    pub spreadsheet_id: Option<String>,
    pub range: String,
    pub access_token: Option<String>,
}

/// Settings for the interactive client talking to a backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidSink(String),
    InvalidUtcOffset,
    InvalidTimeout,
    MissingSetting(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSink(value) => write!(
                f,
                "SUBMISSION_SINK '{}' must be one of csv, sheets, memory",
                value
            ),
            ConfigError::InvalidUtcOffset => write!(
                f,
                "RECORD_UTC_OFFSET_MINUTES must be whole minutes within +/-24 hours"
            ),
            ConfigError::InvalidTimeout => {
                write!(f, "SUBMIT_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::MissingSetting(name) => write!(f, "{} must be set", name),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "SUBMISSION_SINK",
            "SUBMISSION_CSV_PATH",
            "RECORD_UTC_OFFSET_MINUTES",
            "SUBMIT_TIMEOUT_SECS",
            "SHEETS_SPREADSHEET_ID",
            "SHEETS_ACCESS_TOKEN",
            "API_URL",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5001);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.submission.sink, SinkKind::Csv);
        assert_eq!(config.submission.record_offset.local_minus_utc(), 5 * 3600);
        assert_eq!(config.submission.sheets.range, "Sheet1!A:A");
        assert!(config.submission.sheets.spreadsheet_id.is_none());
        assert_eq!(config.client.timeout, Duration::from_secs(10));
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 5001));
        reset_env();
    }

    #[test]
    fn rejects_unknown_sink_and_bad_offset() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SUBMISSION_SINK", "ftp");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidSink(value)) if value == "ftp"
        ));

        reset_env();
        env::set_var("RECORD_UTC_OFFSET_MINUTES", "1500");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidUtcOffset)
        ));
        reset_env();
    }
}
