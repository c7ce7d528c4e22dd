use career_fit::config::TelemetryConfig;
use career_fit::telemetry::{self, TelemetryError};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Terminal commands only surface warnings unless `RUST_LOG` asks for more,
/// keeping prompts and reports readable.
pub(crate) fn init_cli_telemetry() -> Result<(), TelemetryError> {
    telemetry::init(&TelemetryConfig {
        log_level: "warn".to_string(),
    })
}
