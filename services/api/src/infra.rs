use metrics_exporter_prometheus::PrometheusHandle;
use ssum_detector::analysis::AnalysisEngine;
use ssum_detector::config::AppConfig;
use ssum_detector::error::AppError;
use ssum_detector::telemetry::{self, LogSink};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Configure logging for a console command and build the engine it scores with.
pub(crate) fn load_engine() -> Result<AnalysisEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogSink::Stderr)?;
    Ok(config.analysis.engine()?)
}

pub(crate) fn parse_reply(raw: &str) -> Result<bool, String> {
    match raw.trim().to_lowercase().as_str() {
        "예" | "y" | "yes" => Ok(true),
        "아니오" | "n" | "no" => Ok(false),
        _ => Err(format!("'{raw}' is not a yes/no reply (예/아니오, y/n, yes/no)")),
    }
}
