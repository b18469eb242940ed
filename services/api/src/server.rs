use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ssum_detector::config::AppConfig;
use ssum_detector::error::AppError;
use ssum_detector::telemetry::{self, LogSink};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, LogSink::Stdout)?;

    // a bad lexicon override aborts startup before the socket is bound
    let engine = Arc::new(config.analysis.engine()?);
    info!(
        positive_terms = engine.lexicon().positive_terms().len(),
        ambiguous_terms = engine.lexicon().ambiguous_terms().len(),
        questions = engine.questionnaire().len(),
        "analysis tables loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_analysis_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ssum detector ready");

    axum::serve(listener, app).await?;
    Ok(())
}
