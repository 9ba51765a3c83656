use crate::cli::ServeArgs;
use crate::infra::{converter_from_config, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use subsidy_desk::config::AppConfig;
use subsidy_desk::error::AppError;
use subsidy_desk::telemetry;
use subsidy_desk::workflows::subsidy::EligibilityEvaluator;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let evaluator = Arc::new(EligibilityEvaluator::standard());
    let converter = Arc::new(converter_from_config(&config.currency)?);

    let app = with_service_routes(evaluator, converter)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        usd_clp_rate = config.currency.usd_clp_rate,
        "subsidy desk ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
