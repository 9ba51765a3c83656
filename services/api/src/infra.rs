use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use subsidy_desk::config::CurrencyConfig;
use subsidy_desk::error::AppError;
use subsidy_desk::workflows::currency::UsdClpConverter;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn converter_from_config(config: &CurrencyConfig) -> Result<UsdClpConverter, AppError> {
    Ok(UsdClpConverter::new(config.usd_clp_rate)?)
}
