use metrics_exporter_prometheus::PrometheusHandle;
use permit_finder::config::PermitsConfig;
use permit_finder::permits::{PermitEngine, PermitRuleSet, RuleSetError};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads and validates the permit tables once at startup.
pub(crate) fn load_engine(config: &PermitsConfig) -> Result<PermitEngine, RuleSetError> {
    let rules = PermitRuleSet::from_optional_path(config.rules_path.as_deref())?;
    let permits = rules.catalog.permits().len();
    match &config.rules_path {
        Some(path) => {
            info!(path = %path.display(), permits, "loaded permit rules");
        }
        None => {
            info!(permits, "using standard permit rules");
        }
    }
    Ok(PermitEngine::new(rules))
}
