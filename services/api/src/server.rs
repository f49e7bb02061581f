use crate::cli::ServeArgs;
use crate::infra::{load_engine, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use permit_finder::address::AddressLookup;
use permit_finder::config::AppConfig;
use permit_finder::error::AppError;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(load_engine(&config.permits)?);
    let addresses = Arc::new(AddressLookup::from_config(&config.address));
    info!(provider = %addresses.source(), "address suggestions configured");

    let app = with_service_routes(engine, addresses)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "permit finder ready");

    axum::serve(listener, app).await?;
    Ok(())
}
