use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCampaignDirectory};
use crate::routes::with_trust_routes;
use adtrust::config::AppConfig;
use adtrust::error::AppError;
use adtrust::telemetry;
use adtrust::trust::{HttpDetectorClient, InMemoryTrustStore, ScoringPolicy, TrustScoreService};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
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

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(InMemoryCampaignDirectory::with_seed_data());
    let detectors = Arc::new(HttpDetectorClient::new(&config.detectors)?);
    let store = Arc::new(InMemoryTrustStore::default());
    let trust_service = Arc::new(TrustScoreService::new(
        directory,
        detectors,
        store,
        ScoringPolicy::default(),
    ));

    let app = with_trust_routes(trust_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "trust scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
