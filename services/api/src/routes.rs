use crate::infra::AppState;
use adtrust::error::AppError;
use adtrust::trust::{
    CampaignDirectory, CampaignId, DetectorClient, TrustRecord, TrustRecordStore,
    TrustScoreService,
};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_trust_routes<C, D, S>(
    service: Arc<TrustScoreService<C, D, S>>,
) -> axum::Router
where
    C: CampaignDirectory + 'static,
    D: DetectorClient + 'static,
    S: TrustRecordStore + 'static,
{
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/trust-score/:campaign_id",
            axum::routing::post(recompute_trust_score::<C, D, S>)
                .get(get_trust_score::<C, D, S>),
        )
        .with_state(service)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "adtrust-api" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Trigger a full recomputation and return the freshly persisted record.
pub(crate) async fn recompute_trust_score<C, D, S>(
    State(service): State<Arc<TrustScoreService<C, D, S>>>,
    Path(campaign_id): Path<String>,
) -> Result<Json<TrustRecord>, AppError>
where
    C: CampaignDirectory + 'static,
    D: DetectorClient + 'static,
    S: TrustRecordStore + 'static,
{
    let record = service.recompute(&CampaignId::new(campaign_id)).await?;
    Ok(Json(record))
}

/// Return the persisted record without recomputing.
pub(crate) async fn get_trust_score<C, D, S>(
    State(service): State<Arc<TrustScoreService<C, D, S>>>,
    Path(campaign_id): Path<String>,
) -> Result<Json<TrustRecord>, AppError>
where
    C: CampaignDirectory + 'static,
    D: DetectorClient + 'static,
    S: TrustRecordStore + 'static,
{
    let record = service.get(&CampaignId::new(campaign_id))?;
    Ok(Json(record))
}
