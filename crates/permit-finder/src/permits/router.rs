use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::domain::{PermitAssessment, RequiredPermit};
use super::engine::PermitEngine;

/// Address and project description submitted by the search form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PermitRequest {
    pub address: String,
    pub description: String,
}

/// Router builder exposing the permit lookup endpoints.
pub fn permit_router(engine: Arc<PermitEngine>) -> Router {
    Router::new()
        .route("/api/v1/permits", get(query_handler).post(submit_handler))
        .route("/api/v1/permits/assessment", post(assessment_handler))
        .route("/api/v1/permits/catalog", get(catalog_handler))
        .with_state(engine)
}

pub(crate) async fn query_handler(
    State(engine): State<Arc<PermitEngine>>,
    Query(request): Query<PermitRequest>,
) -> Json<Vec<RequiredPermit>> {
    Json(engine.required_permits(&request.address, &request.description))
}

pub(crate) async fn submit_handler(
    State(engine): State<Arc<PermitEngine>>,
    Json(request): Json<PermitRequest>,
) -> Json<Vec<RequiredPermit>> {
    Json(engine.required_permits(&request.address, &request.description))
}

pub(crate) async fn assessment_handler(
    State(engine): State<Arc<PermitEngine>>,
    Json(request): Json<PermitRequest>,
) -> Json<PermitAssessment> {
    Json(engine.assess(&request.address, &request.description))
}

pub(crate) async fn catalog_handler(
    State(engine): State<Arc<PermitEngine>>,
) -> Json<Vec<RequiredPermit>> {
    Json(engine.all_permits())
}
