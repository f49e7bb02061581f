use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use serde_json::Value;
use std::sync::Arc;

use crate::permits::{
    permit_router, CategoryRule, KeywordRules, LocationPricing, LocationTier, PermitCatalog,
    PermitCategory, PermitDefinition, PermitEngine, PermitPriority, PermitRuleSet,
    RequiredPermit,
};

pub(super) const AUSTIN: &str = "123 Main St, Austin, TX";
pub(super) const SAN_FRANCISCO: &str = "1 Market St, San Francisco, CA";

pub(super) fn engine() -> PermitEngine {
    PermitEngine::standard()
}

pub(super) fn names(permits: &[RequiredPermit]) -> Vec<&str> {
    permits.iter().map(|permit| permit.name.as_str()).collect()
}

pub(super) fn base_cost(name: &str) -> u32 {
    PermitCatalog::standard()
        .permits()
        .iter()
        .find(|permit| permit.name == name)
        .map(|permit| permit.base_cost)
        .expect("permit present in standard catalog")
}

/// Small substitute tables so engine behaviour can be checked without the shipped data.
pub(super) fn solar_rule_set() -> PermitRuleSet {
    let catalog = PermitCatalog::new(vec![PermitDefinition {
        id: 42,
        name: "Electrical Solar Interconnect".to_string(),
        description: "Grid-tied solar arrays.".to_string(),
        base_cost: 200,
        processing_time: "4 weeks".to_string(),
        priority: PermitPriority::Low,
        icon: "☀️".to_string(),
        requirements: vec!["Single-line diagram".to_string()],
    }])
    .expect("valid catalog");

    let keywords = KeywordRules::new(
        vec![CategoryRule::new(
            PermitCategory::Electrical,
            ["solar", "photovoltaic"],
        )],
        vec!["install".to_string()],
        PermitCategory::Electrical,
    )
    .expect("valid keywords");

    let pricing = LocationPricing::new(
        vec![LocationTier::new("desert", 0.5, ["phoenix"])],
        "standard",
        1.0,
    )
    .expect("valid pricing");

    PermitRuleSet {
        catalog,
        keywords,
        pricing,
    }
}

pub(super) fn router() -> axum::Router {
    permit_router(Arc::new(engine()))
}

pub(super) fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
