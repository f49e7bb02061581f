use super::common::*;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{Request, StatusCode};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::permits::router::{assessment_handler, query_handler, submit_handler};
use crate::permits::PermitRequest;

#[tokio::test]
async fn query_handler_returns_adjusted_permits() {
    let request = PermitRequest {
        address: SAN_FRANCISCO.to_string(),
        description: "general project work".to_string(),
    };

    let Json(permits) = query_handler(State(Arc::new(engine())), Query(request)).await;

    assert_eq!(names(&permits), vec!["Building Permit"]);
    assert_eq!(permits[0].estimated_cost, 225);
}

#[tokio::test]
async fn submit_handler_accepts_empty_fields() {
    let Json(permits) =
        submit_handler(State(Arc::new(engine())), Json(PermitRequest::default())).await;
    assert!(permits.is_empty());
}

#[tokio::test]
async fn assessment_handler_echoes_address() {
    let request = PermitRequest {
        address: AUSTIN.to_string(),
        description: "new sink".to_string(),
    };

    let Json(assessment) = assessment_handler(State(Arc::new(engine())), Json(request)).await;

    assert_eq!(assessment.address, AUSTIN);
    assert_eq!(assessment.total_estimated_cost, 65);
}

#[tokio::test]
async fn get_route_reads_query_string() {
    let response = router()
        .oneshot(
            Request::get(
                "/api/v1/permits?address=123%20Main%20St%2C%20Austin%2C%20TX&description=kitchen%20remodel%20with%20new%20electrical%20outlets",
            )
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let permits = payload.as_array().expect("array payload");
    assert_eq!(permits.len(), 2);
    assert_eq!(permits[0]["name"], "Building Permit");
    assert_eq!(permits[0]["estimatedCost"], 150);
    assert_eq!(permits[0]["processingTime"], "2-3 weeks");
    assert_eq!(permits[0]["priority"], "high");
    assert_eq!(permits[1]["name"], "Electrical Permit");
    assert_eq!(permits[1]["requirements"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn get_route_defaults_missing_fields() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/permits?description=remodel")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["estimatedCost"], 150);
}

#[tokio::test]
async fn post_route_returns_json_array() {
    let response = router()
        .oneshot(json_post(
            "/api/v1/permits",
            json!({
                "address": SAN_FRANCISCO,
                "description": "demolition and plumbing",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload[0]["name"], "Plumbing Permit");
    assert_eq!(payload[0]["estimatedCost"], 98);
    assert_eq!(payload[1]["name"], "Demolition Permit");
    assert_eq!(payload[1]["estimatedCost"], 68);
}

#[tokio::test]
async fn assessment_route_serialises_camel_case() {
    let response = router()
        .oneshot(json_post(
            "/api/v1/permits/assessment",
            json!({
                "address": "Sacramento, California",
                "description": "new circuit",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["categories"], json!(["electrical"]));
    assert_eq!(payload["location"]["tier"], "moderate");
    assert_eq!(payload["totalEstimatedCost"], 90);
}

#[tokio::test]
async fn catalog_route_lists_base_costs() {
    let response = router()
        .oneshot(
            Request::get("/api/v1/permits/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let costs: Vec<u64> = payload
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|permit| permit["estimatedCost"].as_u64())
        .collect();
    assert_eq!(costs, vec![150, 75, 65, 85, 45]);
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let response = router()
        .oneshot(
            Request::post("/api/v1/permits")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}
