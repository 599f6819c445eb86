//! Integration tests for the Tesseract node API.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use tesseract_node::{AppState, NodeConfig, create_router};

// ============================================================================
// Test helpers
// ============================================================================

fn test_state() -> Arc<AppState> {
    Arc::new(AppState::with_config(NodeConfig::default()))
}

fn test_server(state: Arc<AppState>) -> TestServer {
    let router = create_router(state);
    TestServer::new(router).expect("test server")
}

fn assert_binary(bits: &str, len: usize) {
    assert_eq!(bits.len(), len, "expected {len} bits, got '{bits}'");
    assert!(
        bits.chars().all(|c| c == '0' || c == '1'),
        "expected binary string, got '{bits}'"
    );
}

// ============================================================================
// Landing page
// ============================================================================

#[tokio::test]
async fn test_home_serves_landing_page() {
    let server = test_server(test_state());
    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("TESSERACT-NODE"));
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let server = test_server(test_state());
    let response = server.get("/teleport").await;
    response.assert_status_not_found();
}

// ============================================================================
// Status endpoint
// ============================================================================

#[tokio::test]
async fn test_status_shape() {
    let server = test_server(test_state());
    let response = server.get("/status").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["node"], "Tesseract-Node Ω");
    assert_eq!(body["status"], "4D OPERATIONAL");
    assert_eq!(body["qubits"], 16);
    assert_eq!(body["offline"], true);
    assert!(body["time"].as_str().is_some_and(|t| !t.is_empty()));

    let position = body["position"].as_array().expect("position array");
    assert_eq!(position.len(), 4);
}

#[tokio::test]
async fn test_status_reflects_seeding_shifts() {
    let server = test_server(test_state());
    let body: Value = server.get("/status").await.json();

    // Seeding steps x through 0, 1, 2, 3; the node boots at x = 6.
    let position = body["position"].as_array().unwrap();
    assert_eq!(position[0].as_f64(), Some(0.0));
    assert_eq!(position[1].as_f64(), Some(6.0));
    assert_eq!(position[2].as_f64(), Some(0.0));
    assert_eq!(position[3].as_f64(), Some(0.0));
}

// ============================================================================
// Entanglement endpoints
// ============================================================================

#[tokio::test]
async fn test_entangle_returns_correlated_pair() {
    let server = test_server(test_state());

    for _ in 0..20 {
        let response = server.get("/entangle").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["entanglement"], "ACHIEVED");

        let bits = body["bell_pair"].as_str().expect("bell_pair string");
        assert_binary(bits, 2);
        // Bell pair measurements are perfectly correlated.
        assert!(bits == "00" || bits == "11", "uncorrelated pair '{bits}'");
    }
}

#[tokio::test]
async fn test_ghz_returns_correlated_state() {
    let server = test_server(test_state());

    for _ in 0..20 {
        let response = server.get("/ghz").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["qubits"], 4);

        let bits = body["ghz_state"].as_str().expect("ghz_state string");
        assert_binary(bits, 4);
        assert!(
            bits == "0000" || bits == "1111",
            "uncorrelated GHZ outcome '{bits}'"
        );
    }
}

// ============================================================================
// Move endpoint
// ============================================================================

#[tokio::test]
async fn test_move_applies_deltas() {
    let server = test_server(test_state());
    let response = server
        .get("/move")
        .add_query_param("dt", 1.0)
        .add_query_param("dx", 10.0)
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    let position = body["new_position"].as_array().expect("position array");
    assert_eq!(position[0].as_f64(), Some(299_792_458.0));
    assert_eq!(position[1].as_f64(), Some(16.0)); // 6 from seeding + 10
    assert_eq!(position[2].as_f64(), Some(0.0));
    assert_eq!(position[3].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_move_defaults_to_zero_deltas() {
    let server = test_server(test_state());
    let body: Value = server.get("/move").await.json();

    let position = body["new_position"].as_array().unwrap();
    assert_eq!(position[0].as_f64(), Some(0.0));
    assert_eq!(position[1].as_f64(), Some(6.0));
}

#[tokio::test]
async fn test_move_is_additive() {
    // Two moves on one node...
    let split = test_server(test_state());
    split
        .get("/move")
        .add_query_param("dt", 1.5)
        .add_query_param("dx", 2.25)
        .await
        .assert_status_ok();
    let split_body: Value = split
        .get("/move")
        .add_query_param("dt", 2.5)
        .add_query_param("dx", 3.5)
        .await
        .json();

    // ...equal one combined move on a fresh node.
    let combined = test_server(test_state());
    let combined_body: Value = combined
        .get("/move")
        .add_query_param("dt", 4.0)
        .add_query_param("dx", 5.75)
        .await
        .json();

    assert_eq!(split_body["new_position"], combined_body["new_position"]);
}

#[tokio::test]
async fn test_move_rejects_malformed_params() {
    let server = test_server(test_state());
    let response = server.get("/move").add_query_param("dt", "sideways").await;
    assert!(response.status_code().is_client_error());
}

// ============================================================================
// Grover endpoint
// ============================================================================

#[tokio::test]
async fn test_grover_default_target() {
    let server = test_server(test_state());
    let response = server.get("/grover").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["at_binary_index"], "11");
    assert_eq!(body["quantum_speedup"], "ACHIEVED");

    // The origin cell is always seeded.
    let found = body["found_item"].as_i64().expect("found_item integer");
    assert!((0..100).contains(&found));
}

#[tokio::test]
async fn test_grover_finds_every_target() {
    let server = test_server(test_state());

    for target in ["00", "01", "10", "11"] {
        let body: Value = server
            .get("/grover")
            .add_query_param("target", target)
            .await
            .json();
        assert_eq!(body["at_binary_index"], target);
    }
}

#[tokio::test]
async fn test_grover_rejects_bad_target() {
    let server = test_server(test_state());

    for target in ["", "1", "111", "xy"] {
        let response = server.get("/grover").add_query_param("target", target).await;
        response.assert_status(axum::http::StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().is_some());
    }
}
