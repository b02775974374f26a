//! End-to-end tests for network endpoints
//!
//! These tests drive the full router (middleware included) over the
//! built-in network registry.

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;

use common::{ErrorResponse, NetworkResponse, SupportResponse, TestApp};

// ============================================================================
// GET /networks - List Networks
// ============================================================================

#[tokio::test]
async fn test_list_networks_returns_builtin_networks_sorted() {
    let app = TestApp::new();

    let response = app.get("/networks").await;
    assert_eq!(response.status, StatusCode::OK);

    let networks: Vec<NetworkResponse> = response.json();
    let chain_ids: Vec<u64> = networks.iter().map(|n| n.chain_id).collect();
    assert_eq!(chain_ids, vec![1337, 10143]);
}

#[tokio::test]
async fn test_list_networks_hex_matches_decimal() {
    let app = TestApp::new();

    let networks: Vec<NetworkResponse> = app.get("/networks").await.json();
    for network in networks {
        let digits = network.chain_id_hex.trim_start_matches("0x");
        assert_eq!(u64::from_str_radix(digits, 16).unwrap(), network.chain_id);
        assert!(!network.rpc_urls.is_empty());
    }
}

// ============================================================================
// GET /networks/:chain_id - Lookup
// ============================================================================

#[tokio::test]
async fn test_get_hardhat_local() {
    let app = TestApp::new();

    let response = app.get("/networks/1337").await;
    assert_eq!(response.status, StatusCode::OK);

    let network: NetworkResponse = response.json();
    assert_eq!(network.name, "Hardhat Local");
    assert_eq!(network.rpc_urls, vec!["http://127.0.0.1:8545"]);
    assert_eq!(network.chain_id_hex, "0x539");
    assert_eq!(network.native_currency.symbol, "ETH");
    assert!(network.block_explorer_urls.is_empty());
}

#[tokio::test]
async fn test_get_monad_testnet() {
    let app = TestApp::new();

    let response = app.get("/networks/10143").await;
    assert_eq!(response.status, StatusCode::OK);

    let network: NetworkResponse = response.json();
    assert_eq!(network.name, "Monad Testnet");
    assert_eq!(network.rpc_urls, vec!["https://testnet-rpc.monad.xyz"]);
    assert_eq!(network.native_currency.name, "Monad");
    assert_eq!(network.native_currency.decimals, 18);
    assert!(network.test_net);
}

#[tokio::test]
async fn test_get_network_by_hex_chain_id() {
    let app = TestApp::new();

    let response = app.get("/networks/0x279f").await;
    assert_eq!(response.status, StatusCode::OK);

    let network: NetworkResponse = response.json();
    assert_eq!(network.chain_id, 10143);
}

#[tokio::test]
async fn test_get_unsupported_network_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/networks/999999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let error: ErrorResponse = response.json();
    assert_eq!(error.error.code, "UNSUPPORTED_NETWORK");
    assert!(error.error.message.contains("999999"));
    assert!(!error.timestamp.is_empty());
}

#[tokio::test]
async fn test_get_negative_chain_id_returns_not_found() {
    let app = TestApp::new();

    let response = app.get("/networks/-1337").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_malformed_chain_id_returns_bad_request() {
    let app = TestApp::new();

    for uri in ["/networks/monad", "/networks/0xzz", "/networks/0xffffffffffffffff"] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");

        let error: ErrorResponse = response.json();
        assert_eq!(error.error.code, "INVALID_CHAIN_ID");
    }
}

// ============================================================================
// GET /networks/:chain_id/supported - Support check
// ============================================================================

#[tokio::test]
async fn test_supported_check() {
    let app = TestApp::new();

    let supported: SupportResponse = app.get("/networks/10143/supported").await.json();
    assert_eq!(supported.chain_id, 10143);
    assert!(supported.supported);

    let unsupported: SupportResponse = app.get("/networks/1/supported").await.json();
    assert!(!unsupported.supported);
}

#[tokio::test]
async fn test_supported_check_never_fails_for_integers() {
    let app = TestApp::new();

    for chain_id in ["0", "-1", "9223372036854775807", "-9223372036854775808"] {
        let response = app.get(&format!("/networks/{chain_id}/supported")).await;
        assert_eq!(response.status, StatusCode::OK, "{chain_id}");

        let body: SupportResponse = response.json();
        assert!(!body.supported);
    }
}

// ============================================================================
// GET /networks/default and /networks/select
// ============================================================================

#[tokio::test]
async fn test_default_network() {
    let app = TestApp::new();

    let response = app.get("/networks/default").await;
    assert_eq!(response.status, StatusCode::OK);

    let default: NetworkResponse = response.json();
    assert_eq!(default.chain_id, 10143);

    let looked_up: NetworkResponse = app.get(&format!("/networks/{}", default.chain_id)).await.json();
    assert_eq!(looked_up.name, default.name);
    assert_eq!(looked_up.rpc_urls, default.rpc_urls);
}

#[tokio::test]
async fn test_select_without_chain_id_uses_default() {
    let app = TestApp::new();

    let network: NetworkResponse = app.get("/networks/select").await.json();
    assert_eq!(network.chain_id, 10143);
}

#[tokio::test]
async fn test_select_with_chain_id() {
    let app = TestApp::new();

    let response = app.get("/networks/select?chainId=0x539").await;
    assert_eq!(response.status, StatusCode::OK);

    let network: NetworkResponse = response.json();
    assert_eq!(network.name, "Hardhat Local");
}

#[tokio::test]
async fn test_select_unsupported_does_not_fall_back() {
    let app = TestApp::new();

    let response = app.get("/networks/select?chainId=1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_select_malformed_chain_id_returns_invalid_chain_id() {
    let app = TestApp::new();

    for uri in [
        "/networks/select?chainId=monad",
        "/networks/select?chainId=0xzz",
        "/networks/select?chainId=99999999999999999999",
        "/networks/select?chainId=",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{uri}");

        let error: ErrorResponse = response.json();
        assert_eq!(error.error.code, "INVALID_CHAIN_ID", "{uri}");
    }
}

#[tokio::test]
async fn test_select_and_path_parse_chain_ids_alike() {
    let app = TestApp::new();

    for raw in ["monad", "%2B5", "%201337%20", "-1", "0x539"] {
        let by_path = app.get(&format!("/networks/{raw}")).await;
        let by_query = app.get(&format!("/networks/select?chainId={raw}")).await;
        assert_eq!(by_path.status, by_query.status, "{raw}");
    }
}

// ============================================================================
// Wallet-provider parameters
// ============================================================================

#[tokio::test]
async fn test_wallet_add_parameters() {
    let app = TestApp::new();

    let response = app.get("/networks/10143/wallet/add").await;
    assert_eq!(response.status, StatusCode::OK);

    let params: Value = response.json();
    assert_eq!(params["chainId"], "0x279f");
    assert_eq!(params["chainName"], "Monad Testnet");
    assert_eq!(params["nativeCurrency"]["symbol"], "MON");
    assert_eq!(params["rpcUrls"][0], "https://testnet-rpc.monad.xyz");
    assert_eq!(params["blockExplorerUrls"][0], "https://testnet.monadexplorer.com");
}

#[tokio::test]
async fn test_wallet_add_parameters_without_explorer() {
    let app = TestApp::new();

    let params: Value = app.get("/networks/1337/wallet/add").await.json();
    assert_eq!(params["chainId"], "0x539");
    assert!(params.get("blockExplorerUrls").is_none());
}

#[tokio::test]
async fn test_wallet_switch_parameters() {
    let app = TestApp::new();

    let params: Value = app.get("/networks/1337/wallet/switch").await.json();
    assert_eq!(params, serde_json::json!({ "chainId": "0x539" }));
}

#[tokio::test]
async fn test_wallet_parameters_for_unsupported_network() {
    let app = TestApp::new();

    assert_eq!(app.get("/networks/1/wallet/add").await.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/networks/1/wallet/switch").await.status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Middleware and health
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let app = TestApp::new();

    let response = app.get("/networks/default").await;
    let request_id = response.request_id.expect("x-request-id header");
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = TestApp::new();

    let response = app
        .send(
            Request::builder()
                .uri("/networks/1337")
                .header("x-request-id", "trace-me-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(response.request_id.as_deref(), Some("trace-me-123"));
}

#[tokio::test]
async fn test_error_responses_carry_request_id_in_header_only() {
    let app = TestApp::new();

    let response = app.get("/networks/999999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.request_id.is_some());

    let body: Value = response.json();
    assert!(body.get("requestId").is_none());
    assert_eq!(body["error"]["code"], "UNSUPPORTED_NETWORK");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}
