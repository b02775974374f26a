//! Network Handlers
//!
//! HTTP handlers for network lookups and wallet-provider request parameters.
//! Chain IDs in paths and queries accept decimal or 0x-prefixed hex.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::domain::models::network::parse_chain_id;
use crate::infrastructure::driving_adapters::api_rest::dto::network::{
    AddEthereumChainParameterDto, NetworkResponseDto, NetworkSupportDto, SelectNetworkQuery,
    SwitchEthereumChainParameterDto,
};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for network endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_supported_networks))
        .route("/default", get(get_default_network))
        .route("/select", get(select_network))
        .route("/:chain_id", get(get_network_by_chain_id))
        .route("/:chain_id/supported", get(check_network_support))
        .route("/:chain_id/wallet/add", get(get_add_chain_parameter))
        .route("/:chain_id/wallet/switch", get(get_switch_chain_parameter))
}

/// GET /networks - List all supported networks
///
/// # Responses
///
/// * 200 OK - Supported networks (sorted by chain ID)
#[axum::debug_handler]
async fn list_supported_networks(State(state): State<AppState>) -> Json<Vec<NetworkResponseDto>> {
    let networks = state.list_supported_networks_use_case.execute();

    Json(networks.iter().map(NetworkResponseDto::from).collect())
}

/// GET /networks/default - Get the default network
///
/// # Responses
///
/// * 200 OK - Default network
#[axum::debug_handler]
async fn get_default_network(State(state): State<AppState>) -> Json<NetworkResponseDto> {
    Json(NetworkResponseDto::from(state.get_default_network_use_case.execute()))
}

/// GET /networks/select?chainId= - Select a network, falling back to the default
///
/// # Responses
///
/// * 200 OK - Requested network, or the default when `chainId` is absent
/// * 400 Bad Request - Malformed `chainId`, reported exactly like a malformed path chain ID
/// * 404 Not Found - Requested network is not supported
#[axum::debug_handler]
async fn select_network(
    State(state): State<AppState>,
    Query(query): Query<SelectNetworkQuery>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let chain_id = query.chain_id.as_deref().map(parse_chain_id).transpose()?;
    let network = state.select_network_use_case.execute(chain_id)?;

    Ok(Json(NetworkResponseDto::from(network)))
}

/// GET /networks/:chain_id - Get a network by chain ID
///
/// # Responses
///
/// * 200 OK - Network found
/// * 400 Bad Request - Malformed chain ID
/// * 404 Not Found - Network is not supported
#[axum::debug_handler]
async fn get_network_by_chain_id(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
) -> Result<Json<NetworkResponseDto>, ApiError> {
    let chain_id = parse_chain_id(&chain_id)?;
    let network = state.get_network_by_chain_id_use_case.execute(chain_id)?;

    Ok(Json(NetworkResponseDto::from(network)))
}

/// GET /networks/:chain_id/supported - Check whether a chain ID is supported
///
/// # Responses
///
/// * 200 OK - `{ chainId, supported }`, for any well-formed chain ID
/// * 400 Bad Request - Malformed chain ID
#[axum::debug_handler]
async fn check_network_support(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
) -> Result<Json<NetworkSupportDto>, ApiError> {
    let chain_id = parse_chain_id(&chain_id)?;
    let supported = state.check_network_support_use_case.execute(chain_id);

    Ok(Json(NetworkSupportDto { chain_id, supported }))
}

/// GET /networks/:chain_id/wallet/add - `wallet_addEthereumChain` parameters
///
/// # Responses
///
/// * 200 OK - EIP-3085 parameter object
/// * 400 Bad Request - Malformed chain ID
/// * 404 Not Found - Network is not supported
#[axum::debug_handler]
async fn get_add_chain_parameter(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
) -> Result<Json<AddEthereumChainParameterDto>, ApiError> {
    let chain_id = parse_chain_id(&chain_id)?;
    let network = state.get_network_by_chain_id_use_case.execute(chain_id)?;

    Ok(Json(AddEthereumChainParameterDto::from(&network)))
}

/// GET /networks/:chain_id/wallet/switch - `wallet_switchEthereumChain` parameters
///
/// # Responses
///
/// * 200 OK - EIP-3326 parameter object
/// * 400 Bad Request - Malformed chain ID
/// * 404 Not Found - Network is not supported
#[axum::debug_handler]
async fn get_switch_chain_parameter(
    State(state): State<AppState>,
    Path(chain_id): Path<String>,
) -> Result<Json<SwitchEthereumChainParameterDto>, ApiError> {
    let chain_id = parse_chain_id(&chain_id)?;
    let network = state.get_network_by_chain_id_use_case.execute(chain_id)?;

    Ok(Json(SwitchEthereumChainParameterDto::from(&network)))
}
