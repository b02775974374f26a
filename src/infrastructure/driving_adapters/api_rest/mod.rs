//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::networks::{
    CheckNetworkSupportUseCase, GetDefaultNetworkUseCase, GetNetworkByChainIdUseCase,
    ListSupportedNetworksUseCase, SelectNetworkUseCase,
};
use crate::domain::gateways::NetworkRegistry;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub get_network_by_chain_id_use_case: Arc<GetNetworkByChainIdUseCase>,
    pub check_network_support_use_case: Arc<CheckNetworkSupportUseCase>,
    pub get_default_network_use_case: Arc<GetDefaultNetworkUseCase>,
    pub list_supported_networks_use_case: Arc<ListSupportedNetworksUseCase>,
    pub select_network_use_case: Arc<SelectNetworkUseCase>,
}

impl AppState {
    /// Wire every use case to the same registry
    #[must_use]
    pub fn new(network_registry: Arc<dyn NetworkRegistry>) -> Self {
        Self {
            get_network_by_chain_id_use_case: Arc::new(GetNetworkByChainIdUseCase::new(network_registry.clone())),
            check_network_support_use_case: Arc::new(CheckNetworkSupportUseCase::new(network_registry.clone())),
            get_default_network_use_case: Arc::new(GetDefaultNetworkUseCase::new(network_registry.clone())),
            list_supported_networks_use_case: Arc::new(ListSupportedNetworksUseCase::new(network_registry.clone())),
            select_network_use_case: Arc::new(SelectNetworkUseCase::new(network_registry)),
        }
    }
}

/// Build the full application router with its middleware stack
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/networks", handlers::networks::router())
        .merge(handlers::health::router())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
