//! Clientele: customer and address management REST API.

pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{address_routes, common_routes, customer_routes};
pub use service::{recompute_single_address_flag, AddressService, CustomerService, FlagMaintenance};
pub use state::AppState;
pub use store::{connect, ensure_tables};

use axum::{http::StatusCode, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The full application router: API routes, operational routes, CORS, request
/// tracing, and the catch-all 404.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/customers", customer_routes(state.clone()))
        .nest("/api/addresses", address_routes(state))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found() -> (StatusCode, Json<response::ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(response::ErrorBody::new("Route Not Found".into())),
    )
}
