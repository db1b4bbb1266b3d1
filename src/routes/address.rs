//! Address routes, mounted under /api/addresses.
//!
//! The static /multiple segment takes precedence over /:address_id, so the
//! batch routes must stay on their own path.

use crate::handlers::address::{
    create, create_many, delete as delete_handler, list, update, update_many,
};
use crate::state::AppState;
use axum::{
    routing::{post, put},
    Router,
};

pub fn address_routes(state: AppState) -> Router {
    Router::new()
        .route("/multiple", put(update_many).post(create_many))
        .route("/:id/addresses", post(create).get(list))
        .route("/:address_id", put(update).delete(delete_handler))
        .with_state(state)
}
