pub mod form;
pub mod health;
pub mod worksheet;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form::form_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/levels", get(worksheet::handle_list_levels))
        .route("/api/v1/worksheet", get(worksheet::handle_worksheet))
        .with_state(state)
}
