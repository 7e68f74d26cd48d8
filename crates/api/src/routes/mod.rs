//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod academics;
pub mod finance;
pub mod health;
pub mod report_cards;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(report_cards::routes())
        .merge(finance::routes())
        .merge(academics::routes())
}
