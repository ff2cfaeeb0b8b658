pub mod bill;
pub mod health;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profiles                 list, create
/// /profiles/{id}            get (with recent bills), update, delete
///
/// /bills                    list by profile (query param), create
/// /bills/{id}               toggle status (PATCH), delete
/// /bills/{id}/whatsapp-link derive WhatsApp send URL
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/profiles", profile::router())
        .nest("/bills", bill::router())
}
