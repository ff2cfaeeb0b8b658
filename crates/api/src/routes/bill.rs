//! Route definitions for the `/bills` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::bill;
use crate::state::AppState;

/// Routes mounted at `/bills`.
///
/// ```text
/// GET    /                     -> list (?profile_id=, 5 most recent)
/// POST   /                     -> create
/// PATCH  /{id}                 -> toggle_status
/// DELETE /{id}                 -> delete
/// GET    /{id}/whatsapp-link   -> whatsapp_link
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bill::list).post(bill::create))
        .route("/{id}", patch(bill::toggle_status).delete(bill::delete))
        .route("/{id}/whatsapp-link", get(bill::whatsapp_link))
}
