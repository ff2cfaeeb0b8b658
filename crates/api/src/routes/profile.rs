//! Route definitions for the `/profiles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /        -> list (with latest-bill previews)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id (with 5 most recent bills)
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete (cascades to bills)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::list).post(profile::create))
        .route(
            "/{id}",
            get(profile::get_by_id)
                .put(profile::update)
                .delete(profile::delete),
        )
}
