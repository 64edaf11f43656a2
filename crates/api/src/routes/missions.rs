//! Route definitions for missions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mission;
use crate::state::AppState;

/// Routes mounted at `/missions`.
///
/// ```text
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(mission::create)).route(
        "/{id}",
        get(mission::get_by_id)
            .put(mission::update)
            .delete(mission::delete),
    )
}
