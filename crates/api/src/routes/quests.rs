//! Route definitions for quests.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::quest;
use crate::state::AppState;

/// Routes mounted at `/quests`.
///
/// ```text
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/missions   -> list_missions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(quest::create))
        .route(
            "/{id}",
            get(quest::get_by_id)
                .put(quest::update)
                .delete(quest::delete),
        )
        .route("/{id}/missions", get(quest::list_missions))
}
