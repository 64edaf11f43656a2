//! Route definitions for students.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/students`.
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
        .route("/", post(student::create))
        .route(
            "/{id}",
            get(student::get_by_id)
                .put(student::update)
                .delete(student::delete),
        )
        .route("/{id}/missions", get(student::list_missions))
}
