pub mod health;
pub mod missions;
pub mod quests;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the entity route tree.
///
/// Route hierarchy:
///
/// ```text
/// /quests                        create
/// /quests/{id}                   get, update, delete
/// /quests/{id}/missions          missions of a quest
///
/// /students                      create
/// /students/{id}                 get, update, delete
/// /students/{id}/missions        missions assigned to a student
///
/// /missions                      create
/// /missions/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/quests", quests::router())
        .nest("/students", students::router())
        .nest("/missions", missions::router())
}
