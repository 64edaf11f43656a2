/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// The pool is the only handle to persisted data; handlers receive it here
/// instead of reaching for a process-wide connection.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: task_tracker_db::DbPool,
}
