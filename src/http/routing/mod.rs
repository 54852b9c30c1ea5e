use axum::{Router, routing::get};

/// Assembles the full application router: a liveness probe at the root and
/// the versioned API underneath.
pub fn app(todos: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api/v1", todos)
}
