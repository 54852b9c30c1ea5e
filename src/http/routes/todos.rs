use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::application::todo_service::TodoService;
use crate::domain::todo::NewTodo;
use crate::error::Error;
use crate::http::types::{failure, success};

#[derive(Clone)]
pub struct AppState<S: TodoService> {
    pub service: S,
}

pub fn router<S: TodoService + Clone>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(get_all::<S>).post(create::<S>))
        .route("/todos/:id", get(get_by_id::<S>))
        .with_state(state)
}

async fn get_all<S: TodoService>(State(state): State<AppState<S>>) -> Response {
    match state.service.get_all().await {
        Ok(todos) => success(StatusCode::OK, "todos retrieved", todos),
        Err(err) => {
            tracing::error!(%err, "failed to list todos");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "failed to retrieve todos", err)
        }
    }
}

async fn create<S: TodoService>(
    State(state): State<AppState<S>>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(json) => json,
        Err(rejection) => return failure(StatusCode::BAD_REQUEST, "invalid input", rejection),
    };
    match state.service.create(input).await {
        Ok(todo) => success(StatusCode::CREATED, "todo created", todo),
        Err(err @ Error::Validation(_)) => {
            failure(StatusCode::BAD_REQUEST, "invalid input", err)
        }
        Err(err) => {
            tracing::error!(%err, "failed to create todo");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "failed to create todo", err)
        }
    }
}

async fn get_by_id<S: TodoService>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Response {
    // Ids are unsigned integers; anything else is a bad request
    let id = match id.parse::<u32>() {
        Ok(id) => i64::from(id),
        Err(err) => return failure(StatusCode::BAD_REQUEST, "invalid id", err),
    };
    match state.service.get_by_id(id).await {
        Ok(todo) => success(StatusCode::OK, "todo found", todo),
        // Validation and not-found both surface as 404 here
        Err(err) => failure(StatusCode::NOT_FOUND, "todo not found", err),
    }
}
