use axum::Router;
use axum::body::to_bytes;
use serde_json::json;
use todolist::application::todo_service::TodoServiceImpl;
use todolist::domain::repository::TodoRepository;
use todolist::http::routing;
use todolist::http::routes::todos;
use todolist::infrastructure::sqlite_repo::SqliteTodoRepository;

async fn app() -> Router {
    let repo = SqliteTodoRepository::connect("sqlite::memory:").await.unwrap();
    repo.init().await.unwrap();
    let service = TodoServiceImpl::new(repo);
    routing::app(todos::router(todos::AppState { service }))
}

#[tokio::test]
async fn create_then_fetch_by_id() {
    let app = app().await;

    let res = request(&app, "POST", "/api/v1/todos", Some(json!({"content": "buy milk"}))).await;
    assert_eq!(res.status(), 201);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["content"], json!("buy milk"));
    assert_eq!(body["data"]["status"], json!(false));
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let res = request(&app, "GET", &format!("/api/v1/todos/{id}"), None).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["content"], json!("buy milk"));
}

#[tokio::test]
async fn list_on_empty_store_is_empty_array() {
    let app = app().await;
    let res = request(&app, "GET", "/api/v1/todos", None).await;
    assert_eq!(res.status(), 200);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"], json!([]));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn fetch_unknown_id_is_404() {
    let app = app().await;
    let res = request(&app, "GET", "/api/v1/todos/999999", None).await;
    assert_eq!(res.status(), 404);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn fetch_id_zero_is_404() {
    // id 0 parses but fails service validation; that collapses to 404 here
    let app = app().await;
    let res = request(&app, "GET", "/api/v1/todos/0", None).await;
    assert_eq!(res.status(), 404);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn fetch_non_numeric_id_is_400() {
    let app = app().await;
    let res = request(&app, "GET", "/api/v1/todos/not-a-number", None).await;
    assert_eq!(res.status(), 400);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn create_without_content_is_400() {
    let app = app().await;
    let res = request(&app, "POST", "/api/v1/todos", Some(json!({"status": true}))).await;
    assert_eq!(res.status(), 400);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn create_with_empty_content_is_400() {
    let app = app().await;
    let res = request(&app, "POST", "/api/v1/todos", Some(json!({"content": ""}))).await;
    assert_eq!(res.status(), 400);
    let body = body_json(res).await;
    assert_eq!(body["success"], json!(false));

    // nothing reached the store
    let res = request(&app, "GET", "/api/v1/todos", None).await;
    let body = body_json(res).await;
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn health_probe() {
    let app = app().await;
    let res = request(&app, "GET", "/health", None).await;
    assert_eq!(res.status(), 200);
}

async fn request(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<serde_json::Value>,
) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder()
        .method(Method::from_bytes(method.as_bytes()).unwrap())
        .uri(path);
    let req = match body {
        Some(json) => req
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

async fn body_json(res: hyper::Response<axum::body::Body>) -> serde_json::Value {
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
