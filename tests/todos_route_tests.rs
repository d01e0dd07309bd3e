use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use sqlx::SqlitePool;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::time::SystemTime;
use tally::db::TodoStore;
use tally::views::helpers::list_complete;
use tower::ServiceExt;

async fn test_app(tag: &str) -> (Router, SqlitePool, PathBuf) {
    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);
    std::process::id().hash(&mut hasher);
    let db_path = std::env::temp_dir().join(format!("tally_{tag}_{}.sqlite", hasher.finish()));
    let database_url = format!("sqlite:{}", db_path.to_str().unwrap());

    let pool = tally::db::connect(&database_url).await.expect("db connect");
    let state = tally::server::router::AppState::new(pool.clone());
    (tally::server::router::app_router(state), pool, db_path)
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}

fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .expect("missing location header")
}

#[tokio::test]
async fn duplicate_todo_name_is_rejected() {
    let (app, pool, db_path) = test_app("todos_dup").await;

    let mut store = TodoStore::acquire(&pool).await.unwrap();
    let groceries = store.create_list("Groceries").await.unwrap();

    let resp = app
        .clone()
        .oneshot(form_post(&format!("/lists/{groceries}/todos"), "todo=Milk"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/lists/{groceries}"));

    // Adding "Milk" again re-renders the detail page with the error.
    let resp = app
        .clone()
        .oneshot(form_post(&format!("/lists/{groceries}/todos"), "todo=Milk"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Todo name must be unique."));

    let todos = store.todos_for_list(groceries).await.unwrap();
    assert_eq!(todos.len(), 1, "The rejected add must not insert a row");
    assert_eq!(todos[0].name, "Milk");

    let _ = tokio::fs::remove_file(&db_path).await;
}

#[tokio::test]
async fn todo_name_length_is_validated() {
    let (app, pool, db_path) = test_app("todos_len").await;

    let mut store = TodoStore::acquire(&pool).await.unwrap();
    let list_id = store.create_list("Chores").await.unwrap();

    let resp = app
        .clone()
        .oneshot(form_post(&format!("/lists/{list_id}/todos"), "todo="))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("The todo name must be between 1 and 100 characters."));
    assert!(store.todos_for_list(list_id).await.unwrap().is_empty());

    let _ = tokio::fs::remove_file(&db_path).await;
}

#[tokio::test]
async fn completing_a_todo_completes_the_list() {
    let (app, pool, db_path) = test_app("todos_complete").await;

    let mut store = TodoStore::acquire(&pool).await.unwrap();
    let work = store.create_list("Work").await.unwrap();
    let report = store.create_todo(work, "Report").await.unwrap();

    let resp = app
        .clone()
        .oneshot(form_post(
            &format!("/lists/{work}/todos/{report}"),
            "completed=true",
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/lists/{work}"));

    let list = store.find_list(work).await.unwrap().unwrap();
    assert!(list.todos[0].completed);
    assert!(list_complete(&list));

    // And back again.
    let resp = app
        .clone()
        .oneshot(form_post(
            &format!("/lists/{work}/todos/{report}"),
            "completed=false",
        ))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let list = store.find_list(work).await.unwrap().unwrap();
    assert!(!list.todos[0].completed);
    assert!(!list_complete(&list));

    let _ = tokio::fs::remove_file(&db_path).await;
}

#[tokio::test]
async fn check_all_marks_every_todo_complete() {
    let (app, pool, db_path) = test_app("todos_check_all").await;

    let mut store = TodoStore::acquire(&pool).await.unwrap();
    let list_id = store.create_list("Packing").await.unwrap();
    store.create_todo(list_id, "Socks").await.unwrap();
    let passport = store.create_todo(list_id, "Passport").await.unwrap();
    store.set_todo_status(list_id, passport, true).await.unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/lists/{list_id}/check_all"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/lists/{list_id}"));

    let list = store.find_list(list_id).await.unwrap().unwrap();
    assert!(list.todos.iter().all(|t| t.completed));
    assert!(list_complete(&list));

    let _ = tokio::fs::remove_file(&db_path).await;
}

#[tokio::test]
async fn destroy_todo_answers_ajax_with_no_content() {
    let (app, pool, db_path) = test_app("todos_destroy").await;

    let mut store = TodoStore::acquire(&pool).await.unwrap();
    let list_id = store.create_list("Inbox").await.unwrap();
    let first = store.create_todo(list_id, "First").await.unwrap();
    let second = store.create_todo(list_id, "Second").await.unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/lists/{list_id}/todos/{first}/destroy"))
                .header("x-requested-with", "XMLHttpRequest")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/lists/{list_id}/todos/{second}/destroy"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), format!("/lists/{list_id}"));

    assert!(store.todos_for_list(list_id).await.unwrap().is_empty());

    let _ = tokio::fs::remove_file(&db_path).await;
}

#[tokio::test]
async fn todo_routes_redirect_when_list_is_missing() {
    let (app, _pool, db_path) = test_app("todos_missing").await;

    let resp = app
        .clone()
        .oneshot(form_post("/lists/9999/todos", "todo=Anything"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/lists");

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/lists/9999/check_all")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/lists");

    let _ = tokio::fs::remove_file(&db_path).await;
}

#[tokio::test]
async fn detail_page_shows_incomplete_todos_first() {
    let (app, pool, db_path) = test_app("todos_order").await;

    let mut store = TodoStore::acquire(&pool).await.unwrap();
    let list_id = store.create_list("Ordered").await.unwrap();
    let done = store.create_todo(list_id, "AlreadyDone").await.unwrap();
    store.create_todo(list_id, "StillOpen").await.unwrap();
    store.set_todo_status(list_id, done, true).await.unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/lists/{list_id}"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    let open_at = body.find("StillOpen").expect("open todo missing");
    let done_at = body.find("AlreadyDone").expect("done todo missing");
    assert!(open_at < done_at, "incomplete todos render first");

    let _ = tokio::fs::remove_file(&db_path).await;
}
