//! End-to-end tests for the task HTTP API
//!
//! Each test spins up a real server on a random free port and drives it with
//! an HTTP client.

use std::net::SocketAddr;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tempfile::TempDir;

use tasklist_core::task::Task;
use tasklist_server::service::CreateTaskRequest;
use tasklist_server::state::AppState;

struct TestServer {
    addr: SocketAddr,
    state: AppState,
    client: reqwest::Client,
    _data_dir: TempDir,
}

impl TestServer {
    async fn spawn() -> Self {
        let data_dir = TempDir::new().unwrap();
        let state = AppState::new(data_dir.path().to_path_buf()).await.unwrap();
        let app = tasklist_server::app(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            client: reqwest::Client::new(),
            _data_dir: data_dir,
        }
    }

    fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    /// Seed a task directly through the service, bypassing HTTP
    async fn seed(&self, name: &str, completed: bool) -> Task {
        self.state
            .tasks()
            .create(CreateTaskRequest {
                name: Some(name.to_string()),
                completed: Some(completed),
            })
            .await
            .unwrap()
    }
}

fn assert_json_content_type(response: &reqwest::Response) {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .expect("missing content-type")
        .to_str()
        .unwrap();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );
}

#[tokio::test]
async fn should_return_empty_tasks() {
    let server = TestServer::spawn().await;

    let response = server.client.get(server.url("/tasks")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let tasks: Vec<Task> = response.json().await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn should_return_multiple_tasks() {
    let server = TestServer::spawn().await;
    let mut seeded = Vec::new();
    seeded.push(server.seed("task01", true).await);
    seeded.push(server.seed("Task02", false).await);

    let response = server.client.get(server.url("/tasks")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let fetched: Vec<Task> = response.json().await.unwrap();
    assert_eq!(fetched, seeded);
}

#[tokio::test]
async fn should_return_to_be_done_tasks_given_completed_is_false() {
    let server = TestServer::spawn().await;
    let to_be_done = server.seed("task01", false).await;
    server.seed("task02", true).await;

    let response = server
        .client
        .get(server.url("/tasks?completed=false"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let fetched: Vec<Task> = response.json().await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].name, to_be_done.name);
    assert!(!fetched[0].completed);
}

#[tokio::test]
async fn should_return_completed_tasks_given_completed_is_true() {
    let server = TestServer::spawn().await;
    server.seed("task01", false).await;
    let completed = server.seed("task02", true).await;

    let response = server
        .client
        .get(server.url("/tasks?completed=true"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_json_content_type(&response);
    let fetched: Vec<Task> = response.json().await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].name, completed.name);
    assert!(fetched[0].completed);
}

#[tokio::test]
async fn should_return_created_task_when_add_task() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(server.url("/tasks"))
        .json(&serde_json::json!({"name": "task01", "completed": false}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_json_content_type(&response);
    let created: Task = response.json().await.unwrap();
    assert!(created.id >= 1);
    assert_eq!(created.name, "task01");
    assert!(!created.completed);
}

#[tokio::test]
async fn should_return_bad_request_given_completed_is_null_when_add_task() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(server.url("/tasks"))
        .json(&serde_json::json!({"name": "task01", "completed": null}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(
        message.contains("completed: must not be null"),
        "unexpected message: {message}"
    );
}

#[tokio::test]
async fn should_return_bad_request_given_unrecognized_completed_literal() {
    let server = TestServer::spawn().await;
    server.seed("task01", true).await;

    let response = server
        .client
        .get(server.url("/tasks?completed=garbage"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("completed"));
}

#[tokio::test]
async fn should_return_bad_request_given_malformed_body() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(server.url("/tasks"))
        .header(CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_json_content_type(&response);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(!body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_empty_tasks_after_delete_all() {
    let server = TestServer::spawn().await;
    server.seed("task01", true).await;
    server.seed("task02", false).await;

    server.state.tasks().clear().await.unwrap();

    let response = server.client.get(server.url("/tasks")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let tasks: Vec<Task> = response.json().await.unwrap();
    assert!(tasks.is_empty());
}
