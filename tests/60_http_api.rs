mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Router;

use study_planner_admin::api::ApiClient;
use study_planner_admin::error::ClientError;
use study_planner_admin::repositories::{HttpStudentClassRepository, StudentClassRepository};

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: String,
    path: String,
    query: String,
    authorization: Option<String>,
}

/// Scripted backend: answers every request with one canned status/body and
/// records what arrived.
struct ScriptedServer {
    requests: Mutex<Vec<CapturedRequest>>,
    response: Mutex<(u16, String)>,
}

impl ScriptedServer {
    fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: Mutex::new((status, body.to_string())),
        })
    }

    fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn capture(State(server): State<Arc<ScriptedServer>>, req: Request<Body>) -> impl IntoResponse {
    server.requests.lock().unwrap().push(CapturedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().unwrap_or("").to_string(),
        authorization: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    let (status, body) = server.response.lock().unwrap().clone();
    (
        StatusCode::from_u16(status).expect("scripted status must be valid"),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
}

/// Serves the scripted backend on an ephemeral local port.
async fn spawn(server: Arc<ScriptedServer>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("ephemeral port must bind");
    let addr = listener.local_addr().unwrap();

    let app = Router::new().fallback(capture).with_state(server);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client(base_url: &str, store_name: &str) -> ApiClient {
    ApiClient::new(
        base_url,
        Duration::from_secs(2),
        common::temp_store(store_name),
    )
    .expect("local base URL is valid")
}

#[tokio::test]
async fn error_body_pascal_case_message_is_preferred() {
    let server = ScriptedServer::new(400, r#"{"Message":"username already taken"}"#);
    let base_url = spawn(server).await;
    let api = client(&base_url, "http-msg-pascal");

    let result = api.get("/AccountManagement/GetAllAccount", &[]).await;

    match result {
        Err(ClientError::Transport(message)) => assert_eq!(message, "username already taken"),
        other => panic!("expected transport fault, got {:?}", other),
    }
}

#[tokio::test]
async fn error_body_camel_case_message_is_used_too() {
    let server = ScriptedServer::new(500, r#"{"message":"backend choked"}"#);
    let base_url = spawn(server).await;
    let api = client(&base_url, "http-msg-camel");

    let result = api.get("/x", &[]).await;

    match result {
        Err(ClientError::Transport(message)) => assert_eq!(message, "backend choked"),
        other => panic!("expected transport fault, got {:?}", other),
    }
}

#[tokio::test]
async fn error_without_a_message_falls_back_to_the_status_line() {
    let server = ScriptedServer::new(502, "not even json");
    let base_url = spawn(server).await;
    let api = client(&base_url, "http-msg-status");

    let result = api.get("/x", &[]).await;

    match result {
        Err(ClientError::Transport(message)) => {
            assert_eq!(message, "request failed with status 502")
        }
        other => panic!("expected transport fault, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_collapses_to_the_network_error_sentinel() {
    // bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = client(&format!("http://{}", addr), "http-unreachable");
    let result = api.get("/x", &[]).await;

    match result {
        Err(ClientError::Transport(message)) => {
            assert_eq!(message, ClientError::NETWORK_ERROR)
        }
        other => panic!("expected transport fault, got {:?}", other),
    }
}

#[tokio::test]
async fn stored_token_rides_along_as_a_bearer_header() {
    let server = ScriptedServer::new(200, r#"{"success":true,"data":true}"#);
    let base_url = spawn(server.clone()).await;

    let store = common::temp_store("http-bearer");
    store.save("tok-xyz", "alice").unwrap();
    let api = ApiClient::new(&base_url, Duration::from_secs(2), store).unwrap();

    api.get("/x", &[]).await.unwrap();

    let captured = server.requests();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].authorization.as_deref(), Some("Bearer tok-xyz"));
}

#[tokio::test]
async fn no_stored_token_means_no_authorization_header() {
    let server = ScriptedServer::new(200, r#"{"success":true,"data":true}"#);
    let base_url = spawn(server.clone()).await;
    let api = client(&base_url, "http-no-bearer");

    api.get("/x", &[]).await.unwrap();

    assert!(server.requests()[0].authorization.is_none());
}

#[tokio::test]
async fn account_list_sends_the_expected_path_and_paging() {
    let server = ScriptedServer::new(200, r#"{"success":true,"data":{"data":[],"totalItems":0}}"#);
    let base_url = spawn(server.clone()).await;
    let api = client(&base_url, "http-account-list");

    api.get(
        "/AccountManagement/GetAllAccount",
        &[("page", "2".to_string()), ("pageSize", "5".to_string())],
    )
    .await
    .unwrap();

    let captured = server.requests();
    assert_eq!(captured[0].method, "GET");
    assert_eq!(captured[0].path, "/AccountManagement/GetAllAccount");
    assert_eq!(captured[0].query, "page=2&pageSize=5");
}

#[tokio::test]
async fn roster_delete_hits_the_nested_path_with_both_query_parameters() {
    let server = ScriptedServer::new(200, r#"{"success":true,"data":true}"#);
    let base_url = spawn(server.clone()).await;
    let repo = HttpStudentClassRepository::new(client(&base_url, "http-roster-delete"));

    let envelope = repo.delete("c-math", "s9").await.unwrap();
    assert!(envelope.is_success());

    let captured = server.requests();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, "DELETE");
    assert_eq!(captured[0].path, "/Class/c-math/StudentClass/DeleteStudentClass");
    // classId rides in the query as well as the path
    assert_eq!(captured[0].query, "classId=c-math&studentId=s9");
}
