// ABOUTME: Integration tests for the shared API client
// ABOUTME: Verifies default headers on the wire and that interceptors see every call and failure

use multiboard_client::{ApiClient, ClientError, Interceptor, MemoryTokenStore};
use multiboard_config::ApiSettings;
use reqwest::{Request, Response};
use std::sync::{Arc, Mutex};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingInterceptor {
    events: Mutex<Vec<String>>,
}

impl RecordingInterceptor {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Interceptor for RecordingInterceptor {
    fn on_request(&self, request: &Request) {
        self.push(format!("request {} {}", request.method(), request.url().path()));
    }

    fn on_request_error(&self, _error: &ClientError) {
        self.push("request error".to_string());
    }

    fn on_response(&self, response: &Response) {
        self.push(format!("response {}", response.status().as_u16()));
    }

    fn on_response_error(&self, error: &ClientError) {
        self.push(format!("response error {:?}", error.status()));
    }
}

async fn client_for(base_url: String, store: &MemoryTokenStore) -> (ApiClient, Arc<RecordingInterceptor>) {
    let settings = ApiSettings {
        base_url,
        ..ApiSettings::default()
    };
    let recorder = Arc::new(RecordingInterceptor::default());
    let client = ApiClient::new(&settings, store)
        .await
        .unwrap()
        .with_interceptor(recorder.clone());
    (client, recorder)
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(header("content-type", "application/json"))
        .and(header("authorization", "Bearer stored"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("stored");
    let (client, recorder) = client_for(server.uri(), &store).await;

    let response = client
        .post("/api/users/login", "{}".to_string())
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        recorder.events(),
        vec![
            "request POST /api/users/login".to_string(),
            "response 200".to_string()
        ]
    );
}

#[tokio::test]
async fn test_error_status_goes_through_response_error_hook() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/jwt/status"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let (client, recorder) = client_for(server.uri(), &store).await;

    let result = client.get("/api/users/jwt/status").await;

    assert!(matches!(result, Err(ClientError::Api { status: 401, .. })));
    assert_eq!(
        recorder.events(),
        vec![
            "request GET /api/users/jwt/status".to_string(),
            "response error Some(401)".to_string()
        ]
    );
}

#[tokio::test]
async fn test_transport_failure_is_reraised() {
    let store = MemoryTokenStore::new();
    let (client, recorder) = client_for("http://127.0.0.1:9".to_string(), &store).await;

    let result = client.get("/api/users/jwt/status").await;

    assert!(matches!(result, Err(ClientError::Network(_))));
    assert_eq!(
        recorder.events(),
        vec![
            "request GET /api/users/jwt/status".to_string(),
            "response error None".to_string()
        ]
    );
}

#[tokio::test]
async fn test_unpreparable_request_goes_through_request_error_hook() {
    let store = MemoryTokenStore::new();
    let (client, recorder) = client_for("http://localhost:8080".to_string(), &store).await;

    let result = client.get("http://[::1").await;

    assert!(matches!(result, Err(ClientError::Request(_))));
    assert_eq!(recorder.events(), vec!["request error".to_string()]);
}
