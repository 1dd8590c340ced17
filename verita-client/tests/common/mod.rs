#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use verita_client::config::ApiSettings;
use verita_client::ApiClient;
use verita_core::storage::{KeyValueStore, MemoryStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};
use wiremock::{Match, MockServer, Request};

pub const REFRESH_PATH: &str = "/api/v1/auth/refresh";
pub const LOGIN_PATH: &str = "/api/v1/auth/login";

pub struct TestApp {
    pub server: MockServer,
    pub store: Arc<MemoryStore>,
    pub client: Arc<ApiClient>,
}

impl TestApp {
    /// Client with no stored credentials.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(MemoryStore::new()).await
    }

    /// Client whose store already holds the given pair, as after a previous run.
    pub async fn spawn_with_tokens(access: &str, refresh: &str) -> Self {
        Self::spawn_with_store(MemoryStore::with_entries([
            (ACCESS_TOKEN_KEY, access),
            (REFRESH_TOKEN_KEY, refresh),
        ]))
        .await
    }

    pub async fn spawn_with_store(store: MemoryStore) -> Self {
        let server = MockServer::start().await;
        let store = Arc::new(store);
        let client = Arc::new(
            ApiClient::new(&ApiSettings::with_base_url(server.uri()), store.clone())
                .expect("Failed to build API client"),
        );

        TestApp {
            server,
            store,
            client,
        }
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key).expect("Failed to read store")
    }

    pub async fn requests_to(&self, path: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .into_iter()
            .filter(|request| request.url.path() == path)
            .collect()
    }
}

pub fn token_pair(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer"
    })
}

pub fn user_body(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "username": email.split('@').next().unwrap_or("user"),
        "is_active": true,
        "is_verified": true
    })
}

pub fn detail(message: &str) -> Value {
    json!({ "detail": message })
}

/// Matches requests that carry no Authorization header at all.
pub struct NoAuthorization;

impl Match for NoAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Matches a multipart upload regardless of the generated boundary.
pub struct MultipartBody;

impl Match for MultipartBody {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("multipart/form-data; boundary="))
            .unwrap_or(false)
    }
}

pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
