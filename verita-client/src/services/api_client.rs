//! Authenticated HTTP client for the Verita platform API.
//!
//! Every call goes through [`ApiClient::request`], which attaches the current
//! bearer token and, on a 401, performs at most one refresh-and-replay:
//!
//! ```text
//! Initial --2xx--> Success
//!    |--401--> refresh --ok--> Replay --2xx--> ReplaySuccess
//!                 |               `--any error (incl. 401)--> ReplayFailed
//!                 `--failed--> RefreshFailed (tokens cleared, LoginRequired)
//! ```
//!
//! Any other failure of the initial attempt is returned unchanged.

use crate::config::ApiSettings;
use crate::error::ApiError;
use crate::models::auth::RefreshRequest;
use crate::models::TokenPair;
use crate::services::request::{PendingRequest, REFRESH_PATH};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex, RwLock};
use verita_core::observability::TracedRequestExt;
use verita_core::storage::{KeyValueStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Session-level notifications for the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEvent {
    /// A new token pair was stored (login or refresh).
    TokensUpdated,
    /// The user logged out explicitly.
    LoggedOut,
    /// The session ended involuntarily; the user has to log in again.
    LoginRequired,
}

/// Position of a call in the refresh protocol. A call is never refreshed twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Initial,
    Replay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefreshOutcome {
    /// This call obtained a fresh token pair.
    Refreshed,
    /// A concurrent call refreshed while this one waited for the refresh guard.
    AlreadyRefreshed,
    NoRefreshToken,
    Failed,
}

impl RefreshOutcome {
    fn can_replay(self) -> bool {
        matches!(self, RefreshOutcome::Refreshed | RefreshOutcome::AlreadyRefreshed)
    }
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
    access_token: RwLock<Option<Secret<String>>>,
    /// Serialises refreshes so concurrent 401s share a single refresh call.
    refresh_lock: Mutex<()>,
    events: broadcast::Sender<AuthEvent>,
}

impl ApiClient {
    /// Build the client and load a previously persisted access token, if any.
    pub fn new(settings: &ApiSettings, store: Arc<dyn KeyValueStore>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()?;

        let access_token = store
            .get(ACCESS_TOKEN_KEY)?
            .filter(|token| !token.is_empty())
            .map(Secret::new);

        tracing::debug!(
            base_url = %settings.base_url,
            restored_token = access_token.is_some(),
            "API client initialized"
        );

        let (events, _) = broadcast::channel(16);

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            store,
            access_token: RwLock::new(access_token),
            refresh_lock: Mutex::new(()),
            events,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Receive [`AuthEvent`]s. Events sent while nobody listens are dropped.
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    pub async fn has_access_token(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    /// Store a new credential pair in memory and in the token store.
    pub async fn set_tokens(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<(), ApiError> {
        // Held across the store writes so no reader sees memory and storage disagree.
        // Memory only changes once both keys are stored.
        let mut current = self.access_token.write().await;
        self.store.set(ACCESS_TOKEN_KEY, access_token)?;
        self.store.set(REFRESH_TOKEN_KEY, refresh_token)?;
        *current = Some(Secret::new(access_token.to_string()));
        drop(current);

        self.emit(AuthEvent::TokensUpdated);
        Ok(())
    }

    /// Forget both tokens, in memory and in the token store.
    pub async fn clear_tokens(&self) -> Result<(), ApiError> {
        let mut current = self.access_token.write().await;
        self.store.remove(ACCESS_TOKEN_KEY)?;
        self.store.remove(REFRESH_TOKEN_KEY)?;
        *current = None;
        Ok(())
    }

    /// Send `request` and decode the JSON response body.
    ///
    /// An empty 2xx body decodes as JSON `null`, so `()`, `Option<T>` and
    /// `serde_json::Value` are valid targets for body-less responses.
    pub async fn request<T: DeserializeOwned>(
        &self,
        request: PendingRequest,
    ) -> Result<T, ApiError> {
        let body = self.execute(&request).await?;
        decode_body(&body)
    }

    async fn execute(&self, request: &PendingRequest) -> Result<Vec<u8>, ApiError> {
        let mut attempt = Attempt::Initial;

        loop {
            let token = self.current_token().await;

            match self.dispatch(request, token.as_ref()).await {
                Err(err) if err.is_unauthorized() && !request.is_auth_exempt() => {
                    if attempt == Attempt::Replay {
                        tracing::warn!(
                            request_id = %request.request_id(),
                            method = %request.method,
                            path = %request.path,
                            ?attempt,
                            "Request rejected again after token refresh"
                        );
                        return Err(err);
                    }

                    let outcome = self.refresh_after_unauthorized(request, token.as_ref()).await;
                    if !outcome.can_replay() {
                        return Err(err);
                    }

                    attempt = Attempt::Replay;
                    tracing::debug!(
                        request_id = %request.request_id(),
                        path = %request.path,
                        ?attempt,
                        ?outcome,
                        "Replaying request with refreshed token"
                    );
                }
                result => return result,
            }
        }
    }

    /// Send a single attempt. No refresh handling happens here.
    async fn dispatch(
        &self,
        request: &PendingRequest,
        token: Option<&Secret<String>>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = request.url(&self.base_url);

        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .with_trace_headers(request.request_id());
        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose_secret());
        }
        let builder = request.body.apply(builder)?;

        let response = builder.send().await.map_err(|e| {
            tracing::error!(
                request_id = %request.request_id(),
                method = %request.method,
                url = %url,
                error = %e,
                "Failed to send request"
            );
            ApiError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(
                request_id = %request.request_id(),
                method = %request.method,
                path = %request.path,
                status = status.as_u16(),
                "Request succeeded"
            );
            return Ok(response.bytes().await?.to_vec());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(
            request_id = %request.request_id(),
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "Request failed"
        );
        Err(ApiError::from_status(status, body))
    }

    /// Recover from a 401 on `request`, which was sent with `sent_token`.
    async fn refresh_after_unauthorized(
        &self,
        request: &PendingRequest,
        sent_token: Option<&Secret<String>>,
    ) -> RefreshOutcome {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.current_token().await {
            let sent = sent_token.map(|token| token.expose_secret().as_str());
            if sent != Some(current.expose_secret().as_str()) {
                return RefreshOutcome::AlreadyRefreshed;
            }
        }

        let refresh_token = match self.store.get(REFRESH_TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => {
                tracing::info!(
                    request_id = %request.request_id(),
                    "Unauthorized and no refresh token stored"
                );
                self.end_session().await;
                return RefreshOutcome::NoRefreshToken;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read refresh token");
                self.end_session().await;
                return RefreshOutcome::Failed;
            }
        };

        let refresh = PendingRequest::post(REFRESH_PATH)
            .with_request_id(request.request_id())
            .json(&RefreshRequest {
                refresh_token: &refresh_token,
            });

        let tokens = match refresh {
            Ok(refresh) => match self.dispatch(&refresh, None).await {
                Ok(body) => decode_body::<TokenPair>(&body),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };

        let stored = match tokens {
            Ok(tokens) => {
                self.set_tokens(
                    tokens.access_token.expose_secret(),
                    tokens.refresh_token.expose_secret(),
                )
                .await
            }
            Err(e) => Err(e),
        };

        match stored {
            Ok(()) => {
                tracing::info!(request_id = %request.request_id(), "Access token refreshed");
                RefreshOutcome::Refreshed
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %request.request_id(),
                    error = %e,
                    "Token refresh failed; ending session"
                );
                self.end_session().await;
                RefreshOutcome::Failed
            }
        }
    }

    /// Drop the credentials and tell the application to send the user to login.
    async fn end_session(&self) {
        if let Err(e) = self.clear_tokens().await {
            tracing::error!(error = %e, "Failed to clear stored tokens");
        }
        self.emit(AuthEvent::LoginRequired);
    }

    pub(crate) fn emit(&self, event: AuthEvent) {
        // No receivers is fine.
        let _ = self.events.send(event);
    }

    async fn current_token(&self) -> Option<Secret<String>> {
        self.access_token.read().await.clone()
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"null")?);
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use verita_core::error::StorageError;
    use verita_core::storage::MemoryStore;

    fn client_with(store: Arc<MemoryStore>) -> ApiClient {
        ApiClient::new(&ApiSettings::with_base_url("http://localhost:1/"), store).unwrap()
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let value: Value = decode_body(b"").unwrap();
        assert_eq!(value, Value::Null);
        let _: () = decode_body(b"  ").unwrap();
        let missing: Option<String> = decode_body(b"").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_decode_mismatch_is_decode_error() {
        let err = decode_body::<u32>(b"\"nope\"").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_token_loaded_once_from_store() {
        let store = Arc::new(MemoryStore::with_entries([(ACCESS_TOKEN_KEY, "persisted")]));
        let client = client_with(store.clone());
        assert!(client.has_access_token().await);

        // Later writes behind the client's back are not observed.
        store.remove(ACCESS_TOKEN_KEY).unwrap();
        assert!(client.has_access_token().await);
        assert_eq!(client.base_url(), "http://localhost:1");
    }

    #[tokio::test]
    async fn test_set_and_clear_tokens_mirror_store() {
        let store = Arc::new(MemoryStore::new());
        let client = client_with(store.clone());
        let mut events = client.subscribe();

        client.set_tokens("a", "b").await.unwrap();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("a"));
        assert_eq!(store.get(REFRESH_TOKEN_KEY).unwrap().as_deref(), Some("b"));
        assert_eq!(events.recv().await.unwrap(), AuthEvent::TokensUpdated);

        client.clear_tokens().await.unwrap();
        assert!(!client.has_access_token().await);
        assert!(store.is_empty());
    }

    /// Accepts reads and removals but refuses every write.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove(key)
        }
    }

    /// Refuses removals.
    struct NoRemoveStore(MemoryStore);

    impl KeyValueStore for NoRemoveStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.set(key, value)
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    #[tokio::test]
    async fn test_failed_store_write_leaves_token_unchanged() {
        let store = Arc::new(ReadOnlyStore(MemoryStore::new()));
        let client =
            ApiClient::new(&ApiSettings::with_base_url("http://localhost:1"), store.clone())
                .unwrap();
        let mut events = client.subscribe();

        let err = client.set_tokens("a", "b").await.unwrap_err();
        assert!(matches!(err, ApiError::Storage(StorageError::Poisoned)));
        assert!(!client.has_access_token().await);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failed_store_removal_keeps_token() {
        let store = Arc::new(NoRemoveStore(MemoryStore::with_entries([
            (ACCESS_TOKEN_KEY, "kept"),
            (REFRESH_TOKEN_KEY, "r"),
        ])));
        let client =
            ApiClient::new(&ApiSettings::with_base_url("http://localhost:1"), store.clone())
                .unwrap();

        assert!(client.clear_tokens().await.is_err());
        assert!(client.has_access_token().await);
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("kept"));
    }

    #[test]
    fn test_only_refreshes_allow_replay() {
        assert!(RefreshOutcome::Refreshed.can_replay());
        assert!(RefreshOutcome::AlreadyRefreshed.can_replay());
        assert!(!RefreshOutcome::NoRefreshToken.can_replay());
        assert!(!RefreshOutcome::Failed.can_replay());
    }
}
