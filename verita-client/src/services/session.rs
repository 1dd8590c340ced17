//! Application-level authentication state on top of [`ApiClient`].

use crate::error::ApiError;
use crate::models::{RegisterRequest, User};
use crate::services::api_client::ApiClient;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// Last login/registration failure, ready for display.
    pub error: Option<String>,
}

/// Owned by the composition root; wraps the shared client.
pub struct Session {
    client: Arc<ApiClient>,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub fn client(&self) -> &Arc<ApiClient> {
        &self.client
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    /// Resume a persisted session at startup.
    ///
    /// Returns `Ok(false)` when there is no stored token or the stored
    /// credentials no longer work; in the latter case they are cleared. Only
    /// token storage failures are returned as errors.
    pub async fn restore(&self) -> Result<bool, ApiError> {
        if !self.client.has_access_token().await {
            *self.state.write().await = SessionState::default();
            return Ok(false);
        }

        match self.client.get_current_user().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Session restored");
                self.set_user(user).await;
                Ok(true)
            }
            Err(e) => {
                tracing::info!(error = %e, "Stored session is no longer valid");
                self.client.clear_tokens().await?;
                *self.state.write().await = SessionState::default();
                Ok(false)
            }
        }
    }

    /// Log in and load the user profile.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        self.state.write().await.error = None;

        let result = async {
            self.client.login(email, password).await?;
            self.client.get_current_user().await
        }
        .await;

        self.settle(result, "Login failed").await
    }

    /// Register, then log in with the same credentials and load the profile.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.state.write().await.error = None;

        let result = async {
            self.client.register(data).await?;
            self.client.login(&data.email, &data.password).await?;
            self.client.get_current_user().await
        }
        .await;

        self.settle(result, "Registration failed").await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.logout().await?;
        *self.state.write().await = SessionState::default();
        Ok(())
    }

    /// Reload the profile; a failure leaves the session logged out.
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        match self.client.get_current_user().await {
            Ok(user) => {
                self.set_user(user.clone()).await;
                Ok(user)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.user = None;
                state.is_authenticated = false;
                Err(e)
            }
        }
    }

    pub async fn clear_error(&self) {
        self.state.write().await.error = None;
    }

    async fn set_user(&self, user: User) {
        let mut state = self.state.write().await;
        state.user = Some(user);
        state.is_authenticated = true;
        state.error = None;
    }

    async fn settle(
        &self,
        result: Result<User, ApiError>,
        fallback: &str,
    ) -> Result<User, ApiError> {
        match result {
            Ok(user) => {
                self.set_user(user.clone()).await;
                Ok(user)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.error = Some(e.detail().unwrap_or(fallback).to_string());
                state.is_authenticated = false;
                Err(e)
            }
        }
    }
}
