use crate::error::ApiError;
use crate::models::{RegisterRequest, TokenPair, User};
use crate::services::api_client::{ApiClient, AuthEvent};
use crate::services::request::{PendingRequest, LOGIN_PATH, REGISTER_PATH};
use secrecy::ExposeSecret;

impl ApiClient {
    /// OAuth2 password-grant login. Credentials go out form-urlencoded as
    /// `username`/`password`, not JSON. The issued pair is stored on success.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, ApiError> {
        let request = PendingRequest::post(LOGIN_PATH)
            .form([("username", email), ("password", password)]);

        let tokens: TokenPair = self.request(request).await?;
        self.set_tokens(
            tokens.access_token.expose_secret(),
            tokens.refresh_token.expose_secret(),
        )
        .await?;

        tracing::debug!("Logged in");
        Ok(tokens)
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, data: &RegisterRequest) -> Result<User, ApiError> {
        self.request(PendingRequest::post(REGISTER_PATH).json(data)?)
            .await
    }

    /// Local logout: the server keeps no session to end.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.clear_tokens().await?;
        self.emit(AuthEvent::LoggedOut);
        tracing::info!("Logged out");
        Ok(())
    }
}
