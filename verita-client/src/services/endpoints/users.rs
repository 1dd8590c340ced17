use crate::error::ApiError;
use crate::models::{User, UserUpdate};
use crate::services::api_client::ApiClient;
use crate::services::request::PendingRequest;

impl ApiClient {
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        self.request(PendingRequest::get("/api/v1/users/me")).await
    }

    pub async fn update_current_user(&self, data: &UserUpdate) -> Result<User, ApiError> {
        self.request(PendingRequest::put("/api/v1/users/me").json(data)?)
            .await
    }
}
