use crate::error::ApiError;
use crate::models::{
    InviteResponse, MessageResponse, Organization, OrganizationCreate, OrganizationInvite,
    OrganizationUpdate, User,
};
use crate::services::api_client::ApiClient;
use crate::services::request::PendingRequest;

impl ApiClient {
    pub async fn create_organization(
        &self,
        data: &OrganizationCreate,
    ) -> Result<Organization, ApiError> {
        self.request(PendingRequest::post("/api/v1/organizations").json(data)?)
            .await
    }

    /// Organization of the logged-in user.
    pub async fn get_current_organization(&self) -> Result<Organization, ApiError> {
        self.request(PendingRequest::get("/api/v1/organizations/me"))
            .await
    }

    pub async fn update_organization(
        &self,
        data: &OrganizationUpdate,
    ) -> Result<Organization, ApiError> {
        self.request(PendingRequest::put("/api/v1/organizations/me").json(data)?)
            .await
    }

    pub async fn get_organization_members(&self) -> Result<Vec<User>, ApiError> {
        self.request(PendingRequest::get("/api/v1/organizations/members"))
            .await
    }

    pub async fn invite_user_to_organization(
        &self,
        invite: &OrganizationInvite,
    ) -> Result<InviteResponse, ApiError> {
        self.request(PendingRequest::post("/api/v1/organizations/invite").json(invite)?)
            .await
    }

    pub async fn remove_user_from_organization(
        &self,
        user_id: &str,
    ) -> Result<Option<MessageResponse>, ApiError> {
        let path = format!("/api/v1/organizations/members/{}", user_id);
        self.request(PendingRequest::delete(path)).await
    }

    pub async fn get_organization(&self, organization_id: &str) -> Result<Organization, ApiError> {
        let path = format!("/api/v1/organizations/{}", organization_id);
        self.request(PendingRequest::get(path)).await
    }
}
