use crate::error::ApiError;
use crate::models::team::TeamMemberUpdate;
use crate::models::{
    MessageResponse, Team, TeamCreate, TeamMember, TeamMemberCreate, TeamRole, TeamUpdate,
};
use crate::services::api_client::ApiClient;
use crate::services::request::PendingRequest;

fn team_path(team_id: &str) -> String {
    format!("/api/v1/teams/{}", team_id)
}

impl ApiClient {
    /// Teams of the current organization.
    pub async fn get_organization_teams(&self) -> Result<Vec<Team>, ApiError> {
        // The collection route carries a trailing slash on the server.
        self.request(PendingRequest::get("/api/v1/teams/")).await
    }

    pub async fn create_team(&self, data: &TeamCreate) -> Result<Team, ApiError> {
        self.request(PendingRequest::post("/api/v1/teams/").json(data)?)
            .await
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Team, ApiError> {
        self.request(PendingRequest::get(team_path(team_id))).await
    }

    pub async fn update_team(&self, team_id: &str, data: &TeamUpdate) -> Result<Team, ApiError> {
        self.request(PendingRequest::put(team_path(team_id)).json(data)?)
            .await
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<Option<MessageResponse>, ApiError> {
        self.request(PendingRequest::delete(team_path(team_id))).await
    }

    pub async fn get_team_members(&self, team_id: &str) -> Result<Vec<TeamMember>, ApiError> {
        let path = format!("{}/members", team_path(team_id));
        self.request(PendingRequest::get(path)).await
    }

    pub async fn add_team_member(
        &self,
        team_id: &str,
        data: &TeamMemberCreate,
    ) -> Result<TeamMember, ApiError> {
        let path = format!("{}/members", team_path(team_id));
        self.request(PendingRequest::post(path).json(data)?).await
    }

    pub async fn update_team_member(
        &self,
        team_id: &str,
        member_id: &str,
        role: TeamRole,
    ) -> Result<TeamMember, ApiError> {
        let path = format!("{}/members/{}", team_path(team_id), member_id);
        self.request(PendingRequest::put(path).json(&TeamMemberUpdate { role })?)
            .await
    }

    pub async fn remove_team_member(
        &self,
        team_id: &str,
        member_id: &str,
    ) -> Result<Option<MessageResponse>, ApiError> {
        let path = format!("{}/members/{}", team_path(team_id), member_id);
        self.request(PendingRequest::delete(path)).await
    }
}
