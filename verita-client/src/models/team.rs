use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    Owner,
    Admin,
    #[default]
    Member,
    Viewer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: String,
    pub organization_id: String,
    pub name: String,
    pub description: Option<String>,
    pub can_create_projects: bool,
    pub can_manage_workers: bool,
    pub is_active: bool,
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_workers: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_manage_workers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub id: String,
    pub user_id: String,
    pub team_id: String,
    pub role: TeamRole,
    pub user: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberCreate {
    pub user_id: String,
    pub role: TeamRole,
}

#[derive(Serialize)]
pub(crate) struct TeamMemberUpdate {
    pub role: TeamRole,
}
