use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub subscription_tier: String,
    pub subscription_status: String,
    pub max_projects: u32,
    pub max_tasks_per_month: u32,
    pub max_workers: u32,
    pub custom_branding: bool,
    pub private_workforce: bool,
    pub advanced_analytics: bool,
    pub user_count: Option<u64>,
    pub project_count: Option<u64>,
    pub active_projects: Option<u64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationCreate {
    pub name: String,
    /// Lowercase letters, digits and dashes.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_projects: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tasks_per_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_workers: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_branding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_workforce: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_analytics: Option<bool>,
}

/// Body of `POST /api/v1/organizations/invite`.
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationInvite {
    pub email: String,
    pub team_id: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InviteResponse {
    pub success: bool,
    pub message: String,
    pub invited_email: String,
    pub team_name: Option<String>,
}
