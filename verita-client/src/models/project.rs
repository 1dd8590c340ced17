use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Active,
    Paused,
    Completed,
    Cancelled,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    #[default]
    Classification,
    Annotation,
    Transcription,
    Comparison,
    Ranking,
    Moderation,
    Carousel,
    Custom,
}

/// Project as returned by the API. The single-project endpoint also fills in
/// the `completion_rate`/`active_workers`/`pending_tasks` statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub instructions: String,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub organization_id: Option<String>,
    pub creator_id: Option<String>,

    // Quality control
    pub payment_per_response: f64,
    pub max_responses_per_task: u32,
    pub min_responses_per_task: u32,
    pub consensus_threshold: f64,
    pub enable_gold_standard: bool,
    pub gold_standard_percentage: u32,
    pub min_accuracy_threshold: f64,
    pub enable_tiebreaker: bool,

    // Workforce
    pub use_private_workforce: bool,
    pub require_qualification: bool,
    pub qualification_requirements: Value,

    pub tags: Vec<String>,
    pub metadata: Value,

    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub total_responses: u64,
    pub average_completion_time: Option<f64>,
    pub completion_rate: Option<f64>,
    pub active_workers: Option<u64>,
    pub pending_tasks: Option<u64>,

    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Body of `POST /api/v1/projects`. Unset quality settings take server defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectCreate {
    pub name: String,
    pub slug: String,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_per_response: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_responses_per_task: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_responses_per_task: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_gold_standard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_standard_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_accuracy_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_tiebreaker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_private_workforce: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub team_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_per_response: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_responses_per_task: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_responses_per_task: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_gold_standard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_standard_percentage: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_accuracy_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_tiebreaker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Query parameters for `GET /api/v1/projects`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// Result of launch/pause/resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectActionResponse {
    pub success: bool,
    pub message: String,
    pub project: Project,
}
