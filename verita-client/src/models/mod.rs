//! Wire models for the Verita platform API.
//!
//! Response models default every missing field so that partial payloads and
//! newer server versions still decode. Request models skip unset fields so the
//! server applies its own defaults.

pub mod auth;
pub mod organization;
pub mod project;
pub mod question;
pub mod task;
pub mod team;
pub mod user;

use serde::{Deserialize, Serialize};

pub use auth::{RegisterRequest, TokenPair};
pub use organization::{
    InviteResponse, Organization, OrganizationCreate, OrganizationInvite, OrganizationUpdate,
};
pub use project::{
    Project, ProjectActionResponse, ProjectCreate, ProjectListParams, ProjectStatus, ProjectType,
    ProjectUpdate,
};
pub use question::{Question, QuestionCreate, QuestionOption, QuestionType};
pub use task::{
    CsvUploadResponse, Task, TaskCreate, TaskListParams, TaskPriority, TaskStats, TaskStatus,
    TaskUpdate,
};
pub use team::{Team, TeamCreate, TeamMember, TeamMemberCreate, TeamRole, TeamUpdate};
pub use user::{User, UserUpdate};

/// Generic `{"message": ...}` acknowledgement returned by delete endpoints.
/// Delete wrappers return `None` when the server answers with an empty body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub message: String,
}
