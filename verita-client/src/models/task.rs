use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    NeedsReview,
    Rejected,
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// A unit of labeling work. `GET /tasks/:id` additionally returns the
/// collected `responses` and `completion_percentage`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub external_id: Option<String>,
    pub data: Value,
    pub task_metadata: Value,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub is_gold_standard: bool,
    pub gold_standard_answers: Option<Value>,
    pub preexisting_annotations: Option<Value>,
    pub required_responses: u32,
    pub completed_responses: u32,
    pub consensus_score: Option<f64>,
    pub average_time_taken: Option<u64>,
    pub batch_id: Option<String>,
    pub expires_at: Option<String>,
    pub responses: Vec<Value>,
    pub completion_percentage: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCreate {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gold_standard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_standard_answers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_responses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl TaskCreate {
    pub fn new(data: Value) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_gold_standard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gold_standard_answers: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_responses: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Query parameters for `GET /api/v1/projects/:id/tasks`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct TaskBulkCreate<'a> {
    pub tasks: &'a [TaskCreate],
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStats {
    pub total_tasks: u64,
    pub pending_tasks: u64,
    pub in_progress_tasks: u64,
    pub completed_tasks: u64,
    pub needs_review_tasks: u64,
    pub rejected_tasks: u64,
    pub expired_tasks: u64,
    pub average_completion_time: Option<f64>,
    pub average_consensus_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvUploadResponse {
    pub message: String,
    pub task_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_create_skips_unset_fields() {
        let task = TaskCreate {
            priority: Some(TaskPriority::High),
            ..TaskCreate::new(json!({"text": "hello"}))
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({"data": {"text": "hello"}, "priority": "high"})
        );
    }

    #[test]
    fn test_list_params_with_batch() {
        let params = TaskListParams {
            status: Some(TaskStatus::NeedsReview),
            batch_id: Some("b-7".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_urlencoded::to_string(&params).unwrap(),
            "status=needs_review&batch_id=b-7"
        );
    }
}
