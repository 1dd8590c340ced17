use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    FreeResponse,
    MultipleChoice,
    Checkbox,
    Likert,
    Ranking,
    TextTagging,
    TreeSelection,
    FileUpload,
    Chatbot,
    ImageAnnotation,
    VideoAnnotation,
    AudioTranscription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /api/v1/projects/:id/questions`.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCreate {
    pub question_type: QuestionType,
    pub order: u32,
    pub identifier: String,
    pub label: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_selections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_if: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl QuestionCreate {
    pub fn new(
        question_type: QuestionType,
        order: u32,
        identifier: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            question_type,
            order,
            identifier: identifier.into(),
            label: label.into(),
            required: true,
            description: None,
            placeholder: None,
            min_length: None,
            max_length: None,
            min_selections: None,
            max_selections: None,
            regex_pattern: None,
            regex_error_message: None,
            options: None,
            show_if: None,
            settings: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub project_id: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub order: u32,
    pub identifier: String,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Option<Vec<QuestionOption>>,
    #[serde(default)]
    pub settings: Value,
}
