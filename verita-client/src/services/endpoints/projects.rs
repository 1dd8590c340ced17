use crate::error::ApiError;
use crate::models::{
    MessageResponse, Project, ProjectActionResponse, ProjectCreate, ProjectListParams,
    ProjectUpdate, Question, QuestionCreate, Task, TaskListParams,
};
use crate::services::api_client::ApiClient;
use crate::services::request::PendingRequest;

fn project_path(project_id: &str) -> String {
    format!("/api/v1/projects/{}", project_id)
}

impl ApiClient {
    pub async fn get_projects(&self, params: &ProjectListParams) -> Result<Vec<Project>, ApiError> {
        self.request(PendingRequest::get("/api/v1/projects").query(params)?)
            .await
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Project, ApiError> {
        self.request(PendingRequest::get(project_path(project_id)))
            .await
    }

    pub async fn create_project(&self, data: &ProjectCreate) -> Result<Project, ApiError> {
        self.request(PendingRequest::post("/api/v1/projects").json(data)?)
            .await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        data: &ProjectUpdate,
    ) -> Result<Project, ApiError> {
        self.request(PendingRequest::put(project_path(project_id)).json(data)?)
            .await
    }

    pub async fn delete_project(
        &self,
        project_id: &str,
    ) -> Result<Option<MessageResponse>, ApiError> {
        self.request(PendingRequest::delete(project_path(project_id)))
            .await
    }

    /// Tasks of a project. Same route as [`ApiClient::get_tasks`].
    pub async fn get_project_tasks(
        &self,
        project_id: &str,
        params: &TaskListParams,
    ) -> Result<Vec<Task>, ApiError> {
        let path = format!("{}/tasks", project_path(project_id));
        self.request(PendingRequest::get(path).query(params)?).await
    }

    pub async fn launch_project(
        &self,
        project_id: &str,
    ) -> Result<ProjectActionResponse, ApiError> {
        self.project_action(project_id, "launch").await
    }

    pub async fn pause_project(
        &self,
        project_id: &str,
    ) -> Result<ProjectActionResponse, ApiError> {
        self.project_action(project_id, "pause").await
    }

    pub async fn resume_project(
        &self,
        project_id: &str,
    ) -> Result<ProjectActionResponse, ApiError> {
        self.project_action(project_id, "resume").await
    }

    async fn project_action(
        &self,
        project_id: &str,
        action: &str,
    ) -> Result<ProjectActionResponse, ApiError> {
        let path = format!("{}/{}", project_path(project_id), action);
        self.request(PendingRequest::post(path)).await
    }

    pub async fn add_question(
        &self,
        project_id: &str,
        data: &QuestionCreate,
    ) -> Result<Question, ApiError> {
        let path = format!("{}/questions", project_path(project_id));
        self.request(PendingRequest::post(path).json(data)?).await
    }
}
