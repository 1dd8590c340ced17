use crate::error::ApiError;
use crate::models::task::TaskBulkCreate;
use crate::models::{
    CsvUploadResponse, MessageResponse, Task, TaskCreate, TaskListParams, TaskStats, TaskUpdate,
};
use crate::services::api_client::ApiClient;
use crate::services::request::{FilePart, PendingRequest};
use std::path::Path;

fn project_tasks_path(project_id: &str) -> String {
    format!("/api/v1/projects/{}/tasks", project_id)
}

fn task_path(task_id: &str) -> String {
    format!("/api/v1/tasks/{}", task_id)
}

impl ApiClient {
    pub async fn get_tasks(
        &self,
        project_id: &str,
        params: &TaskListParams,
    ) -> Result<Vec<Task>, ApiError> {
        self.request(PendingRequest::get(project_tasks_path(project_id)).query(params)?)
            .await
    }

    pub async fn get_task(&self, task_id: &str) -> Result<Task, ApiError> {
        self.request(PendingRequest::get(task_path(task_id))).await
    }

    pub async fn create_task(&self, project_id: &str, data: &TaskCreate) -> Result<Task, ApiError> {
        self.request(PendingRequest::post(project_tasks_path(project_id)).json(data)?)
            .await
    }

    /// Create many tasks at once; the body is `{"tasks": [...]}`.
    pub async fn create_tasks_bulk(
        &self,
        project_id: &str,
        tasks: &[TaskCreate],
    ) -> Result<Vec<Task>, ApiError> {
        let path = format!("{}/bulk", project_tasks_path(project_id));
        self.request(PendingRequest::post(path).json(&TaskBulkCreate { tasks })?)
            .await
    }

    /// Upload a CSV of tasks as the multipart field `file`. Every column
    /// except `external_id` becomes task data on the server.
    pub async fn upload_tasks_csv(
        &self,
        project_id: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<CsvUploadResponse, ApiError> {
        let path = format!("{}/csv", project_tasks_path(project_id));
        let request = PendingRequest::post(path).multipart(FilePart {
            field: "file".to_string(),
            file_name: file_name.to_string(),
            mime: "text/csv".to_string(),
            bytes: contents,
        });

        let response: CsvUploadResponse = self.request(request).await?;
        tracing::info!(
            project_id = %project_id,
            task_count = response.task_count,
            "Uploaded tasks CSV"
        );
        Ok(response)
    }

    /// Read `path` and upload it with [`ApiClient::upload_tasks_csv`].
    pub async fn upload_tasks_csv_file(
        &self,
        project_id: &str,
        path: &Path,
    ) -> Result<CsvUploadResponse, ApiError> {
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tasks.csv".to_string());

        self.upload_tasks_csv(project_id, &file_name, contents).await
    }

    pub async fn get_task_stats(&self, project_id: &str) -> Result<TaskStats, ApiError> {
        let path = format!("{}/stats", project_tasks_path(project_id));
        self.request(PendingRequest::get(path)).await
    }

    pub async fn update_task(&self, task_id: &str, data: &TaskUpdate) -> Result<Task, ApiError> {
        self.request(PendingRequest::put(task_path(task_id)).json(data)?)
            .await
    }

    pub async fn delete_task(&self, task_id: &str) -> Result<Option<MessageResponse>, ApiError> {
        self.request(PendingRequest::delete(task_path(task_id))).await
    }
}
