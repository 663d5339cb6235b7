//! Project Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Project, TaskGroup};

impl ApiClient {
    /// Full project list.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/api/project").await
    }

    /// Task groups owned by one project.
    pub async fn fetch_task_groups(&self, project_id: u64) -> Result<Vec<TaskGroup>, ApiError> {
        self.get_json(&format!("/api/task/group/{project_id}")).await
    }
}
