//! Task Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{NewWorkLog, Task, TaskDetail, TaskStatusUpdate, TaskUser};

impl ApiClient {
    /// Full task list, across all projects.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.get_json("/api/task").await
    }

    /// Single task detail.
    pub async fn fetch_task_info(&self, task_id: u64) -> Result<TaskDetail, ApiError> {
        self.get_json(&format!("/api/task/info/{task_id}")).await
    }

    /// Users assigned to a task.
    pub async fn fetch_task_users(&self, task_id: u64) -> Result<Vec<TaskUser>, ApiError> {
        self.get_json(&format!("/api/task/user/{task_id}")).await
    }

    /// Create a work log against a task.
    pub async fn submit_work_log(&self, entry: &NewWorkLog) -> Result<(), ApiError> {
        self.post_json(&format!("/api/task/work/{}", entry.task_id), entry)
            .await
    }

    /// Update a task's board status.
    pub async fn update_task_status(&self, update: &TaskStatusUpdate) -> Result<(), ApiError> {
        self.put_json("/api/task/status", update).await
    }
}
