//! Frontend Models
//!
//! Data structures mirroring backend records. Field names follow the
//! backend's camelCase JSON (idNum, projectName, ...).

use serde::{Deserialize, Serialize};

/// One of the four fixed board lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Todo,
    Working,
    Waiting,
    Done,
}

impl TaskStatus {
    /// Lane label as rendered in the column header and status chip.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Working => "WORKING",
            TaskStatus::Waiting => "WAITING",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "status-chip todo",
            TaskStatus::Working => "status-chip working",
            TaskStatus::Waiting => "status-chip waiting",
            TaskStatus::Done => "status-chip done",
        }
    }
}

/// Project summary (GET /api/project)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id_num: u64,
    pub project_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: String,
}

/// Task group (GET /api/task/group/{projectId})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    pub id_num: u64,
    pub task_group_name: String,
    pub projects_id_num: u64,
}

/// Task record (GET /api/task)
///
/// `status` is absent for tasks never assigned a lane; the board renders
/// those in the TODO lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id_num: u64,
    pub task_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub task_group_id_num: Option<u64>,
}

/// Task detail (GET /api/task/info/{taskId})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    pub task_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub reg_date: String,
    #[serde(default)]
    pub reg_userid: String,
    #[serde(default)]
    pub project_name: String,
}

/// User assigned to a task (GET /api/task/user/{taskId})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUser {
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
}

/// Work-log creation body (POST /api/task/work/{taskId})
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkLog {
    pub task_id: u64,
    pub work_time: u32,
    #[serde(rename = "type")]
    pub log_type: String,
    pub description: String,
}

/// Status update body (PUT /api/task/status)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatusUpdate {
    pub id_num: u64,
    pub status: TaskStatus,
}

/// One open navigation tab, keyed by path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub name: String,
    pub path: String,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_round_trips_as_lane_label() {
        let json = serde_json::to_string(&TaskStatus::Working).unwrap();
        assert_eq!(json, "\"WORKING\"");
        let back: TaskStatus = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(back, TaskStatus::Done);
    }

    #[test]
    fn task_with_null_status_deserializes() {
        let json = r#"{"idNum":7,"taskName":"설비 점검","description":null,
            "startDate":"2023-10-01","endDate":"2023-10-05",
            "status":null,"projectName":"MES 구축","taskGroupIdNum":2}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id_num, 7);
        assert_eq!(task.status, None);
        assert_eq!(task.project_name, "MES 구축");
    }

    #[test]
    fn work_log_serializes_with_backend_field_names() {
        let log = NewWorkLog {
            task_id: 3,
            work_time: 8,
            log_type: "DONE".to_string(),
            description: "{}".to_string(),
        };
        let value: serde_json::Value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["taskId"], 3);
        assert_eq!(value["workTime"], 8);
        assert_eq!(value["type"], "DONE");
    }
}
