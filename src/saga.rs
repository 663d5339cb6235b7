//! Work-Log Submission Saga
//!
//! The compound save from the work-log modal: create the log row, force the
//! task into WAITING, and, when a file is attached, upload it and grant read
//! authority to every assigned user. Steps run strictly in sequence and no
//! backend endpoint exists to undo the early ones, so a mid-chain failure is
//! reported with the list of steps already committed instead of pretending
//! the whole save failed.

use async_trait::async_trait;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{NewWorkLog, TaskStatus, TaskStatusUpdate, TaskUser};

/// Fixed type tag the backend expects on work-log rows.
pub const WORK_LOG_TYPE: &str = "DONE";

/// Backend operations the saga runs over. Abstracted so the sequencing rules
/// can be exercised without a browser.
#[async_trait(?Send)]
pub trait TaskApi {
    type Attachment;

    async fn create_work_log(&self, entry: &NewWorkLog) -> Result<(), ApiError>;
    async fn set_task_status(&self, update: &TaskStatusUpdate) -> Result<(), ApiError>;
    async fn assigned_users(&self, task_id: u64) -> Result<Vec<TaskUser>, ApiError>;
    async fn task_directory(&self, task_id: u64) -> Result<u64, ApiError>;
    async fn upload(&self, directory_id: u64, file: &Self::Attachment) -> Result<u64, ApiError>;
    async fn grant_authority(&self, document_id: u64, user_id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl TaskApi for ApiClient {
    type Attachment = web_sys::File;

    async fn create_work_log(&self, entry: &NewWorkLog) -> Result<(), ApiError> {
        self.submit_work_log(entry).await
    }

    async fn set_task_status(&self, update: &TaskStatusUpdate) -> Result<(), ApiError> {
        self.update_task_status(update).await
    }

    async fn assigned_users(&self, task_id: u64) -> Result<Vec<TaskUser>, ApiError> {
        self.fetch_task_users(task_id).await
    }

    async fn task_directory(&self, task_id: u64) -> Result<u64, ApiError> {
        self.fetch_task_directory(task_id).await
    }

    async fn upload(&self, directory_id: u64, file: &web_sys::File) -> Result<u64, ApiError> {
        self.upload_document(directory_id, file).await
    }

    async fn grant_authority(&self, document_id: u64, user_id: &str) -> Result<(), ApiError> {
        self.grant_document_authority(document_id, user_id).await
    }
}

/// One step of the submission chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SagaStep {
    WorkLog,
    StatusTransition,
    AssignedUsers,
    Directory,
    Upload,
    AuthorityGrant { user_id: String },
}

impl SagaStep {
    pub fn label(&self) -> String {
        match self {
            SagaStep::WorkLog => "공수 기록".to_string(),
            SagaStep::StatusTransition => "상태 변경".to_string(),
            SagaStep::AssignedUsers => "담당자 조회".to_string(),
            SagaStep::Directory => "저장 폴더 조회".to_string(),
            SagaStep::Upload => "파일 업로드".to_string(),
            SagaStep::AuthorityGrant { user_id } => format!("문서 권한 부여 ({user_id})"),
        }
    }
}

/// A failed chain: which step failed, which steps had already committed
/// (and stay committed), and the underlying error.
#[derive(Clone, Debug, PartialEq)]
pub struct SagaError {
    pub failed: SagaStep,
    pub committed: Vec<SagaStep>,
    pub source: ApiError,
}

impl SagaError {
    pub fn dialog_title(&self) -> &'static str {
        self.source.dialog_title()
    }

    /// Error dialog body: the structured error plus what was already saved.
    pub fn dialog_message(&self) -> String {
        let fallback = match self.failed {
            SagaStep::WorkLog | SagaStep::StatusTransition => "업무 공수 등록 중 오류가 발생했습니다.",
            _ => "파일 업로드 중 오류가 발생했습니다.",
        };
        let mut message = format!("{} 단계 실패: {}", self.failed.label(), self.source.dialog_message(fallback));
        if !self.committed.is_empty() {
            let saved: Vec<String> = self.committed.iter().map(SagaStep::label).collect();
            message.push_str(&format!("\n이미 저장된 단계: {}", saved.join(", ")));
        }
        message
    }
}

/// Modal input for one submission.
pub struct WorkEntry<F> {
    pub task_id: u64,
    pub work_time: u32,
    /// Serialized rich-text document
    pub description: String,
    pub attachment: Option<F>,
}

/// Run the submission chain. Step N is not started until step N-1's response
/// has arrived. On success, returns the committed steps in execution order.
pub async fn submit_work_entry<A: TaskApi>(
    api: &A,
    entry: WorkEntry<A::Attachment>,
) -> Result<Vec<SagaStep>, SagaError> {
    let mut committed: Vec<SagaStep> = Vec::new();

    let fail = |step: SagaStep, committed: &[SagaStep]| {
        let committed = committed.to_vec();
        move |source: ApiError| SagaError { failed: step, committed, source }
    };

    let log = NewWorkLog {
        task_id: entry.task_id,
        work_time: entry.work_time,
        log_type: WORK_LOG_TYPE.to_string(),
        description: entry.description.clone(),
    };
    api.create_work_log(&log)
        .await
        .map_err(fail(SagaStep::WorkLog, &committed))?;
    committed.push(SagaStep::WorkLog);

    // Saving work always parks the task in WAITING for review
    let update = TaskStatusUpdate {
        id_num: entry.task_id,
        status: TaskStatus::Waiting,
    };
    api.set_task_status(&update)
        .await
        .map_err(fail(SagaStep::StatusTransition, &committed))?;
    committed.push(SagaStep::StatusTransition);

    if let Some(file) = &entry.attachment {
        let users = api
            .assigned_users(entry.task_id)
            .await
            .map_err(fail(SagaStep::AssignedUsers, &committed))?;
        committed.push(SagaStep::AssignedUsers);

        let directory_id = api
            .task_directory(entry.task_id)
            .await
            .map_err(fail(SagaStep::Directory, &committed))?;
        committed.push(SagaStep::Directory);

        let document_id = api
            .upload(directory_id, file)
            .await
            .map_err(fail(SagaStep::Upload, &committed))?;
        committed.push(SagaStep::Upload);

        for user in &users {
            api.grant_authority(document_id, &user.user_id)
                .await
                .map_err(fail(
                    SagaStep::AuthorityGrant { user_id: user.user_id.clone() },
                    &committed,
                ))?;
            committed.push(SagaStep::AuthorityGrant { user_id: user.user_id.clone() });
        }
    }

    Ok(committed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct MockApi {
        calls: RefCell<Vec<String>>,
        fail_on: Option<&'static str>,
        users: Vec<TaskUser>,
    }

    impl MockApi {
        fn new(users: Vec<&str>) -> Self {
            MockApi {
                calls: RefCell::new(Vec::new()),
                fail_on: None,
                users: users
                    .into_iter()
                    .map(|id| TaskUser { user_id: id.to_string(), user_name: String::new() })
                    .collect(),
            }
        }

        fn failing_at(mut self, call: &'static str) -> Self {
            self.fail_on = Some(call);
            self
        }

        fn record(&self, call: String, short: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            if self.fail_on == Some(short) {
                Err(ApiError::Server { status: 500, message: "boom".to_string() })
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl TaskApi for MockApi {
        type Attachment = &'static str;

        async fn create_work_log(&self, entry: &NewWorkLog) -> Result<(), ApiError> {
            self.record(
                format!("work_log({}, {}h, {})", entry.task_id, entry.work_time, entry.log_type),
                "work_log",
            )
        }

        async fn set_task_status(&self, update: &TaskStatusUpdate) -> Result<(), ApiError> {
            self.record(
                format!("status({}, {})", update.id_num, update.status.label()),
                "status",
            )
        }

        async fn assigned_users(&self, task_id: u64) -> Result<Vec<TaskUser>, ApiError> {
            self.record(format!("users({task_id})"), "users")?;
            Ok(self.users.clone())
        }

        async fn task_directory(&self, task_id: u64) -> Result<u64, ApiError> {
            self.record(format!("directory({task_id})"), "directory")?;
            Ok(42)
        }

        async fn upload(&self, directory_id: u64, file: &&'static str) -> Result<u64, ApiError> {
            self.record(format!("upload({directory_id}, {file})"), "upload")?;
            Ok(99)
        }

        async fn grant_authority(&self, document_id: u64, user_id: &str) -> Result<(), ApiError> {
            self.record(format!("grant({document_id}, {user_id})"), "grant")
        }
    }

    fn entry(attachment: Option<&'static str>) -> WorkEntry<&'static str> {
        WorkEntry {
            task_id: 17,
            work_time: 3,
            description: "{\"blocks\":[]}".to_string(),
            attachment,
        }
    }

    #[test]
    fn no_file_issues_work_post_and_waiting_put_only() {
        let api = MockApi::new(vec!["kim", "lee"]);
        let committed = block_on(submit_work_entry(&api, entry(None))).unwrap();

        assert_eq!(
            *api.calls.borrow(),
            vec!["work_log(17, 3h, DONE)".to_string(), "status(17, WAITING)".to_string()]
        );
        assert_eq!(committed, vec![SagaStep::WorkLog, SagaStep::StatusTransition]);
    }

    #[test]
    fn file_path_runs_users_directory_upload_then_one_grant_per_user() {
        let api = MockApi::new(vec!["kim", "lee"]);
        let committed = block_on(submit_work_entry(&api, entry(Some("spec.pdf")))).unwrap();

        assert_eq!(
            *api.calls.borrow(),
            vec![
                "work_log(17, 3h, DONE)".to_string(),
                "status(17, WAITING)".to_string(),
                "users(17)".to_string(),
                "directory(17)".to_string(),
                "upload(42, spec.pdf)".to_string(),
                "grant(99, kim)".to_string(),
                "grant(99, lee)".to_string(),
            ]
        );
        assert_eq!(committed.len(), 7);
        assert_eq!(
            committed.last(),
            Some(&SagaStep::AuthorityGrant { user_id: "lee".to_string() })
        );
    }

    #[test]
    fn upload_failure_keeps_already_committed_steps() {
        let api = MockApi::new(vec!["kim"]).failing_at("upload");
        let err = block_on(submit_work_entry(&api, entry(Some("spec.pdf")))).unwrap_err();

        assert_eq!(err.failed, SagaStep::Upload);
        assert_eq!(
            err.committed,
            vec![
                SagaStep::WorkLog,
                SagaStep::StatusTransition,
                SagaStep::AssignedUsers,
                SagaStep::Directory,
            ]
        );
        // nothing after the failing step ran
        assert!(api.calls.borrow().iter().all(|c| !c.starts_with("grant")));
        // the dialog spells out what is already saved
        let message = err.dialog_message();
        assert!(message.contains("공수 기록"));
        assert!(message.contains("상태 변경"));
    }

    #[test]
    fn first_step_failure_commits_nothing() {
        let api = MockApi::new(vec![]).failing_at("work_log");
        let err = block_on(submit_work_entry(&api, entry(None))).unwrap_err();

        assert_eq!(err.failed, SagaStep::WorkLog);
        assert!(err.committed.is_empty());
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[test]
    fn status_failure_reports_committed_work_log() {
        let api = MockApi::new(vec![]).failing_at("status");
        let err = block_on(submit_work_entry(&api, entry(None))).unwrap_err();

        assert_eq!(err.failed, SagaStep::StatusTransition);
        assert_eq!(err.committed, vec![SagaStep::WorkLog]);
        assert!(matches!(err.source, ApiError::Server { status: 500, .. }));
    }
}
