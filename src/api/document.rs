//! Document / Directory Endpoints

use super::ApiClient;
use crate::error::ApiError;

impl ApiClient {
    /// Resolve (or create) the storage directory for a task.
    pub async fn fetch_task_directory(&self, task_id: u64) -> Result<u64, ApiError> {
        self.get_json(&format!("/api/directory/task/{task_id}")).await
    }

    /// Upload one attachment into a directory; returns the new document id.
    pub async fn upload_document(&self, directory_id: u64, file: &web_sys::File) -> Result<u64, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Unknown("FormData 생성에 실패했습니다.".to_string()))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::Unknown("첨부파일을 추가하지 못했습니다.".to_string()))?;
        self.post_form(&format!("/api/document/upload/{directory_id}"), &form)
            .await
    }

    /// Grant one user read authority on an uploaded document.
    pub async fn grant_document_authority(
        &self,
        document_id: u64,
        user_id: &str,
    ) -> Result<(), ApiError> {
        self.post_empty(&format!("/api/document/authority/{document_id}/{user_id}"))
            .await
    }
}
