//! Error Taxonomy
//!
//! Tagged error kinds for everything the UI surfaces in a dialog, instead of
//! a single catch-all string. Each kind maps to its own dialog title; the
//! message is either the structured payload or the caller's fallback string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure (connectivity, fetch rejection).
    #[error("네트워크 오류: {0}")]
    Network(String),
    /// The fixed client-side timeout elapsed before any response.
    #[error("요청 시간이 초과되었습니다.")]
    Timeout,
    /// Non-2xx server response.
    #[error("서버 오류 ({status}): {message}")]
    Server { status: u16, message: String },
    /// Local parse/validation failure (e.g. malformed stored rich text).
    #[error("데이터 형식이 올바르지 않습니다: {0}")]
    Validation(String),
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Dialog title for this kind of failure.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            ApiError::Network(_) => "네트워크 오류",
            ApiError::Timeout => "요청 시간 초과",
            ApiError::Server { .. } => "요청 실패",
            ApiError::Validation(_) => "데이터 오류",
            ApiError::Unknown(_) => "요청 실패",
        }
    }

    /// Message shown in the error dialog. Server messages can be empty
    /// bodies, in which case the caller's fallback wording is used.
    pub fn dialog_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if message.trim().is_empty() => fallback.to_string(),
            ApiError::Unknown(message) if message.trim().is_empty() => fallback.to_string(),
            other => other.to_string(),
        }
    }
}
