//! Sync Errors

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("service returned {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Service { status: u16, message: Option<String> },

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("title must not be empty")]
    EmptyTitle,

    #[error("todo {0} is not in the list")]
    NotFound(String),

    #[error("list is not mounted")]
    Unmounted,
}

impl SyncError {
    /// Message shown to the user; the service's own message wins when present
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            SyncError::Service { message: Some(message), .. } => message.clone(),
            SyncError::EmptyTitle => "Title must not be empty".to_string(),
            _ => fallback.to_string(),
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_service_message() {
        let err = SyncError::Service { status: 400, message: Some("Title too long".into()) };
        assert_eq!(err.user_message("Failed to add todo"), "Title too long");
    }

    #[test]
    fn test_user_message_fallback() {
        let err = SyncError::Transport("connection refused".into());
        assert_eq!(err.user_message("Failed to fetch todos"), "Failed to fetch todos");
        let err = SyncError::Service { status: 500, message: None };
        assert_eq!(err.user_message("Failed to delete todo"), "Failed to delete todo");
    }
}
