//! Structured results for boundary operations.
//!
//! File, clipboard and resize operations never let an error escape past the
//! canvas boundary. They report an [`OperationOutcome`] instead, which the
//! UI shows as a transient feedback message.

use serde::{Deserialize, Serialize};

/// Feedback category of an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Info,
    Error,
}

/// Success flag plus a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub success: bool,
    pub kind: OutcomeKind,
    /// `None` when nothing should be shown (e.g. the user cancelled).
    pub message: Option<String>,
}

impl OperationOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            kind: OutcomeKind::Success,
            message: Some(message.into()),
        }
    }

    /// Informational result that did not change anything, e.g. an empty clipboard.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            success: false,
            kind: OutcomeKind::Info,
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            kind: OutcomeKind::Error,
            message: Some(message.into()),
        }
    }

    /// The user dismissed a dialog. Silent and not a failure.
    pub fn cancelled() -> Self {
        Self {
            success: true,
            kind: OutcomeKind::Info,
            message: None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.success && self.message.is_none()
    }
}
