//! Error types for story data access.

use ncpview_domain::{DomainError, StoryId};

/// Terminal failure value for story data operations.
///
/// Cloneable on purpose: the view state store holds the last error as part
/// of its observable state. Original causes are carried as rendered
/// `details` strings rather than boxed sources.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Story could not be retrieved (missing file, non-2xx response,
    /// undecodable body).
    #[error("story not found: {id}")]
    StoryNotFound {
        id: StoryId,
        details: Option<String>,
    },

    /// The story index could not be loaded.
    #[error("story index unavailable: {details}")]
    IndexUnavailable { details: String },

    /// Structural validation failed; non-fatal, surfaced to an authoring
    /// flow as human-readable messages.
    #[error("story validation failed: {}", .errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    /// Anything unexpected, with the original cause rendered opaquely.
    #[error("{message}")]
    Unexpected {
        message: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn story_not_found(id: StoryId, details: Option<String>) -> Self {
        Self::StoryNotFound { id, details }
    }

    pub fn index_unavailable(details: impl ToString) -> Self {
        Self::IndexUnavailable {
            details: details.to_string(),
        }
    }

    pub fn unexpected(message: impl Into<String>, details: impl ToString) -> Self {
        Self::Unexpected {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }

    /// Stable machine-readable code for presentation layers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::StoryNotFound { .. } => "STORY_NOT_FOUND",
            Self::IndexUnavailable { .. } => "INDEX_UNAVAILABLE",
            Self::ValidationFailed { .. } => "VALIDATION_FAILED",
            Self::Unexpected { .. } => "UNEXPECTED",
        }
    }

    /// Opaque cause detail, if any, for an expandable error panel.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::StoryNotFound { details, .. } | Self::Unexpected { details, .. } => {
                details.as_deref()
            }
            Self::IndexUnavailable { details } => Some(details.as_str()),
            Self::ValidationFailed { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::StoryNotFound { .. })
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::ValidationFailed { errors },
        }
    }
}
