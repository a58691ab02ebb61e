/*
 * Responsibility
 * - Closed set of failures an activity invocation can end with
 * - Exhaustive mapping failure → (status category, public code, public message)
 * - Unclassified failures are redacted here; their detail only goes to the log
 */
use thiserror::Error;

use crate::pipeline::{claims::MissingClaim, request::DecodeError, response::StatusCategory};

pub const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("invalid request body: {0}")]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    MissingClaim(#[from] MissingClaim),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Conflict(String),
    #[error("unexpected failure: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl ActivityError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn category(&self) -> StatusCategory {
        match self {
            Self::Decode(_) | Self::Validation(_) | Self::Conflict(_) => StatusCategory::ClientError,
            Self::NotFound(_) => StatusCategory::NotFound,
            Self::MissingClaim(_) | Self::Unauthorized(_) => StatusCategory::Forbidden,
            Self::Unexpected(_) => StatusCategory::ServerError,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "INVALID_REQUEST_BODY",
            Self::MissingClaim(_) => "MISSING_CLAIM",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unauthorized(_) => "FORBIDDEN",
            Self::Conflict(_) => "CONFLICT",
            Self::Unexpected(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::Unexpected(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classified_errors_map_to_documented_categories() {
        let cases = [
            (
                ActivityError::Decode(DecodeError::EmptyBody),
                StatusCategory::ClientError,
            ),
            (
                ActivityError::validation("target must be positive"),
                StatusCategory::ClientError,
            ),
            (ActivityError::conflict("exists"), StatusCategory::ClientError),
            (ActivityError::not_found("goal"), StatusCategory::NotFound),
            (
                ActivityError::MissingClaim(MissingClaim {
                    name: "email".into(),
                }),
                StatusCategory::Forbidden,
            ),
            (ActivityError::unauthorized("nope"), StatusCategory::Forbidden),
        ];

        for (err, expected) in cases {
            assert!(err.is_classified());
            assert_eq!(err.category(), expected, "{err:?}");
        }
    }

    #[test]
    fn classified_message_is_passed_through() {
        let err = ActivityError::not_found("goal 'Run 5k' not found");
        assert_eq!(err.public_message(), "goal 'Run 5k' not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn unexpected_message_is_redacted() {
        let err = ActivityError::from(anyhow::anyhow!("connection refused: 10.0.0.7:5432"));
        assert!(!err.is_classified());
        assert_eq!(err.category(), StatusCategory::ServerError);
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);
        assert!(err.to_string().contains("10.0.0.7"));
    }
}
