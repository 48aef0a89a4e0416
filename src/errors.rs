use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::models::domain::session_state::{PendingRequest, Phase};

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream service error: {0}")]
    ServiceFailure(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ServiceFailure(_) => "SERVICE_FAILURE",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// The message meant for the person using the quiz, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::ValidationError(msg)
            | AppError::ServiceFailure(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ServiceFailure(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.message().to_string(),
            kind: self.error_code(),
            code: self.status_code().as_u16(),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failure of a quiz generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    ServiceFailure(String),
}

/// Failure of a quiz submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("{0}")]
    Incomplete(String),

    #[error("{0}")]
    ServiceFailure(String),
}

/// What went wrong talking to the generation or grading service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    #[error("service answered {status}: {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { status: u16, reason: Option<String> },

    #[error("service unreachable: {0}")]
    Unreachable(String),

    #[error("unreadable service response: {0}")]
    InvalidResponse(String),
}

impl CollaboratorError {
    /// The reason the service itself gave, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            CollaboratorError::Rejected { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {action} while the session is {phase}")]
    InvalidTransition { phase: Phase, action: &'static str },

    #[error("a {0} request is already in flight for this session")]
    RequestInFlight(PendingRequest),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::InvalidInput(msg) => AppError::ValidationError(msg),
            GenerationError::ServiceFailure(msg) => AppError::ServiceFailure(msg),
        }
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Incomplete(msg) => AppError::ValidationError(msg),
            SubmissionError::ServiceFailure(msg) => AppError::ServiceFailure(msg),
        }
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Generation(err) => err.into(),
            SessionError::Submission(err) => err.into(),
            other => AppError::Conflict(other.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .collect();
        messages.sort();

        AppError::ValidationError(messages.join(" "))
    }
}
