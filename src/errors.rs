use crate::form::Field;
use axum::http::StatusCode;
use thiserror::Error;

/// Reasons a report is refused. None of them leave a partial record behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields: {0} is required")]
    MissingField(Field),
    #[error("Date of Incident must look like YYYY-MM-DD, got '{0}'")]
    InvalidDate(String),
    #[error("Time of Incident must look like HH:MM, got '{0}'")]
    InvalidTime(String),
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidCount { field: Field, value: String },
    #[error("At least one person must be involved")]
    NoPeopleInvolved,
    #[error("People injured ({injured}) cannot exceed people involved ({involved})")]
    InjuredExceedsInvolved { injured: u32, involved: u32 },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::unprocessable(err.to_string())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
