use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

use crate::models::ServiceErrorBody;

#[derive(Debug)]
pub enum ApiError {
    /// Payload failed field-level validation rules.
    Validation {
        field: Option<String>,
        message: String,
    },
    /// Malformed identifier or query parameter.
    InvalidArgument { field: String, message: String },
    /// Sort criterion referenced a field outside the sortable set.
    BadSortField { field: String },
    NotFound { field: Option<String>, message: String },
    Internal(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Validation failure not attributable to a single field.
    pub fn validation_generic(message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: None,
            message: message.into(),
        }
    }

    pub fn invalid_argument(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn bad_sort_field(field: impl Into<String>) -> Self {
        ApiError::BadSortField {
            field: field.into(),
        }
    }

    /// The standard body for a missing resource id.
    pub fn resource_not_found() -> Self {
        ApiError::NotFound {
            field: Some("id".to_string()),
            message: "The resource does not exist".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation {
                field: Some(field),
                message,
            } => write!(f, "Validation failed on '{}': {}", field, message),
            ApiError::Validation { field: None, message } => {
                write!(f, "Validation failed: {}", message)
            }
            ApiError::InvalidArgument { field, message } => {
                write!(f, "Invalid argument '{}': {}", field, message)
            }
            ApiError::BadSortField { field } => {
                write!(f, "Unknown sort property '{}'", field)
            }
            ApiError::NotFound { message, .. } => write!(f, "Not found: {}", message),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation { field, message } => {
                (StatusCode::BAD_REQUEST, ServiceErrorBody::new(field, message))
            }
            ApiError::InvalidArgument { field, message } => (
                StatusCode::BAD_REQUEST,
                ServiceErrorBody::new(Some(field), message),
            ),
            ApiError::BadSortField { field } => (
                StatusCode::BAD_REQUEST,
                ServiceErrorBody::new(
                    Some("sort".to_string()),
                    format!("Unknown sort property '{}'", field),
                ),
            ),
            ApiError::NotFound { field, message } => {
                (StatusCode::NOT_FOUND, ServiceErrorBody::new(field, message))
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ServiceErrorBody::new(None, msg),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::resource_not_found(),
            other => ApiError::Internal(format!("Database error: {}", other)),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
