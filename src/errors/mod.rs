use crate::models::response::ValidationResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum MatcherError {
    DatabaseError(String),
    StorageError(String),
    CorruptStore(String),
    ValidationError(String),
    FileProcessingError(String),
    NotFound(String),
    ExportError(String),
    InternalError(String),
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatcherError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            MatcherError::StorageError(msg) => write!(f, "Storage error: {}", msg),
            MatcherError::CorruptStore(msg) => {
                write!(f, "Stored records could not be read: {}", msg)
            }
            MatcherError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            MatcherError::FileProcessingError(msg) => {
                write!(f, "File processing error: {}", msg)
            }
            MatcherError::NotFound(msg) => write!(f, "Not found error: {}", msg),
            MatcherError::ExportError(msg) => write!(f, "Export error: {}", msg),
            MatcherError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl std::error::Error for MatcherError {}

impl MatcherError {
    fn code(&self) -> &'static str {
        match self {
            MatcherError::DatabaseError(_) => "DATABASE_ERROR",
            MatcherError::StorageError(_) => "STORAGE_ERROR",
            MatcherError::CorruptStore(_) => "CORRUPT_STORE",
            MatcherError::ValidationError(_) => "VALIDATION_ERROR",
            MatcherError::FileProcessingError(_) => "FILE_PROCESSING_ERROR",
            MatcherError::NotFound(_) => "NOT_FOUND_ERROR",
            MatcherError::ExportError(_) => "EXPORT_ERROR",
            MatcherError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    fn message(&self) -> &str {
        match self {
            MatcherError::DatabaseError(msg)
            | MatcherError::StorageError(msg)
            | MatcherError::CorruptStore(msg)
            | MatcherError::ValidationError(msg)
            | MatcherError::FileProcessingError(msg)
            | MatcherError::NotFound(msg)
            | MatcherError::ExportError(msg)
            | MatcherError::InternalError(msg) => msg,
        }
    }
}

impl From<Vec<ValidationResponse>> for MatcherError {
    fn from(errors: Vec<ValidationResponse>) -> Self {
        // Join all validation messages into a single string
        let message = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<String>>()
            .join("; ");

        MatcherError::ValidationError(message)
    }
}

impl From<validator::ValidationErrors> for MatcherError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let responses = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| ValidationResponse {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect::<Vec<_>>();

        responses.into()
    }
}

impl From<rusqlite::Error> for MatcherError {
    fn from(err: rusqlite::Error) -> Self {
        MatcherError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for MatcherError {
    fn from(err: serde_json::Error) -> Self {
        MatcherError::CorruptStore(err.to_string())
    }
}

impl From<csv::Error> for MatcherError {
    fn from(err: csv::Error) -> Self {
        MatcherError::ExportError(err.to_string())
    }
}

impl ResponseError for MatcherError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.code().to_string(),
            message: self.message().to_string(),
        })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            MatcherError::ValidationError(_) => StatusCode::BAD_REQUEST,
            MatcherError::FileProcessingError(_) => StatusCode::BAD_REQUEST,
            MatcherError::NotFound(_) => StatusCode::NOT_FOUND,
            MatcherError::DatabaseError(_)
            | MatcherError::StorageError(_)
            | MatcherError::CorruptStore(_)
            | MatcherError::ExportError(_)
            | MatcherError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_responses_join_into_one_message() {
        let err: MatcherError = vec![
            ValidationResponse {
                field: "article".to_string(),
                message: "Invalid format".to_string(),
            },
            ValidationResponse {
                field: "size".to_string(),
                message: "File too large".to_string(),
            },
        ]
        .into();

        match err {
            MatcherError::ValidationError(msg) => {
                assert_eq!(msg, "article: Invalid format; size: File too large")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn corrupt_store_is_a_server_error() {
        let err: MatcherError = serde_json::from_str::<Vec<u8>>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, MatcherError::CorruptStore(_)));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "CORRUPT_STORE");
    }
}
