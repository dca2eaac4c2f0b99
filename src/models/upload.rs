use crate::models::response::ValidationResponse;
use serde::Serialize;
use std::path::Path;

pub const ACCEPTED_FORMATS: [&str; 3] = [".doc", ".docx", ".pdf"];

/// Metadata for an article the user has uploaded for matching.
#[derive(Debug, Serialize, Clone)]
pub struct ArticleUpload {
    pub file_name: String,
    pub size_bytes: u64,
}

impl ArticleUpload {
    pub fn new(file_name: String, size_bytes: u64) -> Self {
        Self {
            file_name,
            size_bytes,
        }
    }

    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|os_str| os_str.to_str())
            .map(|ext| format!(".{}", ext.to_lowercase()))
    }

    pub fn validate(&self, max_size_mb: u64) -> Result<(), Vec<ValidationResponse>> {
        let mut validation_errors = Vec::new();

        let accepted = self
            .extension()
            .is_some_and(|ext| ACCEPTED_FORMATS.contains(&ext.as_str()));
        if !accepted {
            validation_errors.push(ValidationResponse {
                field: "article".to_string(),
                message: format!(
                    "Invalid format. Please upload {} files.",
                    ACCEPTED_FORMATS.join(", ")
                ),
            });
        }

        if self.size_bytes > max_size_mb * 1024 * 1024 {
            validation_errors.push(ValidationResponse {
                field: "article".to_string(),
                message: format!("File too large. Maximum size is {}MB.", max_size_mb),
            });
        }

        if validation_errors.is_empty() {
            Ok(())
        } else {
            Err(validation_errors)
        }
    }

    pub fn formatted_size(&self) -> String {
        let bytes = self.size_bytes as f64;
        if self.size_bytes < 1024 {
            format!("{} B", self.size_bytes)
        } else if self.size_bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes / 1024.0)
        } else {
            format!("{:.1} MB", bytes / (1024.0 * 1024.0))
        }
    }
}
