use std::env;
use std::str::FromStr;

use crate::errors::MatcherError;
use crate::models::criteria::FilterCriteria;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub upload_dir: String,
    pub max_upload_mb: u64,
    pub records_page_size: usize,
    pub default_result_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            database_path: String::from("./data/journal_matcher.db"),
            upload_dir: String::from("./data/uploads"),
            max_upload_mb: 10,
            records_page_size: 10,
            default_result_count: FilterCriteria::DEFAULT_DISPLAY_COUNT,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, MatcherError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            MatcherError::ValidationError(format!("{} must be a valid number, got '{}'", name, raw))
        }),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Reads overrides from the environment; `.env` is loaded by the caller.
    pub fn from_env() -> Result<Self, MatcherError> {
        let defaults = Self::default();
        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port)?,
            database_path: env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or(defaults.upload_dir),
            max_upload_mb: parse_var("MAX_UPLOAD_MB", defaults.max_upload_mb)?,
            records_page_size: parse_var("RECORDS_PAGE_SIZE", defaults.records_page_size)?
                .max(1),
            default_result_count: parse_var("DEFAULT_RESULT_COUNT", defaults.default_result_count)?
                .max(1),
        })
    }

    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::default().with_display_count(self.default_result_count)
    }
}
