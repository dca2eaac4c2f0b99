use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::MatcherError;
use crate::models::criteria::FilterCriteria;

/// A saved query: the article it was run for plus the filter state at the
/// moment the user saved it. Records are never edited after creation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
    pub order_name: String,
    pub article_file_name: String,
    pub article_file_url: String,
    pub result_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterCriteria>,
}

/// Link targets a saved record may point its article at: the `#`
/// placeholder, a stored upload under `/download/`, or an http(s) URL.
pub fn is_allowed_file_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower == "#"
        || lower.starts_with("/download/")
        || lower.starts_with("https://")
        || lower.starts_with("http://")
}

impl SearchRecord {
    pub fn new(
        order_name: String,
        article_file_name: String,
        article_file_url: String,
        result_id: String,
        filters: Option<FilterCriteria>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            order_name,
            article_file_name,
            article_file_url,
            result_id,
            filters,
        }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.timestamp.year(),
            month: self.timestamp.month(),
        }
    }

    pub fn formatted_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn matches_order_name(&self, needle: &str) -> bool {
        self.order_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}

/// Calendar month used by the records month filter, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MatcherError::ValidationError(format!("Invalid month '{}', expected YYYY-MM", s));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(YearMonth { year, month })
    }
}
