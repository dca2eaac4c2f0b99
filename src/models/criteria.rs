use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::errors::MatcherError;
use crate::models::journals::{AccessType, Quartile};

#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[display("asc")]
    Ascending,
    #[default]
    #[display("desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(MatcherError::ValidationError(format!(
                "Unknown sort direction: {}",
                other
            ))),
        }
    }
}

/// Every user-chosen input to the results pipeline.
///
/// A session holds exactly one value of this type and replaces it wholesale
/// whenever a control changes; the `with_*` builders make that cheap to
/// express. This is also the shape that gets snapshotted into a saved record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub quartiles: BTreeSet<Quartile>,
    #[serde(default)]
    pub access_type: Option<AccessType>,
    #[serde(default)]
    pub except_high_apc_oa: bool,
    #[serde(default)]
    pub no_submission_fee: bool,
    #[serde(default)]
    pub apc_under_1600: bool,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default = "FilterCriteria::default_display_count")]
    pub requested_display_count: usize,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            quartiles: BTreeSet::new(),
            access_type: None,
            except_high_apc_oa: false,
            no_submission_fee: false,
            apc_under_1600: false,
            sort_direction: SortDirection::Descending,
            requested_display_count: Self::default_display_count(),
        }
    }
}

impl FilterCriteria {
    pub const DEFAULT_DISPLAY_COUNT: usize = 8;

    fn default_display_count() -> usize {
        Self::DEFAULT_DISPLAY_COUNT
    }

    pub fn with_quartiles<I: IntoIterator<Item = Quartile>>(mut self, quartiles: I) -> Self {
        self.quartiles = quartiles.into_iter().collect();
        self
    }

    pub fn with_access_type(mut self, access_type: Option<AccessType>) -> Self {
        self.access_type = access_type;
        self
    }

    pub fn with_except_high_apc_oa(mut self, enabled: bool) -> Self {
        self.except_high_apc_oa = enabled;
        self
    }

    pub fn with_no_submission_fee(mut self, enabled: bool) -> Self {
        self.no_submission_fee = enabled;
        self
    }

    pub fn with_apc_under_1600(mut self, enabled: bool) -> Self {
        self.apc_under_1600 = enabled;
        self
    }

    pub fn with_sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    // Zero is not a valid request; the smallest window is one row.
    pub fn with_display_count(mut self, count: usize) -> Self {
        self.requested_display_count = count.max(1);
        self
    }

    /// Number of filter controls currently restricting the result set.
    pub fn active_filter_count(&self) -> usize {
        self.quartiles.len()
            + usize::from(self.access_type.is_some())
            + usize::from(self.except_high_apc_oa)
            + usize::from(self.no_submission_fee)
            + usize::from(self.apc_under_1600)
    }

    pub fn quartiles_display(&self) -> String {
        if self.quartiles.is_empty() {
            return "All quartiles".to_string();
        }
        self.quartiles
            .iter()
            .map(|q| q.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn access_type_display(&self) -> &'static str {
        self.access_type.map_or("All Types", |t| t.label())
    }
}
