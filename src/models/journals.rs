use derive_more::Display;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::errors::MatcherError;

#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quartile {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quartile {
    // Label shown in the table and written to exports
    pub fn label(&self) -> String {
        format!("Scopus {}", self)
    }
}

impl FromStr for Quartile {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "Q1" => Ok(Quartile::Q1),
            "Q2" => Ok(Quartile::Q2),
            "Q3" => Ok(Quartile::Q3),
            "Q4" => Ok(Quartile::Q4),
            other => Err(MatcherError::ValidationError(format!(
                "Unknown quartile: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Display, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    #[display("open")]
    Open,
    #[display("closed")]
    Closed,
    #[display("hybrid")]
    Hybrid,
}

impl AccessType {
    pub fn label(&self) -> &'static str {
        match self {
            AccessType::Open => "Open Access",
            AccessType::Closed => "Closed Access",
            AccessType::Hybrid => "Hybrid Journal",
        }
    }
}

impl FromStr for AccessType {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(AccessType::Open),
            "closed" => Ok(AccessType::Closed),
            "hybrid" => Ok(AccessType::Hybrid),
            other => Err(MatcherError::ValidationError(format!(
                "Unknown access type: {}",
                other
            ))),
        }
    }
}

/// One journal the matcher can recommend. Candidates are static and never
/// mutated once the store is built.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JournalCandidate {
    pub id: String,
    pub journal_name: String,
    pub issn: String,
    pub eissn: String,
    pub publisher: String,
    pub quartile: Quartile,
    pub access_type: AccessType,
    pub submission_fee: u32,
    pub matching_analysis: Vec<String>,
    pub score: u8,
    pub apc: String,
    pub profile_url: String,
    pub aims_scopes: String,
    pub preferences: String,
}

fn non_numeric() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"))
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+\.?\d*|\.\d+)").expect("static pattern is valid"))
}

/// Numeric value of a formatted APC such as `"$1,234"`.
///
/// Everything except digits and periods is stripped, then the longest
/// leading number is read, so `"$2,100. Waiver: 0.5"` is 2100. Zero when
/// no number leads the stripped text.
pub fn parse_apc(apc: &str) -> f64 {
    let digits = non_numeric().replace_all(apc, "");
    leading_number()
        .find(&digits)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

impl JournalCandidate {
    pub fn apc_value(&self) -> f64 {
        parse_apc(&self.apc)
    }

    pub fn score_display(&self) -> String {
        format!("{}%", self.score)
    }

    pub fn analysis_joined(&self) -> String {
        self.matching_analysis.join("; ")
    }

    pub fn score_band(&self) -> &'static str {
        match self.score {
            90.. => "excellent",
            80..=89 => "strong",
            70..=79 => "fair",
            _ => "weak",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apc_parses_currency_strings() {
        assert_eq!(parse_apc("$1,234"), 1234.0);
        assert_eq!(parse_apc("$5,790"), 5790.0);
        assert_eq!(parse_apc("€990.50"), 990.5);
        assert_eq!(parse_apc("$0"), 0.0);
    }

    #[test]
    fn unparsable_apc_defaults_to_zero() {
        assert_eq!(parse_apc(""), 0.0);
        assert_eq!(parse_apc("Free"), 0.0);
        assert_eq!(parse_apc("."), 0.0);
        // the minus sign is stripped along with every other non-digit
        assert_eq!(parse_apc("-$300"), 300.0);
    }

    #[test]
    fn trailing_text_after_the_amount_is_ignored() {
        assert_eq!(parse_apc("1.2.3"), 1.2);
        assert_eq!(parse_apc("$2,100. Waiver: 0.5"), 2100.0);
        assert_eq!(parse_apc("$2,100."), 2100.0);
        assert_eq!(parse_apc(".5"), 0.5);
    }

    #[test]
    fn quartile_and_access_type_parse_case_insensitively() {
        assert_eq!("q2".parse::<Quartile>().unwrap(), Quartile::Q2);
        assert_eq!("Hybrid".parse::<AccessType>().unwrap(), AccessType::Hybrid);
        assert!("Q5".parse::<Quartile>().is_err());
        assert!("subscription".parse::<AccessType>().is_err());
    }

    #[test]
    fn quartile_label_uses_scopus_prefix() {
        assert_eq!(Quartile::Q3.label(), "Scopus Q3");
        assert_eq!(AccessType::Open.to_string(), "open");
    }
}
