//! Display column catalogue and the CSV export of displayed rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::MatcherError;
use crate::models::journals::JournalCandidate;

pub const EXPORT_PREFIX: &str = "journal-results";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    JournalName,
    SerialNumber,
    Publisher,
    Quartile,
    MatchingAnalysis,
    Score,
    Apc,
    ProfileUrl,
    AimsScopes,
    Preferences,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::JournalName,
        Column::SerialNumber,
        Column::Publisher,
        Column::Quartile,
        Column::MatchingAnalysis,
        Column::Score,
        Column::Apc,
        Column::ProfileUrl,
        Column::AimsScopes,
        Column::Preferences,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Column::JournalName => "journalName",
            Column::SerialNumber => "serialNumber",
            Column::Publisher => "publisher",
            Column::Quartile => "quartile",
            Column::MatchingAnalysis => "matchingAnalysis",
            Column::Score => "score",
            Column::Apc => "apc",
            Column::ProfileUrl => "profileUrl",
            Column::AimsScopes => "aimsScopes",
            Column::Preferences => "preferences",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Column::JournalName => "Journal Name",
            Column::SerialNumber => "Serial Number",
            Column::Publisher => "Publisher",
            Column::Quartile => "Quartile",
            Column::MatchingAnalysis => "Matching Analysis",
            Column::Score => "Score",
            Column::Apc => "APC",
            Column::ProfileUrl => "Profile URL",
            Column::AimsScopes => "Aims & Scopes",
            Column::Preferences => "Preferences",
        }
    }

    pub fn default_visible(&self) -> bool {
        matches!(
            self,
            Column::JournalName
                | Column::SerialNumber
                | Column::Publisher
                | Column::Quartile
                | Column::Apc
                | Column::ProfileUrl
        )
    }

    pub fn sortable(&self) -> bool {
        matches!(self, Column::Score)
    }

    pub fn defaults() -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(Column::default_visible)
            .collect()
    }

    /// Export headers that carry this display column. Serial number splits
    /// into ISSN and E-ISSN.
    pub fn export_headers(&self) -> &'static [&'static str] {
        match self {
            Column::SerialNumber => &["ISSN", "E-ISSN"],
            Column::JournalName => &["Journal Name"],
            Column::Publisher => &["Publisher"],
            Column::Quartile => &["Quartile"],
            Column::MatchingAnalysis => &["Matching Analysis"],
            Column::Score => &["Score"],
            Column::Apc => &["APC"],
            Column::ProfileUrl => &["Profile URL"],
            Column::AimsScopes => &["Aims & Scopes"],
            Column::Preferences => &["Preferences"],
        }
    }

    /// Cell values for this column, one per entry of `export_headers`.
    pub fn export_values(&self, journal: &JournalCandidate) -> Vec<String> {
        match self {
            Column::JournalName => vec![journal.journal_name.clone()],
            Column::SerialNumber => vec![journal.issn.clone(), journal.eissn.clone()],
            Column::Publisher => vec![journal.publisher.clone()],
            Column::Quartile => vec![journal.quartile.label()],
            Column::MatchingAnalysis => vec![journal.analysis_joined()],
            Column::Score => vec![journal.score_display()],
            Column::Apc => vec![journal.apc.clone()],
            Column::ProfileUrl => vec![journal.profile_url.clone()],
            Column::AimsScopes => vec![journal.aims_scopes.clone()],
            Column::Preferences => vec![journal.preferences.clone()],
        }
    }
}

impl FromStr for Column {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MatcherError::ValidationError(format!("Unknown column: {}", s)))
    }
}

/// Export header row: every catalogue column in order, regardless of what
/// the table currently shows.
pub fn export_header_row() -> Vec<&'static str> {
    Column::ALL
        .iter()
        .flat_map(|column| column.export_headers().iter().copied())
        .collect()
}

fn export_row(journal: &JournalCandidate) -> Vec<String> {
    Column::ALL
        .iter()
        .flat_map(|column| column.export_values(journal))
        .collect()
}

pub fn export_csv(rows: &[JournalCandidate]) -> Result<Vec<u8>, MatcherError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(export_header_row())?;
    for journal in rows {
        writer.write_record(export_row(journal))?;
    }
    writer
        .into_inner()
        .map_err(|e| MatcherError::ExportError(e.to_string()))
}

/// `journal-results-<record id or "export">-<YYYY-MM-DD>.csv`
pub fn export_filename(record_id: Option<&str>, date: NaiveDate) -> String {
    format!(
        "{}-{}-{}.csv",
        EXPORT_PREFIX,
        record_id.filter(|id| !id.is_empty()).unwrap_or("export"),
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::candidates::all_candidates;

    #[test]
    fn export_header_row_is_the_full_catalogue() {
        assert_eq!(
            export_header_row(),
            vec![
                "Journal Name",
                "ISSN",
                "E-ISSN",
                "Publisher",
                "Quartile",
                "Matching Analysis",
                "Score",
                "APC",
                "Profile URL",
                "Aims & Scopes",
                "Preferences",
            ]
        );
    }

    #[test]
    fn export_includes_hidden_columns() {
        let headers = export_header_row();
        let hidden: Vec<_> = Column::ALL
            .into_iter()
            .filter(|c| !c.default_visible())
            .collect();
        assert!(!hidden.is_empty());
        for column in hidden {
            assert!(headers.contains(&column.label()), "{} missing", column.label());
        }
    }

    #[test]
    fn every_column_yields_one_value_per_header() {
        let journal = &all_candidates()[0];
        for column in Column::ALL {
            assert_eq!(
                column.export_values(journal).len(),
                column.export_headers().len(),
                "{:?}",
                column
            );
        }
    }

    #[test]
    fn export_rows_format_labels_and_scores() {
        let rows: Vec<_> = all_candidates().into_iter().take(2).collect();
        let bytes = export_csv(&rows).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), export_header_row().len());

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "Nature Communications");
        assert_eq!(&records[0][4], "Scopus Q1");
        assert_eq!(&records[0][6], "95%");
        assert_eq!(&records[0][7], "$5,790");
        assert!(records[0][5].contains("; "));
    }

    #[test]
    fn empty_export_still_has_headers() {
        let bytes = export_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Journal Name,ISSN"));
    }

    #[test]
    fn filename_uses_record_id_or_fallback() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 5).unwrap();
        assert_eq!(
            export_filename(Some("result-001"), date),
            "journal-results-result-001-2025-02-05.csv"
        );
        assert_eq!(export_filename(None, date), "journal-results-export-2025-02-05.csv");
    }

    #[test]
    fn columns_parse_from_keys() {
        assert_eq!("profileUrl".parse::<Column>().unwrap(), Column::ProfileUrl);
        assert!("bogus".parse::<Column>().is_err());
        assert_eq!(Column::defaults().len(), 6);
        assert!(Column::Score.sortable());
    }
}
