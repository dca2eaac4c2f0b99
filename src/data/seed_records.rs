use chrono::{TimeZone, Utc};

use crate::models::record::SearchRecord;

// (id, (y, m, d, h, min), order name, article file, result id)
const SEEDS: [(&str, (i32, u32, u32, u32, u32), &str, &str, &str); 5] = [
    (
        "1",
        (2025, 2, 5, 14, 32),
        "Research Paper - AI in Healthcare",
        "ai_healthcare_study.pdf",
        "result-001",
    ),
    (
        "2",
        (2025, 2, 4, 9, 15),
        "Machine Learning Review",
        "ml_review_2025.docx",
        "result-002",
    ),
    (
        "3",
        (2025, 2, 3, 16, 45),
        "Climate Change Analysis",
        "climate_analysis.pdf",
        "result-003",
    ),
    (
        "4",
        (2025, 2, 2, 11, 20),
        "Quantum Computing Survey",
        "quantum_survey.docx",
        "result-004",
    ),
    (
        "5",
        (2025, 2, 1, 8, 0),
        "Biomedical Engineering Study",
        "biomedical_eng.pdf",
        "result-005",
    ),
];

/// Example history written to an empty store on first access, newest first.
pub fn seed_records() -> Vec<SearchRecord> {
    SEEDS
        .iter()
        .filter_map(|(id, (y, mo, d, h, mi), order_name, file_name, result_id)| {
            let timestamp = Utc.with_ymd_and_hms(*y, *mo, *d, *h, *mi, 0).single()?;
            Some(SearchRecord {
                id: id.to_string(),
                timestamp,
                order_name: order_name.to_string(),
                article_file_name: file_name.to_string(),
                article_file_url: "#".to_string(),
                result_id: result_id.to_string(),
                filters: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_newest_first() {
        let records = seed_records();
        assert_eq!(records.len(), 5);
        assert!(records
            .windows(2)
            .all(|pair| pair[0].timestamp > pair[1].timestamp));
    }
}
