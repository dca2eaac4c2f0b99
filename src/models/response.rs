use serde::Serialize;

use crate::engine::window::CountOption;
use crate::export::Column;
use crate::models::journals::JournalCandidate;
use crate::models::record::SearchRecord;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result_id: String,
    pub article_file_name: String,
    pub article_file_url: String,
    pub candidates: Vec<JournalCandidate>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ResultsResponse {
    pub rows: Vec<JournalCandidate>,
    pub total_matched: usize,
    pub display_count: usize,
    pub max_count: usize,
    pub count_options: Vec<CountOption>,
    pub visible_columns: Vec<Column>,
    pub active_filters: usize,
}

#[derive(Serialize)]
pub struct RecordPageResponse {
    pub records: Vec<SearchRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

#[derive(Serialize)]
pub struct RecalledResultsResponse {
    pub record: SearchRecord,
    pub results: ResultsResponse,
}

#[derive(Serialize)]
pub struct DeleteRecordsResponse {
    pub success: bool,
    pub deleted: usize,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub field: String,
    pub message: String,
}
