//! Candidate list → filter → sort → window.
//!
//! Every stage is a pure function over owned data; callers re-run the whole
//! pipeline whenever any input changes.

pub mod filter;
pub mod sort;
pub mod window;

use crate::models::criteria::FilterCriteria;
use crate::models::journals::JournalCandidate;
use window::ResultCountSelection;

#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Rows to display, already filtered, sorted and windowed.
    pub rows: Vec<JournalCandidate>,
    pub total_matched: usize,
    pub selection: ResultCountSelection,
}

pub fn run_pipeline(candidates: &[JournalCandidate], criteria: &FilterCriteria) -> PipelineOutput {
    let matched = filter::filter(candidates, criteria);
    let total_matched = matched.len();
    let sorted = sort::sort_by_score(matched, criteria.sort_direction);

    let mut selection = ResultCountSelection::new(criteria.requested_display_count);
    selection.set_available(total_matched);
    let rows = window::window(&sorted, selection.effective());

    PipelineOutput {
        rows,
        total_matched,
        selection,
    }
}
