use crate::models::criteria::SortDirection;
use crate::models::journals::JournalCandidate;

/// Orders candidates by score. The sort is stable: equal scores keep their
/// input order in both directions.
pub fn sort_by_score(
    mut candidates: Vec<JournalCandidate>,
    direction: SortDirection,
) -> Vec<JournalCandidate> {
    match direction {
        SortDirection::Ascending => candidates.sort_by(|a, b| a.score.cmp(&b.score)),
        SortDirection::Descending => candidates.sort_by(|a, b| b.score.cmp(&a.score)),
    }
    candidates
}
