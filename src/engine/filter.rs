use crate::models::criteria::FilterCriteria;
use crate::models::journals::{AccessType, JournalCandidate};

pub const HIGH_APC_THRESHOLD: f64 = 2000.0;
pub const APC_CEILING: f64 = 1600.0;

/// One filter control and whether a candidate survives it.
///
/// Disabled criteria keep everything, so the result of [`filter`] is simply
/// the intersection of all predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Quartile,
    AccessType,
    ExceptHighApcOa,
    NoSubmissionFee,
    ApcCeiling,
}

impl Predicate {
    pub const ALL: [Predicate; 5] = [
        Predicate::Quartile,
        Predicate::AccessType,
        Predicate::ExceptHighApcOa,
        Predicate::NoSubmissionFee,
        Predicate::ApcCeiling,
    ];

    pub fn is_enabled(&self, criteria: &FilterCriteria) -> bool {
        match self {
            Predicate::Quartile => !criteria.quartiles.is_empty(),
            Predicate::AccessType => criteria.access_type.is_some(),
            Predicate::ExceptHighApcOa => criteria.except_high_apc_oa,
            Predicate::NoSubmissionFee => criteria.no_submission_fee,
            Predicate::ApcCeiling => criteria.apc_under_1600,
        }
    }

    pub fn keeps(&self, criteria: &FilterCriteria, candidate: &JournalCandidate) -> bool {
        if !self.is_enabled(criteria) {
            return true;
        }
        match self {
            Predicate::Quartile => criteria.quartiles.contains(&candidate.quartile),
            Predicate::AccessType => criteria.access_type == Some(candidate.access_type),
            Predicate::ExceptHighApcOa => {
                !(candidate.apc_value() > HIGH_APC_THRESHOLD
                    && candidate.access_type == AccessType::Open)
            }
            Predicate::NoSubmissionFee => candidate.submission_fee == 0,
            Predicate::ApcCeiling => candidate.apc_value() < APC_CEILING,
        }
    }
}

pub fn matches(criteria: &FilterCriteria, candidate: &JournalCandidate) -> bool {
    Predicate::ALL
        .iter()
        .all(|predicate| predicate.keeps(criteria, candidate))
}

/// Order-preserving subset of `candidates` that passes every enabled criterion.
pub fn filter(candidates: &[JournalCandidate], criteria: &FilterCriteria) -> Vec<JournalCandidate> {
    candidates
        .iter()
        .filter(|candidate| matches(criteria, candidate))
        .cloned()
        .collect()
}
