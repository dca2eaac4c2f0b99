pub mod candidates;
pub mod seed_records;
