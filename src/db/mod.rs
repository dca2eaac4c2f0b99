pub mod record_repository;
pub mod schema;
pub mod storage;
