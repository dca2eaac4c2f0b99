use log::{error, info};
use std::collections::HashSet;

use crate::data::seed_records::seed_records;
use crate::db::storage::StorageBackend;
use crate::errors::MatcherError;
use crate::models::record::{SearchRecord, YearMonth};

pub const STORAGE_KEY: &str = "journal-search-records";

pub struct RecordStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All saved records, most recent first. An uninitialised store is
    /// seeded with the example history on first access.
    pub fn list(&self) -> Result<Vec<SearchRecord>, MatcherError> {
        match self.backend.get(STORAGE_KEY)? {
            Some(blob) => decode(&blob),
            None => self.backend.update(STORAGE_KEY, |current| match current {
                // another caller seeded it first
                Some(blob) => Ok((None, decode(&blob)?)),
                None => {
                    let seeded = seed_records();
                    info!("Seeded record store with {} example records", seeded.len());
                    Ok((Some(encode(&seeded)?), seeded))
                }
            }),
        }
    }

    pub fn save(&self, record: SearchRecord) -> Result<(), MatcherError> {
        info!("Saving search record {} ({})", record.id, record.order_name);
        self.modify(|records| records.insert(0, record))
    }

    /// Removes every record whose id is in `ids`. Unknown ids are ignored.
    pub fn delete_many(&self, ids: &HashSet<String>) -> Result<usize, MatcherError> {
        let deleted = self.modify(|records| {
            let before = records.len();
            records.retain(|r| !ids.contains(&r.id));
            before - records.len()
        })?;
        info!("Deleted {} search record(s)", deleted);
        Ok(deleted)
    }

    pub fn find(&self, id: &str) -> Result<SearchRecord, MatcherError> {
        self.list()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| MatcherError::NotFound(format!("Search record {} not found", id)))
    }

    pub fn query(&self, query: &RecordQuery, page_size: usize) -> Result<RecordPage, MatcherError> {
        let records = self.list()?;
        Ok(query.apply(records, page_size))
    }

    // Read, change and write back the whole list as one backend update.
    fn modify<T>(&self, change: impl FnOnce(&mut Vec<SearchRecord>) -> T) -> Result<T, MatcherError> {
        self.backend.update(STORAGE_KEY, |current| {
            let mut records = match current {
                Some(blob) => decode(&blob)?,
                None => seed_records(),
            };
            let out = change(&mut records);
            Ok((Some(encode(&records)?), out))
        })
    }
}

fn decode(blob: &str) -> Result<Vec<SearchRecord>, MatcherError> {
    serde_json::from_str(blob).map_err(|e| {
        error!("Stored search records are corrupt: {}", e);
        MatcherError::CorruptStore(e.to_string())
    })
}

fn encode(records: &[SearchRecord]) -> Result<String, MatcherError> {
    serde_json::to_string(records).map_err(|e| MatcherError::StorageError(e.to_string()))
}

pub fn filter_by_order_name(records: &[SearchRecord], needle: &str) -> Vec<SearchRecord> {
    records
        .iter()
        .filter(|r| r.matches_order_name(needle))
        .cloned()
        .collect()
}

pub fn filter_by_month(records: &[SearchRecord], month: YearMonth) -> Vec<SearchRecord> {
    records
        .iter()
        .filter(|r| r.year_month() == month)
        .cloned()
        .collect()
}

/// Search state of the records view. Changing either filter sends the
/// user back to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    order_name: Option<String>,
    month: Option<YearMonth>,
    page: usize,
}

impl Default for RecordQuery {
    fn default() -> Self {
        Self {
            order_name: None,
            month: None,
            page: 1,
        }
    }
}

impl RecordQuery {
    pub fn with_order_name(mut self, needle: Option<String>) -> Self {
        let needle = needle
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if needle != self.order_name {
            self.order_name = needle;
            self.page = 1;
        }
        self
    }

    pub fn with_month(mut self, month: Option<YearMonth>) -> Self {
        if month != self.month {
            self.month = month;
            self.page = 1;
        }
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn apply(&self, records: Vec<SearchRecord>, page_size: usize) -> RecordPage {
        let mut matched = records;
        if let Some(needle) = &self.order_name {
            matched = filter_by_order_name(&matched, needle);
        }
        if let Some(month) = self.month {
            matched = filter_by_month(&matched, month);
        }
        RecordPage::paginate(matched, self.page, page_size)
    }
}

#[derive(Debug, Clone)]
pub struct RecordPage {
    pub records: Vec<SearchRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

impl RecordPage {
    /// Slices out one page, clamping `page` into `1..=total_pages`.
    pub fn paginate(records: Vec<SearchRecord>, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total = records.len();
        let total_pages = total.div_ceil(page_size).max(1);
        let page = page.clamp(1, total_pages);

        let records = records
            .into_iter()
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect();

        Self {
            records,
            page,
            total_pages,
            total,
        }
    }
}
