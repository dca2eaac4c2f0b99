use actix_multipart::Field;
use futures::StreamExt;
use log::info;
use std::fs;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

use crate::errors::MatcherError;

pub fn ensure_dir(dir: &str) -> std::io::Result<()> {
    let path = Path::new(dir);
    if !path.exists() {
        info!("Creating directory {}...", dir);
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn ensure_parent_dir(file_path: &str) -> std::io::Result<()> {
    match Path::new(file_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Reads a multipart field, keeping at most `limit` bytes in memory.
/// Returns the kept bytes and the full size of the field.
pub async fn read_field_limited(
    mut field: Field,
    limit: u64,
) -> Result<(Vec<u8>, u64), MatcherError> {
    let mut bytes = Vec::new();
    let mut total: u64 = 0;
    while let Some(chunk) = field.next().await {
        let data = chunk
            .map_err(|e| MatcherError::FileProcessingError(format!("Chunk error: {}", e)))?;
        total += data.len() as u64;
        if total <= limit {
            bytes.extend_from_slice(&data);
        }
    }
    Ok((bytes, total))
}

// Helper to persist an accepted article under a fresh uuid name
pub fn save_article(dir: &str, original_name: &str, bytes: &[u8]) -> Result<String, MatcherError> {
    let extension = Path::new(original_name)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .map(|ext| ext.to_lowercase())
        .unwrap_or_else(|| "bin".to_string());

    let file_name = format!("{}.{}", Uuid::new_v4(), extension);
    let file_path = Path::new(dir).join(&file_name);

    fs::create_dir_all(dir).map_err(|e| {
        MatcherError::StorageError(format!("Failed to create upload dir: {}", e))
    })?;

    let mut file = fs::File::create(&file_path).map_err(|e| {
        MatcherError::FileProcessingError(format!(
            "Failed to create file {}: {}",
            file_path.display(),
            e
        ))
    })?;
    file.write_all(bytes).map_err(|e| {
        MatcherError::FileProcessingError(format!(
            "Failed to write to file {}: {}",
            file_path.display(),
            e
        ))
    })?;

    Ok(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_article_keeps_lowercased_extension() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().join("uploads");
        let dir = dir.to_str().unwrap();

        let name = save_article(dir, "Paper.PDF", b"%PDF-1.7").unwrap();
        assert!(name.ends_with(".pdf"));
        assert_eq!(fs::read(Path::new(dir).join(&name)).unwrap(), b"%PDF-1.7");
    }

    #[test]
    fn parent_dir_of_bare_file_name_is_fine() {
        assert!(ensure_parent_dir("store.db").is_ok());
    }
}
