use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use futures::{StreamExt, TryStreamExt};
use log::info;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::data::candidates::all_candidates;
use crate::errors::MatcherError;
use crate::models::response::AnalyzeResponse;
use crate::models::upload::ArticleUpload;
use crate::utils::{read_field_limited, save_article};

/// Accepts an article upload and returns the candidate journals for it.
///
/// The analysis itself is mocked: every valid article gets the same fixed
/// candidate list back under a fresh result id.
#[post("/api/analyze")]
pub async fn analyze_handler(
    mut payload: Multipart,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let limit = config.max_upload_mb * 1024 * 1024;
    let mut article: Option<(ArticleUpload, Vec<u8>)> = None;

    while let Some(field) = payload
        .try_next()
        .await
        .map_err(|e| MatcherError::FileProcessingError(e.to_string()))?
    {
        let content_disposition = field.content_disposition().ok_or_else(|| {
            MatcherError::ValidationError("Content disposition not found".to_string())
        })?;

        if content_disposition.get_name() != Some("article") {
            // Skip other fields
            let mut field = field;
            while field.next().await.is_some() {}
            continue;
        }

        let file_name = content_disposition
            .get_filename()
            .unwrap_or("unknown")
            .to_string();
        let (bytes, size) = read_field_limited(field, limit).await?;
        article = Some((ArticleUpload::new(file_name, size), bytes));
    }

    let (upload, bytes) = article.ok_or_else(|| {
        MatcherError::ValidationError("Article file is required".to_string())
    })?;
    upload.validate(config.max_upload_mb)?;

    let stored_name = save_article(&config.upload_dir, &upload.file_name, &bytes)?;
    let result_id = format!("result-{}", Uuid::new_v4());
    info!(
        "Analyzed article {} ({}) as {}",
        upload.file_name,
        upload.formatted_size(),
        result_id
    );

    Ok(HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        result_id,
        article_file_name: upload.file_name,
        article_file_url: format!("/download/{}", stored_name),
        candidates: all_candidates(),
        message: "Article analyzed successfully".to_string(),
    }))
}
