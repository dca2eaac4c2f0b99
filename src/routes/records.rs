use actix_web::{delete, get, post, web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use std::collections::HashSet;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::config::AppConfig;
use crate::data::candidates::all_candidates;
use crate::db::record_repository::{RecordQuery, RecordStore};
use crate::db::schema::init_db;
use crate::db::storage::SqliteStorage;
use crate::engine::run_pipeline;
use crate::errors::MatcherError;
use crate::export::Column;
use crate::models::criteria::FilterCriteria;
use crate::models::record::{is_allowed_file_url, SearchRecord, YearMonth};
use crate::models::response::{DeleteRecordsResponse, RecalledResultsResponse, RecordPageResponse};
use crate::routes::results::{criteria_query, results_response};

fn open_store(config: &AppConfig) -> Result<RecordStore<SqliteStorage>, MatcherError> {
    let conn =
        init_db(&config.database_path).map_err(|e| MatcherError::DatabaseError(e.to_string()))?;
    Ok(RecordStore::new(SqliteStorage::new(conn)))
}

#[derive(Deserialize)]
pub struct RecordListParams {
    pub q: Option<String>,
    pub month: Option<String>,
    pub page: Option<usize>,
}

impl RecordListParams {
    fn to_query(&self) -> Result<RecordQuery, MatcherError> {
        let month = self
            .month
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .map(str::parse::<YearMonth>)
            .transpose()?;

        Ok(RecordQuery::default()
            .with_order_name(self.q.clone())
            .with_month(month)
            .with_page(self.page.unwrap_or(1)))
    }
}

#[derive(Deserialize, Validate)]
pub struct SaveRecordRequest {
    #[validate(length(min = 1, max = 200, message = "Order name must be 1-200 characters"))]
    pub order_name: String,
    #[validate(length(min = 1, message = "Article file name is required"))]
    pub article_file_name: String,
    #[validate(custom(
        function = "validate_file_url",
        message = "Article file URL must be #, /download/... or http(s)"
    ))]
    pub article_file_url: Option<String>,
    pub result_id: Option<String>,
    pub filters: Option<FilterCriteria>,
}

fn validate_file_url(url: &str) -> Result<(), ValidationError> {
    if is_allowed_file_url(url) {
        Ok(())
    } else {
        Err(ValidationError::new("file_url"))
    }
}

impl SaveRecordRequest {
    fn into_record(self) -> SearchRecord {
        let result_id = self
            .result_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("result-{}", Uuid::new_v4()));
        SearchRecord::new(
            self.order_name.trim().to_string(),
            self.article_file_name,
            self.article_file_url.unwrap_or_else(|| "#".to_string()),
            result_id,
            self.filters,
        )
    }
}

#[derive(Deserialize)]
pub struct DeleteRecordsRequest {
    pub ids: Vec<String>,
}

#[derive(Template)]
#[template(path = "records.html")]
struct RecordsTemplate {
    records: Vec<SearchRecord>,
    search: String,
    month: String,
    page: usize,
    total_pages: usize,
    total: usize,
    defaults: FilterCriteria,
}

impl RecordsTemplate {
    // Keeps the current search and month so paging does not reset them.
    fn page_href(&self, page: usize) -> String {
        let page = page.to_string();
        let params: Vec<(&str, &str)> = [
            ("q", self.search.trim()),
            ("month", self.month.trim()),
            ("page", page.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
        format!(
            "/records?{}",
            serde_urlencoded::to_string(params).unwrap_or_default()
        )
    }

    fn prev_href(&self) -> Option<String> {
        (self.page > 1).then(|| self.page_href(self.page - 1))
    }

    fn next_href(&self) -> Option<String> {
        (self.page < self.total_pages).then(|| self.page_href(self.page + 1))
    }

    /// Results page for a saved record, under its own filters.
    fn view_href(&self, record: &SearchRecord) -> String {
        let criteria = record.filters.clone().unwrap_or_else(|| self.defaults.clone());
        format!(
            "/results?{}&{}",
            criteria_query(&criteria, &Column::defaults()),
            serde_urlencoded::to_string([("record_id", record.result_id.as_str())])
                .unwrap_or_default()
        )
    }
}

#[get("/api/records")]
pub async fn list_records_handler(
    params: web::Query<RecordListParams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let query = params.to_query()?;
    let store = open_store(&config)?;
    let page = store.query(&query, config.records_page_size)?;

    Ok(HttpResponse::Ok().json(RecordPageResponse {
        records: page.records,
        page: page.page,
        total_pages: page.total_pages,
        total: page.total,
    }))
}

#[post("/api/records")]
pub async fn save_record_handler(
    payload: web::Json<SaveRecordRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let request = payload.into_inner();
    request.validate()?;

    let record = request.into_record();
    let store = open_store(&config)?;
    store.save(record.clone())?;

    Ok(HttpResponse::Created().json(record))
}

#[delete("/api/records")]
pub async fn delete_records_handler(
    payload: web::Json<DeleteRecordsRequest>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let ids: HashSet<String> = payload.into_inner().ids.into_iter().collect();
    let store = open_store(&config)?;
    let deleted = store.delete_many(&ids)?;

    Ok(HttpResponse::Ok().json(DeleteRecordsResponse {
        success: true,
        deleted,
    }))
}

/// Re-runs the pipeline with the filters saved on a record.
#[get("/api/records/{id}/results")]
pub async fn recall_record_handler(
    id: web::Path<String>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let store = open_store(&config)?;
    let record = store.find(&id)?;

    let criteria = record
        .filters
        .clone()
        .unwrap_or_else(|| config.default_criteria());
    let output = run_pipeline(&all_candidates(), &criteria);

    Ok(HttpResponse::Ok().json(RecalledResultsResponse {
        record,
        results: results_response(output, &criteria, Column::defaults()),
    }))
}

#[get("/records")]
pub async fn records_page_handler(
    params: web::Query<RecordListParams>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let query = params.to_query()?;
    let store = open_store(&config)?;
    let page = store.query(&query, config.records_page_size)?;

    let template = RecordsTemplate {
        records: page.records,
        search: params.q.clone().unwrap_or_default(),
        month: params.month.clone().unwrap_or_default(),
        page: page.page,
        total_pages: page.total_pages,
        total: page.total,
        defaults: config.default_criteria(),
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            template
                .render()
                .map_err(|e| MatcherError::InternalError(format!("Template error: {}", e)))?,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn config_in(dir: &tempfile::TempDir) -> web::Data<AppConfig> {
        web::Data::new(AppConfig {
            database_path: dir.path().join("records.db").to_string_lossy().into_owned(),
            records_page_size: 2,
            ..AppConfig::default()
        })
    }

    macro_rules! records_app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data($config)
                    .service(list_records_handler)
                    .service(save_record_handler)
                    .service(delete_records_handler)
                    .service(recall_record_handler),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn save_search_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_app!(config_in(&dir));

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(json!({
                "order_name": "Smith_12_Publication",
                "article_file_name": "smith.pdf",
                "filters": { "quartiles": ["Q1"], "noSubmissionFee": true }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let saved: Value = test::read_body_json(resp).await;
        let id = saved["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/api/records?q=smith")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["total"], 1);
        assert_eq!(page["records"][0]["orderName"], "Smith_12_Publication");

        let req = test::TestRequest::get()
            .uri(&format!("/api/records/{}/results", id))
            .to_request();
        let recalled: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(recalled["results"]["total_matched"], 6);

        let req = test::TestRequest::delete()
            .uri("/api/records")
            .set_json(json!({ "ids": [id, "does-not-exist"] }))
            .to_request();
        let deleted: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(deleted["deleted"], 1);

        let req = test::TestRequest::get()
            .uri("/api/records?q=smith")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["total"], 0);
    }

    #[actix_web::test]
    async fn listing_paginates_and_clamps() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_app!(config_in(&dir));

        let req = test::TestRequest::get()
            .uri("/api/records?month=2025-02&page=99")
            .to_request();
        let page: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(page["total"], 5);
        assert_eq!(page["total_pages"], 3);
        assert_eq!(page["page"], 3);
        assert_eq!(page["records"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn blank_order_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_app!(config_in(&dir));

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(json!({ "order_name": "", "article_file_name": "a.pdf" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_app!(config_in(&dir));

        let req = test::TestRequest::get()
            .uri("/api/records/missing/results")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_month_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_app!(config_in(&dir));

        let req = test::TestRequest::get()
            .uri("/api/records?month=Feb")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn script_file_url_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = records_app!(config_in(&dir));

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(json!({
                "order_name": "Smith_12_Publication",
                "article_file_name": "smith.pdf",
                "article_file_url": "javascript:alert(document.cookie)"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("article_file_url"));

        let req = test::TestRequest::post()
            .uri("/api/records")
            .set_json(json!({
                "order_name": "Smith_12_Publication",
                "article_file_name": "smith.pdf",
                "article_file_url": "/download/3f2a.pdf"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn records_page_links_keep_search_and_month() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(config_in(&dir))
                .configure(crate::routes::configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/records?month=2025-02&page=2")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();

        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains(r#"href="/records?month=2025-02&amp;page=1""#));
        assert!(html.contains(r#"href="/records?month=2025-02&amp;page=3""#));
        assert!(html.contains("/results?"));
        assert!(html.contains("record_id=result-003"));
        assert!(!html.contains("/api/records/"));
    }

    #[::core::prelude::v1::test]
    fn page_links_encode_search_text() {
        let template = RecordsTemplate {
            records: Vec::new(),
            search: "AI & health".to_string(),
            month: String::new(),
            page: 1,
            total_pages: 2,
            total: 3,
            defaults: FilterCriteria::default(),
        };
        assert_eq!(template.prev_href(), None);
        assert_eq!(
            template.next_href().as_deref(),
            Some("/records?q=AI+%26+health&page=2")
        );
    }
}
