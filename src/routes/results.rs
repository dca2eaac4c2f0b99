use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpResponse};
use askama::Template;
use chrono::Utc;
use log::info;
use serde::Deserialize;

use crate::config::AppConfig;
use crate::data::candidates::all_candidates;
use crate::engine::window::CountOption;
use crate::engine::{run_pipeline, PipelineOutput};
use crate::errors::MatcherError;
use crate::export::{export_csv, export_filename, Column};
use crate::models::criteria::FilterCriteria;
use crate::models::journals::{JournalCandidate, Quartile};
use crate::models::response::ResultsResponse;

/// Filter controls as they arrive on the query string, e.g.
/// `?quartiles=Q1,Q2&access_type=open&no_submission_fee=true&sort=desc&count=8`.
#[derive(Deserialize, Default)]
pub struct ResultsQuery {
    pub quartiles: Option<String>,
    pub access_type: Option<String>,
    pub except_high_apc_oa: Option<bool>,
    pub no_submission_fee: Option<bool>,
    pub apc_under_1600: Option<bool>,
    pub sort: Option<String>,
    pub count: Option<usize>,
    pub columns: Option<String>,
    pub record_id: Option<String>,
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl ResultsQuery {
    pub fn to_criteria(&self, defaults: FilterCriteria) -> Result<FilterCriteria, MatcherError> {
        let mut criteria = defaults;

        if let Some(raw) = &self.quartiles {
            let quartiles = split_list(raw)
                .map(str::parse::<Quartile>)
                .collect::<Result<Vec<_>, _>>()?;
            criteria = criteria.with_quartiles(quartiles);
        }
        if let Some(raw) = self.access_type.as_deref().filter(|s| !s.trim().is_empty()) {
            criteria = criteria.with_access_type(Some(raw.parse()?));
        }
        if let Some(enabled) = self.except_high_apc_oa {
            criteria = criteria.with_except_high_apc_oa(enabled);
        }
        if let Some(enabled) = self.no_submission_fee {
            criteria = criteria.with_no_submission_fee(enabled);
        }
        if let Some(enabled) = self.apc_under_1600 {
            criteria = criteria.with_apc_under_1600(enabled);
        }
        if let Some(raw) = &self.sort {
            criteria = criteria.with_sort_direction(raw.parse()?);
        }
        if let Some(count) = self.count {
            criteria = criteria.with_display_count(count);
        }

        Ok(criteria)
    }

    pub fn visible_columns(&self) -> Result<Vec<Column>, MatcherError> {
        match &self.columns {
            None => Ok(Column::defaults()),
            Some(raw) => {
                let requested = split_list(raw)
                    .map(str::parse::<Column>)
                    .collect::<Result<Vec<_>, _>>()?;
                // keep catalogue order so the table layout is stable
                Ok(Column::ALL
                    .into_iter()
                    .filter(|c| requested.contains(c))
                    .collect())
            }
        }
    }
}

pub fn results_response(
    output: PipelineOutput,
    criteria: &FilterCriteria,
    visible_columns: Vec<Column>,
) -> ResultsResponse {
    ResultsResponse {
        display_count: output.rows.len(),
        max_count: output.selection.max(),
        count_options: output.selection.options(),
        rows: output.rows,
        total_matched: output.total_matched,
        visible_columns,
        active_filters: criteria.active_filter_count(),
    }
}

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    rows: Vec<JournalCandidate>,
    columns: Vec<Column>,
    total_matched: usize,
    criteria: FilterCriteria,
    count_options: Vec<CountOption>,
    chosen_count: usize,
}

impl ResultsTemplate {
    fn shows(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key() == key)
    }

    // Same view with the score order flipped
    fn toggle_sort_href(&self) -> String {
        let criteria = self
            .criteria
            .clone()
            .with_sort_direction(self.criteria.sort_direction.toggled());
        format!("/results?{}", criteria_query(&criteria, &self.columns))
    }
}

pub fn criteria_query(criteria: &FilterCriteria, columns: &[Column]) -> String {
    let mut params = Vec::new();
    if !criteria.quartiles.is_empty() {
        let quartiles: Vec<String> = criteria.quartiles.iter().map(|q| q.to_string()).collect();
        params.push(format!("quartiles={}", quartiles.join(",")));
    }
    if let Some(access_type) = criteria.access_type {
        params.push(format!("access_type={}", access_type));
    }
    params.push(format!("except_high_apc_oa={}", criteria.except_high_apc_oa));
    params.push(format!("no_submission_fee={}", criteria.no_submission_fee));
    params.push(format!("apc_under_1600={}", criteria.apc_under_1600));
    params.push(format!("sort={}", criteria.sort_direction));
    params.push(format!("count={}", criteria.requested_display_count));
    let keys: Vec<&str> = columns.iter().map(Column::key).collect();
    params.push(format!("columns={}", keys.join(",")));
    params.join("&")
}

#[get("/api/candidates")]
pub async fn candidates_handler() -> HttpResponse {
    HttpResponse::Ok().json(all_candidates())
}

#[get("/api/results")]
pub async fn results_api_handler(
    query: web::Query<ResultsQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let criteria = query.to_criteria(config.default_criteria())?;
    let columns = query.visible_columns()?;
    let output = run_pipeline(&all_candidates(), &criteria);

    Ok(HttpResponse::Ok().json(results_response(output, &criteria, columns)))
}

#[get("/results")]
pub async fn results_page_handler(
    query: web::Query<ResultsQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let criteria = query.to_criteria(config.default_criteria())?;
    let columns = query.visible_columns()?;
    let output = run_pipeline(&all_candidates(), &criteria);

    let template = ResultsTemplate {
        count_options: output.selection.options(),
        chosen_count: output.selection.effective(),
        rows: output.rows,
        columns,
        total_matched: output.total_matched,
        criteria,
    };

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            template
                .render()
                .map_err(|e| MatcherError::InternalError(format!("Template error: {}", e)))?,
        ))
}

#[get("/api/results/export")]
pub async fn export_handler(
    query: web::Query<ResultsQuery>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, MatcherError> {
    let criteria = query.to_criteria(config.default_criteria())?;
    let output = run_pipeline(&all_candidates(), &criteria);

    let body = export_csv(&output.rows)?;
    let filename = export_filename(query.record_id.as_deref(), Utc::now().date_naive());
    info!("Exporting {} rows as {}", output.rows.len(), filename);

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::criteria::SortDirection;
    use crate::models::journals::AccessType;
    use actix_web::{test, App};

    fn app_config() -> web::Data<AppConfig> {
        web::Data::new(AppConfig::default())
    }

    #[actix_web::test]
    async fn query_maps_onto_criteria() {
        let query = ResultsQuery {
            quartiles: Some("Q1, q2".to_string()),
            access_type: Some("hybrid".to_string()),
            no_submission_fee: Some(true),
            sort: Some("asc".to_string()),
            count: Some(12),
            ..Default::default()
        };
        let criteria = query.to_criteria(FilterCriteria::default()).unwrap();
        assert_eq!(criteria.quartiles.len(), 2);
        assert_eq!(criteria.access_type, Some(AccessType::Hybrid));
        assert!(criteria.no_submission_fee);
        assert!(!criteria.apc_under_1600);
        assert_eq!(criteria.sort_direction, SortDirection::Ascending);
        assert_eq!(criteria.requested_display_count, 12);
    }

    #[actix_web::test]
    async fn criteria_survive_a_query_string_round_trip() {
        let criteria = FilterCriteria::default()
            .with_quartiles([Quartile::Q1, Quartile::Q3])
            .with_access_type(Some(AccessType::Open))
            .with_apc_under_1600(true)
            .with_sort_direction(SortDirection::Ascending)
            .with_display_count(15);
        let columns = vec![Column::JournalName, Column::Score];

        let raw = criteria_query(&criteria, &columns);
        let query: ResultsQuery = web::Query::<ResultsQuery>::from_query(&raw)
            .unwrap()
            .into_inner();
        assert_eq!(query.to_criteria(FilterCriteria::default()).unwrap(), criteria);
        assert_eq!(query.visible_columns().unwrap(), columns);
    }

    #[actix_web::test]
    async fn api_returns_windowed_rows_and_options() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .service(results_api_handler),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/results?quartiles=Q3,Q4&count=8")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_matched"], 5);
        assert_eq!(body["display_count"], 5);
        assert_eq!(body["max_count"], 5);
        assert_eq!(body["rows"].as_array().unwrap().len(), 5);
        assert_eq!(body["count_options"][5]["disabled"], true);
        assert_eq!(body["count_options"][4]["disabled"], false);
        assert_eq!(body["active_filters"], 2);
    }

    #[actix_web::test]
    async fn unknown_quartile_is_a_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .service(results_api_handler),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/results?quartiles=Q9")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn page_states_when_nothing_matches() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .service(results_page_handler),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/results?quartiles=Q4&access_type=open")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("No journals match"));
    }

    #[actix_web::test]
    async fn export_is_a_named_csv_attachment() {
        let app = test::init_service(
            App::new()
                .app_data(app_config())
                .service(export_handler),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/results/export?apc_under_1600=true&count=20&record_id=result-001")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let disposition = resp
            .headers()
            .get(actix_web::http::header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("journal-results-result-001-"));
        assert!(disposition.contains(".csv"));

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        // header plus twelve matching journals
        assert_eq!(text.lines().count(), 13);
    }
}
