pub mod analyze;
pub mod records;
pub mod results;

use actix_web::web;

/// Every endpoint of the matcher, shared by the server and route tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(results::candidates_handler)
        .service(analyze::analyze_handler)
        .service(results::results_api_handler)
        .service(results::results_page_handler)
        .service(results::export_handler)
        .service(records::list_records_handler)
        .service(records::save_record_handler)
        .service(records::delete_records_handler)
        .service(records::recall_record_handler)
        .service(records::records_page_handler);
}
