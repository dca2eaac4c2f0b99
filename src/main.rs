use crate::{
    config::AppConfig,
    db::{record_repository::RecordStore, schema::init_db, storage::SqliteStorage},
    utils::{ensure_dir, ensure_parent_dir},
};
use actix_files as fs;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

mod config;
mod data;
mod db;
mod engine;
mod errors;
mod export;
mod models;
mod routes;
mod utils;

// Opening the history once at startup seeds it and surfaces a corrupt store early.
fn check_record_store(config: &AppConfig) -> Result<usize, errors::MatcherError> {
    let conn = init_db(&config.database_path)?;
    let store = RecordStore::new(SqliteStorage::new(conn));
    Ok(store.list()?.len())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = ensure_parent_dir(&config.database_path) {
        warn!("Failed to create database directory: {}", e);
    }
    if let Err(e) = ensure_dir(&config.upload_dir) {
        warn!("Failed to create uploads directory: {}", e);
    }

    match check_record_store(&config) {
        Ok(count) => info!("Record store ready with {} records", count),
        Err(e) => error!("Record store unavailable, history may be incomplete: {}", e),
    }

    let host = config.host.clone();
    let port = config.port;
    let upload_dir = config.upload_dir.clone();
    let config = web::Data::new(config);

    info!("Starting server on http://{}:{}...", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .wrap(actix_web::middleware::Logger::default())
            .service(fs::Files::new("/static", "./src/static"))
            .service(fs::Files::new("/download", upload_dir.clone()))
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
