use crate::config::config::{Config, StoreBackend};
use crate::model::response::Response;
use crate::repository::memory::MemoryStore;
use crate::repository::redis::RedisStore;
use crate::repository::store::DocumentStore;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder, Result};
use log::{error, info, warn};
use std::io;
use std::sync::Arc;

mod config;
mod controller;
mod model;
mod repository;
mod service;
mod standings;
mod stats;

#[get("/health")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(Response::success("Everything is working as expected"))
}

async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(Response::failed("Resource not found")))
}

pub struct AppState {
    store: Arc<dyn DocumentStore>,
    config: Config,
}

fn build_store(config: &Config) -> io::Result<Arc<dyn DocumentStore>> {
    match (config.store_backend, config.redis_url.as_deref()) {
        (StoreBackend::Redis, Some(url)) => {
            let store = RedisStore::new(url).map_err(|e| {
                error!("Failed to create redis store. The error: {}", e);
                io::Error::new(io::ErrorKind::Other, e.to_string())
            })?;
            Ok(Arc::new(store))
        }
        (StoreBackend::Redis, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "REDIS_URL must be set",
        )),
        (StoreBackend::Memory, _) => {
            warn!("Using the in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::init().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    log4rs::init_file(&config.log_config, Default::default())
        .map_err(|e| io::Error::new(io::ErrorKind::NotFound, format!("Log config file not found: {}", e)))?;

    let store = build_store(&config)?;
    let bind_addr = (config.server_host.clone(), config.server_port);
    info!(
        "Starting standings service on {}:{} with the {} store",
        bind_addr.0,
        bind_addr.1,
        store.backend_type()
    );

    let app_data = web::Data::new(AppState { store, config });

    HttpServer::new(move || {
        App::new()
            .app_data(app_data.clone())
            .configure(controller::handler::config)
            .service(health_check)
            .default_service(web::route().to(not_found))
            .wrap(actix_web::middleware::Logger::default())
    })
    .bind(bind_addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    #[actix_web::test]
    async fn health_and_fallback() {
        let app = test::init_service(
            App::new()
                .service(health_check)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[::core::prelude::v1::test]
    fn memory_backend_needs_no_url() {
        let store = build_store(&Config::default()).unwrap();
        assert_eq!(store.backend_type(), "memory");
    }
}
