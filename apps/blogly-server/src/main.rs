//! # Blogly Server
//!
//! Server-rendered CRUD for users, their posts and tags, on Actix-web.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod seed;
mod state;
mod telemetry;
mod templates;
mod views;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!("Starting Blogly on {}:{}", config.host, config.port);

    let state = AppState::new(&config.database, config.auto_migrate)
        .await
        .map_err(|e| {
            tracing::error!("Startup failed: {}", e);
            std::io::Error::other(e)
        })?;

    if config.seed_demo_data {
        if let Err(e) = seed::seed_demo_data(&state.store).await {
            tracing::warn!("Demo data not seeded: {}", e);
        }
    }

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
