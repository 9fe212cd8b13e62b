//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub database: &'static str,
}

/// Health check endpoint - returns server and database status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database_up = blogly_infra::ping(&state.db).await;

    let response = HealthResponse {
        status: if database_up { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        database: if database_up { "up" } else { "down" },
    };

    if database_up {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
