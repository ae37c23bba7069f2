use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::AppState;
use raceboard::models::HealthResponse;

/// Health check endpoint
pub async fn health_check(state: web::Data<Arc<AppState>>) -> impl Responder {
    let store = state.store.lock().unwrap();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        season_count: store.league.seasons().len(),
    };

    HttpResponse::Ok().json(response)
}
