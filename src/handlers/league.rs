use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::AppState;
use raceboard::core::league::SeasonId;
use raceboard::core::season::SeasonLedger;
use raceboard::error::AppError;
use raceboard::models::{LeagueOverview, SeasonResponse, SeasonSummary};

/// League overview: id, name, and per-season summaries in addition order
pub async fn get_league(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let store = state.store.lock().unwrap();

    let seasons = store
        .league
        .seasons()
        .iter()
        .map(|season| SeasonSummary {
            season_id: season.id.clone(),
            race_count: season.ledger.races().len(),
            racer_count: season.ledger.racers().len(),
            result_count: season.ledger.results().len(),
            active: season.id == store.active_season,
        })
        .collect();

    Ok(HttpResponse::Ok().json(LeagueOverview {
        league_id: store.league.id().clone(),
        league_name: store.league.name().to_string(),
        seasons,
    }))
}

/// Create a fresh season, add it to the league, and make it active
pub async fn create_season(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let mut store = state.store.lock().unwrap();

    let season_id = store.league.add_season(SeasonLedger::new());
    store.active_season = season_id.clone();
    info!("created season {}", season_id);

    Ok(HttpResponse::Ok().json(SeasonResponse {
        success: true,
        season_id,
    }))
}

/// Switch the active season
pub async fn activate_season(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let season_id = SeasonId::from(path.into_inner());

    let mut store = state.store.lock().unwrap();
    if store.league.season(&season_id).is_none() {
        return Err(AppError::SeasonNotFound(season_id.to_string()));
    }
    store.active_season = season_id.clone();

    Ok(HttpResponse::Ok().json(SeasonResponse {
        success: true,
        season_id,
    }))
}

/// Combined standings across all seasons
pub async fn overall_standings(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let store = state.store.lock().unwrap();
    Ok(HttpResponse::Ok().json(store.league.overall_standings()))
}
