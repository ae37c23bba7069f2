use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::debug;

use crate::{AppState, LeagueStore};
use raceboard::core::season::{RacerId, SeasonLedger};
use raceboard::error::{validate_position, AppError};
use raceboard::models::{
    CreateRaceRequest, CreateRaceResponse, CreateRacerRequest, CreateRacerResponse,
    RecordResultRequest, RecordResultResponse, SeasonOverview,
};

fn active_ledger(store: &LeagueStore) -> Result<&SeasonLedger, AppError> {
    store
        .league
        .season(&store.active_season)
        .ok_or_else(|| AppError::SeasonNotFound(store.active_season.to_string()))
}

fn active_ledger_mut(store: &mut LeagueStore) -> Result<&mut SeasonLedger, AppError> {
    let id = store.active_season.clone();
    store
        .league
        .season_mut(&id)
        .ok_or_else(|| AppError::SeasonNotFound(id.to_string()))
}

/// Active season overview: races, racers, and standings
pub async fn get_season(state: web::Data<Arc<AppState>>) -> Result<HttpResponse, AppError> {
    let store = state.store.lock().unwrap();
    let ledger = active_ledger(&store)?;

    let overview = SeasonOverview {
        season_id: store.active_season.clone(),
        races: ledger.races().to_vec(),
        racers: ledger.racers().to_vec(),
        standings: ledger.standings(),
    };

    Ok(HttpResponse::Ok().json(overview))
}

/// Register a race in the active season
pub async fn add_race(
    state: web::Data<Arc<AppState>>,
    req: web::Json<CreateRaceRequest>,
) -> Result<HttpResponse, AppError> {
    let mut store = state.store.lock().unwrap();
    let ledger = active_ledger_mut(&mut store)?;

    let race_id = ledger.add_race(&req.race_name);
    debug!("registered race {} as {}", req.race_name, race_id);

    Ok(HttpResponse::Ok().json(CreateRaceResponse {
        success: true,
        race_id,
    }))
}

/// Register a racer in the active season
pub async fn add_racer(
    state: web::Data<Arc<AppState>>,
    req: web::Json<CreateRacerRequest>,
) -> Result<HttpResponse, AppError> {
    let mut store = state.store.lock().unwrap();
    let ledger = active_ledger_mut(&mut store)?;

    let racer_id = ledger.add_racer(&req.racer_name, req.is_ai);
    debug!("registered racer {} as {}", req.racer_name, racer_id);

    Ok(HttpResponse::Ok().json(CreateRacerResponse {
        success: true,
        racer_id,
    }))
}

/// Record a finishing position in the active season
///
/// Identities are passed through opaquely; the core tolerates unknown ids.
pub async fn add_result(
    state: web::Data<Arc<AppState>>,
    req: web::Json<RecordResultRequest>,
) -> Result<HttpResponse, AppError> {
    validate_position(req.position)?;

    let mut store = state.store.lock().unwrap();
    let ledger = active_ledger_mut(&mut store)?;

    let req = req.into_inner();
    ledger.record_result(req.race_id, req.racer_id, req.position);

    Ok(HttpResponse::Ok().json(RecordResultResponse { success: true }))
}

/// A racer's race history in the active season, in recording order
pub async fn racer_positions(
    state: web::Data<Arc<AppState>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let racer_id = RacerId::from(path.into_inner());

    let store = state.store.lock().unwrap();
    let ledger = active_ledger(&store)?;

    if ledger.racer(&racer_id).is_none() {
        return Err(AppError::RacerNotFound(racer_id.to_string()));
    }

    Ok(HttpResponse::Ok().json(ledger.racer_history(&racer_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Mutex;

    use raceboard::core::season::HistoryEntry;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            store: Mutex::new(LeagueStore::new("Test League")),
        })
    }

    macro_rules! test_app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state.clone()))
                    .route("/api/season", web::get().to(get_season))
                    .route("/api/season/race", web::post().to(add_race))
                    .route("/api/season/racer", web::post().to(add_racer))
                    .route("/api/season/result", web::post().to(add_result))
                    .route(
                        "/api/season/racer/{racer_id}/positions",
                        web::get().to(racer_positions),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_season_flow() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/season/racer")
            .set_json(CreateRacerRequest {
                racer_name: "Driver A".to_string(),
                is_ai: false,
            })
            .to_request();
        let racer: CreateRacerResponse = test::call_and_read_body_json(&app, req).await;
        assert!(racer.success);

        let req = test::TestRequest::post()
            .uri("/api/season/race")
            .set_json(CreateRaceRequest {
                race_name: "Monaco".to_string(),
            })
            .to_request();
        let race: CreateRaceResponse = test::call_and_read_body_json(&app, req).await;
        assert!(race.success);

        let req = test::TestRequest::post()
            .uri("/api/season/result")
            .set_json(RecordResultRequest {
                race_id: race.race_id,
                racer_id: racer.racer_id.clone(),
                position: 1,
            })
            .to_request();
        let recorded: RecordResultResponse = test::call_and_read_body_json(&app, req).await;
        assert!(recorded.success);

        let req = test::TestRequest::get().uri("/api/season").to_request();
        let overview: SeasonOverview = test::call_and_read_body_json(&app, req).await;
        assert_eq!(overview.races.len(), 1);
        assert_eq!(overview.standings[0].points, 25);

        let uri = format!("/api/season/racer/{}/positions", racer.racer_id);
        let req = test::TestRequest::get().uri(&uri).to_request();
        let history: Vec<HistoryEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].race_name, "Monaco");
    }

    #[actix_web::test]
    async fn test_invalid_position_rejected() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/season/result")
            .set_json(RecordResultRequest {
                race_id: "some-race".to_string().into(),
                racer_id: "some-racer".to_string().into(),
                position: 0,
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unknown_racer_positions_is_404() {
        let state = test_state();
        let app = test_app!(state);

        let req = test::TestRequest::get()
            .uri("/api/season/racer/no-such-racer/positions")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
