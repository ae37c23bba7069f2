use actix_web::{middleware, web, App, HttpServer};
use std::sync::{Arc, Mutex};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod handlers;

use handlers::{health, league, season};
use raceboard::core::league::{League, SeasonId};
use raceboard::core::season::SeasonLedger;

/// The league plus the season new results are currently recorded into.
///
/// Constructed at startup and torn down with the process; there is no
/// persistence. The active season id always refers to a season present in
/// the league: the store starts with one season and switching validates
/// the id first.
pub struct LeagueStore {
    pub league: League,
    pub active_season: SeasonId,
}

impl LeagueStore {
    pub fn new(league_name: &str) -> Self {
        let mut league = League::new(league_name);
        let active_season = league.add_season(SeasonLedger::new());
        Self {
            league,
            active_season,
        }
    }
}

/// Application state shared across handlers
///
/// The mutex serializes all mutations; the core does no locking of its own.
pub struct AppState {
    pub store: Mutex<LeagueStore>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("{}:{}", host, port);

    let league_name =
        std::env::var("LEAGUE_NAME").unwrap_or_else(|_| "Racing League".to_string());

    let app_state = Arc::new(AppState {
        store: Mutex::new(LeagueStore::new(&league_name)),
    });

    info!("Starting Raceboard API server at http://{}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .route("/health", web::get().to(health::health_check))
            .route("/api/season", web::get().to(season::get_season))
            .route("/api/season/race", web::post().to(season::add_race))
            .route("/api/season/racer", web::post().to(season::add_racer))
            .route("/api/season/result", web::post().to(season::add_result))
            .route(
                "/api/season/racer/{racer_id}/positions",
                web::get().to(season::racer_positions),
            )
            .route("/api/league", web::get().to(league::get_league))
            .route("/api/league/season", web::post().to(league::create_season))
            .route(
                "/api/league/season/{season_id}/activate",
                web::post().to(league::activate_season),
            )
            .route(
                "/api/league/standings",
                web::get().to(league::overall_standings),
            )
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_with_one_active_season() {
        let store = LeagueStore::new("Test League");
        assert_eq!(store.league.seasons().len(), 1);
        assert!(store.league.season(&store.active_season).is_some());
    }

    #[test]
    fn test_store_league_name() {
        let store = LeagueStore::new("Test League");
        assert_eq!(store.league.name(), "Test League");
    }
}
