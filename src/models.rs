use serde::{Deserialize, Serialize};

use crate::core::league::{LeagueId, SeasonId};
use crate::core::season::{Race, RaceId, Racer, RacerId, StandingsEntry};

/// Race registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRaceRequest {
    pub race_name: String,
}

/// Race registration response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRaceResponse {
    pub success: bool,
    pub race_id: RaceId,
}

/// Racer registration request
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRacerRequest {
    pub racer_name: String,
    #[serde(default)]
    pub is_ai: bool,
}

/// Racer registration response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRacerResponse {
    pub success: bool,
    pub racer_id: RacerId,
}

/// Result recording request
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResultRequest {
    pub race_id: RaceId,
    pub racer_id: RacerId,
    pub position: i32,
}

/// Result recording response
#[derive(Debug, Serialize, Deserialize)]
pub struct RecordResultResponse {
    pub success: bool,
}

/// Active season overview: races, racers, and current standings
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonOverview {
    pub season_id: SeasonId,
    pub races: Vec<Race>,
    pub racers: Vec<Racer>,
    pub standings: Vec<StandingsEntry>,
}

/// Per-season summary line in the league overview
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub season_id: SeasonId,
    pub race_count: usize,
    pub racer_count: usize,
    pub result_count: usize,
    pub active: bool,
}

/// League overview response
#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueOverview {
    pub league_id: LeagueId,
    pub league_name: String,
    pub seasons: Vec<SeasonSummary>,
}

/// Season creation / activation response
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonResponse {
    pub success: bool,
    pub season_id: SeasonId,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub season_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
