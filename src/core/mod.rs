//! Core standings logic: scoring, season ledgers, league aggregation

pub mod league;
pub mod scoring;
pub mod season;

// Re-export commonly used types
pub use league::{League, LeagueId, LeagueSeason, SeasonId};
pub use scoring::{base_points, tally, STREAK_BONUS};
pub use season::{
    HistoryEntry, Race, RaceId, Racer, RacerId, ResultEntry, SeasonLedger, StandingsEntry,
};
