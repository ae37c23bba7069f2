//! Raceboard - Racing championship standings
//!
//! This library provides:
//! - Season ledgers recording races, racers, and finishing positions
//! - Championship points scoring with a consecutive-win streak bonus
//! - League-level aggregation of standings across seasons
//!
//! # Example
//!
//! ```
//! use raceboard::core::season::SeasonLedger;
//!
//! let mut season = SeasonLedger::new();
//! let monaco = season.add_race("Monaco");
//! let spa = season.add_race("Spa");
//! let driver = season.add_racer("Driver A", false);
//!
//! // Back-to-back wins earn the streak bonus: 25 + (25 + 1)
//! season.record_result(monaco, driver.clone(), 1);
//! season.record_result(spa, driver, 1);
//!
//! let standings = season.standings();
//! assert_eq!(standings[0].points, 51);
//! ```

pub mod core;
pub mod models;

// API-specific modules (only available with api feature)
#[cfg(feature = "api")]
pub mod error;

// Re-export commonly used types
pub use crate::core::league::{League, LeagueId, LeagueSeason, SeasonId};
pub use crate::core::scoring::{base_points, tally, STREAK_BONUS};
pub use crate::core::season::{
    HistoryEntry, Race, RaceId, Racer, RacerId, ResultEntry, SeasonLedger, StandingsEntry,
};
