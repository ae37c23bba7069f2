//! Season Ledger
//!
//! Records races, racers, and finishing positions for one competitive
//! season, and computes the season standings. Races, racers, and results
//! are all kept in insertion order; the streak bonus in
//! [`scoring`](crate::core::scoring) depends on per-racer results being
//! replayed exactly as recorded.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::core::scoring;

/// Marker baked into an AI racer's display name at registration time.
const AI_NAME_SUFFIX: &str = " [AI]";

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a fresh unique identity.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Opaque identity of a race. Unique within process lifetime; the
    /// string format is not a stable contract.
    RaceId
);
opaque_id!(
    /// Opaque identity of a racer.
    RacerId
);

pub(crate) use opaque_id;

/// A single race in a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    pub id: RaceId,
    pub name: String,
}

/// A racer registered for a season.
///
/// For AI racers the stored name carries the `" [AI]"` suffix, applied once
/// at registration and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Racer {
    pub id: RacerId,
    pub name: String,
}

/// A recorded finishing position for a (race, racer) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    pub race_id: RaceId,
    pub racer_id: RacerId,
    /// 1 = first place. Any integer is accepted; only 1-10 score points.
    pub position: i32,
}

/// One row of a standings table: the racer key plus the point total.
///
/// The (id, name) pair is the aggregation key used by league-level
/// summation, kept structured rather than joined into a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub racer_id: RacerId,
    pub racer_name: String,
    pub points: u32,
}

/// One row of a racer's race history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub race_name: String,
    pub position: i32,
}

/// Races, racers, and results for one competitive season.
///
/// All three collections are Vec-backed with HashMap indexes so that
/// iteration order is insertion order. Mutations must be serialized by the
/// caller; the ledger itself does no locking.
#[derive(Debug, Default)]
pub struct SeasonLedger {
    races: Vec<Race>,
    race_index: HashMap<RaceId, usize>,
    racers: Vec<Racer>,
    racer_index: HashMap<RacerId, usize>,
    results: Vec<ResultEntry>,
    result_index: HashMap<(RaceId, RacerId), usize>,
}

impl SeasonLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a race and return its fresh identity.
    pub fn add_race(&mut self, name: &str) -> RaceId {
        let id = RaceId::generate();
        self.race_index.insert(id.clone(), self.races.len());
        self.races.push(Race {
            id: id.clone(),
            name: name.to_string(),
        });
        id
    }

    /// Registered races in registration order.
    pub fn races(&self) -> &[Race] {
        &self.races
    }

    pub fn race(&self, id: &RaceId) -> Option<&Race> {
        self.race_index.get(id).map(|&i| &self.races[i])
    }

    /// Register a racer and return its fresh identity.
    ///
    /// When `is_ai` is set the stored display name gets the `" [AI]"`
    /// suffix baked in permanently.
    pub fn add_racer(&mut self, name: &str, is_ai: bool) -> RacerId {
        let id = RacerId::generate();
        let name = if is_ai {
            format!("{}{}", name, AI_NAME_SUFFIX)
        } else {
            name.to_string()
        };
        self.racer_index.insert(id.clone(), self.racers.len());
        self.racers.push(Racer {
            id: id.clone(),
            name,
        });
        id
    }

    /// Registered racers in registration order.
    pub fn racers(&self) -> &[Racer] {
        &self.racers
    }

    pub fn racer(&self, id: &RacerId) -> Option<&Racer> {
        self.racer_index.get(id).map(|&i| &self.racers[i])
    }

    /// Record a finishing position for a (race, racer) pair.
    ///
    /// A later submission for the same pair silently overwrites the earlier
    /// position, keeping the entry's original insertion slot. The ids are
    /// not checked against the registered races and racers; entries
    /// referencing unknown ids are stored but invisible to per-racer
    /// queries.
    pub fn record_result(&mut self, race_id: RaceId, racer_id: RacerId, position: i32) {
        let key = (race_id.clone(), racer_id.clone());
        match self.result_index.get(&key) {
            Some(&i) => self.results[i].position = position,
            None => {
                self.result_index.insert(key, self.results.len());
                self.results.push(ResultEntry {
                    race_id,
                    racer_id,
                    position,
                });
            }
        }
    }

    /// All recorded results in insertion order.
    pub fn results(&self) -> &[ResultEntry] {
        &self.results
    }

    /// A racer's results in insertion order, with race names resolved.
    ///
    /// Results whose race id does not resolve are omitted. An unknown racer
    /// id yields an empty vector rather than an error.
    pub fn racer_history(&self, racer_id: &RacerId) -> Vec<HistoryEntry> {
        self.results
            .iter()
            .filter(|entry| entry.racer_id == *racer_id)
            .filter_map(|entry| {
                self.race(&entry.race_id).map(|race| HistoryEntry {
                    race_name: race.name.clone(),
                    position: entry.position,
                })
            })
            .collect()
    }

    /// Season standings, one row per registered racer, descending by
    /// points. The sort is stable, so racers tied on points keep their
    /// registration order.
    pub fn standings(&self) -> Vec<StandingsEntry> {
        let mut table: Vec<StandingsEntry> = self
            .racers
            .iter()
            .map(|racer| StandingsEntry {
                racer_id: racer.id.clone(),
                racer_name: racer.name.clone(),
                points: scoring::tally(
                    self.results
                        .iter()
                        .filter(|entry| entry.racer_id == racer.id)
                        .map(|entry| entry.position),
                ),
            })
            .collect();

        table.sort_by(|a, b| b.points.cmp(&a.points));
        table
    }
}
