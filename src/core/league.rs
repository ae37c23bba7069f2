//! League Aggregator
//!
//! Groups Season Ledgers and combines their standings. Aggregation is
//! keyed by the exact (racer id, racer name) pair, so racers registered
//! independently in two seasons stay separate entries even when the names
//! match.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::core::season::{opaque_id, RacerId, SeasonLedger, StandingsEntry};

opaque_id!(
    /// Opaque identity of a season within a league.
    SeasonId
);
opaque_id!(
    /// Opaque identity of a league.
    LeagueId
);

/// A season ledger together with the identity the league assigned to it.
#[derive(Debug)]
pub struct LeagueSeason {
    pub id: SeasonId,
    pub ledger: SeasonLedger,
}

/// An ordered collection of seasons whose standings can be aggregated.
///
/// Seasons are owned by the league once added; there is no removal
/// operation. Mutations must be serialized by the caller.
#[derive(Debug)]
pub struct League {
    id: LeagueId,
    name: String,
    seasons: Vec<LeagueSeason>,
    season_index: HashMap<SeasonId, usize>,
}

impl League {
    pub fn new(name: &str) -> Self {
        Self {
            id: LeagueId::generate(),
            name: name.to_string(),
            seasons: Vec::new(),
            season_index: HashMap::new(),
        }
    }

    pub fn id(&self) -> &LeagueId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Take ownership of a ledger and return the fresh season identity
    /// assigned to it. Addition order is preserved.
    pub fn add_season(&mut self, ledger: SeasonLedger) -> SeasonId {
        let id = SeasonId::generate();
        self.season_index.insert(id.clone(), self.seasons.len());
        self.seasons.push(LeagueSeason {
            id: id.clone(),
            ledger,
        });
        id
    }

    /// Seasons in addition order.
    pub fn seasons(&self) -> &[LeagueSeason] {
        &self.seasons
    }

    pub fn season(&self, id: &SeasonId) -> Option<&SeasonLedger> {
        self.season_index.get(id).map(|&i| &self.seasons[i].ledger)
    }

    pub fn season_mut(&mut self, id: &SeasonId) -> Option<&mut SeasonLedger> {
        self.season_index
            .get(id)
            .map(|&i| &mut self.seasons[i].ledger)
    }

    /// Combined standings across all seasons, descending by points.
    ///
    /// Per-season totals are summed keyed by the exact (racer id, name)
    /// pair; entries merge only when the pair is identical across seasons.
    /// The sort is stable, so tied entries keep first-encountered order
    /// across seasons in addition order.
    pub fn overall_standings(&self) -> Vec<StandingsEntry> {
        let mut table: Vec<StandingsEntry> = Vec::new();
        let mut index: HashMap<(RacerId, String), usize> = HashMap::new();

        for season in &self.seasons {
            for entry in season.ledger.standings() {
                let key = (entry.racer_id.clone(), entry.racer_name.clone());
                match index.get(&key) {
                    Some(&i) => table[i].points += entry.points,
                    None => {
                        index.insert(key, table.len());
                        table.push(entry);
                    }
                }
            }
        }

        table.sort_by(|a, b| b.points.cmp(&a.points));
        table
    }
}
