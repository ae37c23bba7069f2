//! Raceboard CLI - Championship standings from recorded race results

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use raceboard::core::league::League;
use raceboard::core::scoring::{base_points, STREAK_BONUS};
use raceboard::core::season::{RaceId, RacerId, SeasonLedger, StandingsEntry};

#[derive(Parser)]
#[command(name = "raceboard")]
#[command(author, version, about = "Racing standings CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute standings from a results CSV
    Standings {
        /// Path to the results CSV. Columns: race, racer, position;
        /// optional: ai (true/false), season (groups rows into seasons)
        #[arg(short, long)]
        file: PathBuf,

        /// League name shown in the output
        #[arg(long, default_value = "Racing League")]
        league: String,

        /// Emit standings as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the points table and streak bonus
    Points,
}

/// One row of a results CSV.
///
/// Rows are replayed in file order, so the file order is the result
/// recording order the streak bonus is computed over.
#[derive(Debug, Deserialize)]
struct ResultRow {
    race: String,
    racer: String,
    position: i32,
    #[serde(default)]
    ai: bool,
    #[serde(default)]
    season: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Standings { file, league, json } => cmd_standings(&file, &league, json),
        Commands::Points => {
            cmd_points();
            Ok(())
        }
    }
}

fn cmd_standings(path: &Path, league_name: &str, json: bool) -> Result<()> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let league = read_league(file, league_name)?;

    if json {
        let per_season: Vec<Vec<StandingsEntry>> = league
            .seasons()
            .iter()
            .map(|season| season.ledger.standings())
            .collect();
        let payload = serde_json::json!({
            "league": league.name(),
            "seasons": per_season,
            "overall": league.overall_standings(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", league.name().bold().underline());
    for (i, season) in league.seasons().iter().enumerate() {
        println!();
        println!("{}", format!("Season {}", i + 1).bold());
        print_standings(&season.ledger.standings());
    }

    if league.seasons().len() > 1 {
        println!();
        println!("{}", "Overall".bold());
        print_standings(&league.overall_standings());
    }

    Ok(())
}

fn print_standings(standings: &[StandingsEntry]) {
    if standings.is_empty() {
        println!("{}", "  (no racers)".dimmed());
        return;
    }

    for (rank, entry) in standings.iter().enumerate() {
        let line = format!("{:>3}  {:<30} {:>5}", rank + 1, entry.racer_name, entry.points);
        if rank == 0 {
            println!("{}", line.yellow().bold());
        } else {
            println!("{}", line);
        }
    }
}

fn cmd_points() {
    println!("{}", "Position  Points".bold());
    for position in 1..=10 {
        println!("{:>8}  {:>6}", position, base_points(position));
    }
    println!();
    println!(
        "Win streak bonus: +{} for each win directly following another win",
        STREAK_BONUS
    );
}

/// Build a league from a results CSV.
///
/// Races and racers are registered on first appearance within their season,
/// so row order doubles as registration and result insertion order. Each
/// season registers its own racers, matching the per-season identity scheme
/// of the ledger.
fn read_league<R: Read>(reader: R, league_name: &str) -> Result<League> {
    struct SeasonBuild {
        name: String,
        ledger: SeasonLedger,
        races: HashMap<String, RaceId>,
        racers: HashMap<String, RacerId>,
    }

    let mut rdr = csv::Reader::from_reader(reader);
    let mut seasons: Vec<SeasonBuild> = Vec::new();

    for (line, row) in rdr.deserialize::<ResultRow>().enumerate() {
        let row = row.with_context(|| format!("Failed to parse CSV record {}", line + 1))?;
        let season_name = row.season.unwrap_or_else(|| "Season 1".to_string());

        let idx = match seasons.iter().position(|s| s.name == season_name) {
            Some(i) => i,
            None => {
                seasons.push(SeasonBuild {
                    name: season_name,
                    ledger: SeasonLedger::new(),
                    races: HashMap::new(),
                    racers: HashMap::new(),
                });
                seasons.len() - 1
            }
        };
        let build = &mut seasons[idx];

        let race_id = match build.races.get(&row.race) {
            Some(id) => id.clone(),
            None => {
                let id = build.ledger.add_race(&row.race);
                build.races.insert(row.race, id.clone());
                id
            }
        };
        let racer_id = match build.racers.get(&row.racer) {
            Some(id) => id.clone(),
            None => {
                let id = build.ledger.add_racer(&row.racer, row.ai);
                build.racers.insert(row.racer, id.clone());
                id
            }
        };

        build.ledger.record_result(race_id, racer_id, row.position);
    }

    let mut league = League::new(league_name);
    for build in seasons {
        league.add_season(build.ledger);
    }
    Ok(league)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_league_single_season() {
        let csv = "\
race,racer,position
Monaco,Driver A,1
Spa,Driver A,1
Monaco,Driver B,2
Spa,Driver B,3
";
        let league = read_league(csv.as_bytes(), "Test League").unwrap();
        assert_eq!(league.seasons().len(), 1);

        let standings = league.seasons()[0].ledger.standings();
        assert_eq!(standings[0].racer_name, "Driver A");
        assert_eq!(standings[0].points, 51); // 25 + (25 + 1)
        assert_eq!(standings[1].points, 33); // 18 + 15
    }

    #[test]
    fn test_read_league_ai_column() {
        let csv = "\
race,racer,position,ai
Monaco,Bot One,1,true
Monaco,Driver A,2,false
";
        let league = read_league(csv.as_bytes(), "Test League").unwrap();
        let standings = league.seasons()[0].ledger.standings();
        assert_eq!(standings[0].racer_name, "Bot One [AI]");
        assert_eq!(standings[1].racer_name, "Driver A");
    }

    #[test]
    fn test_read_league_multiple_seasons() {
        let csv = "\
race,racer,position,season
Monaco,Driver A,1,2023
Spa,Driver A,2,2023
Monza,Driver A,1,2024
";
        let league = read_league(csv.as_bytes(), "Test League").unwrap();
        assert_eq!(league.seasons().len(), 2);

        // The two seasons register Driver A independently, so the overall
        // standings keep two entries.
        let overall = league.overall_standings();
        assert_eq!(overall.len(), 2);
        assert_eq!(overall[0].points, 43);
        assert_eq!(overall[1].points, 25);
    }

    #[test]
    fn test_read_league_bad_row() {
        let csv = "race,racer,position\nMonaco,Driver A,not-a-number\n";
        assert!(read_league(csv.as_bytes(), "Test League").is_err());
    }
}
