//! CLI argument definitions and parsing structures.

use super::types::{LeagueId, Month, PlayerId, Scope};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Common scope/filter arguments shared between report commands.
#[derive(Debug, Args)]
pub struct ScopeFilters {
    /// League ID (or set `PELADA_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Restrict the computation to one calendar month (`YYYY-MM`).
    #[clap(long, short, conflicts_with_all = ["from", "to"])]
    pub month: Option<Month>,

    /// First week date to include (`YYYY-MM-DD`).
    #[clap(long)]
    pub from: Option<NaiveDate>,

    /// Last week date to include (`YYYY-MM-DD`).
    #[clap(long)]
    pub to: Option<NaiveDate>,

    /// Player IDs to leave out of the computation entirely - repeatable:
    /// `-x 12 -x 40`.
    #[clap(long = "exclude", short = 'x')]
    pub exclude: Vec<PlayerId>,
}

impl ScopeFilters {
    /// Resolve the requested date window.
    pub fn scope(&self) -> Scope {
        match self.month {
            Some(month) => Scope::month(month),
            None => Scope::between(self.from, self.to),
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "pelada", about = "Pickup-football season statistics CLI")]
pub struct Pelada {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a league dump (players + weeks) into the local database.
    ///
    /// Replaces the league's existing weeks wholesale; players are upserted.
    Import {
        /// Path to the JSON dump.
        file: PathBuf,

        /// League ID (or set `PELADA_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Print per-week counts when done.
        #[clap(long)]
        verbose: bool,
    },

    /// Compute the month's award lists (scorer, assists, MVP, LVP,
    /// best defender, top pointer).
    MonthResume {
        #[clap(flatten)]
        filters: ScopeFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compute the weighted best-of-position leaderboards.
    BestOfPositions {
        #[clap(flatten)]
        filters: ScopeFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Recompute team standings and the weekly champion for every week in
    /// scope, persisting champion flags.
    ResolveChampions {
        #[clap(flatten)]
        filters: ScopeFilters,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Reconstruct current award streaks over the league's full history and
    /// persist them.
    Streaks {
        /// League ID (or set `PELADA_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
