//! Pelada Season Statistics Library
//!
//! Computation engine for a recurring pickup-football league: per-player
//! aggregate statistics, dense rankings, monthly awards, best-of-position
//! composite scores, weekly team standings with champion resolution, and
//! multi-week award streaks.
//!
//! ## Features
//!
//! - **Player Aggregates**: fold a scope's matches into one record per
//!   player (results, goals, assists, goals conceded, weekly averages)
//! - **Rankings**: dense, tie-sharing ranks over any aggregate field with
//!   minimum-participation gating
//! - **Monthly Awards**: tie-inclusive top-5 selection (capped at 9) for
//!   scorer, assists, MVP, LVP, best defender and top pointer
//! - **Best of Positions**: weighted composite scores per position
//! - **Champion Resolution**: weekly standings and a deterministic
//!   tie-break cascade
//! - **Streaks**: backward reconstruction of current award streaks
//! - **Local Storage**: SQLite snapshot source and result persistence
//!
//! ## Quick Start
//!
//! ```rust
//! use pelada::engine::{build_aggregates, month_resume};
//! use std::collections::{HashMap, HashSet};
//!
//! // An empty snapshot computes to empty award lists.
//! let aggregates = build_aggregates(&[], &HashMap::new(), &HashSet::new());
//! let resume = month_resume(&aggregates, 0);
//! assert!(resume.scorer.is_empty());
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export PELADA_LEAGUE_ID=1
//! ```

pub mod cli;
pub mod commands;
pub mod engine;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, MatchId, Month, PlayerId, Position, Scope, TeamId, WeekId};
pub use engine::{BestOfPositions, MonthResume, Streaks};
pub use error::{PeladaError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "PELADA_LEAGUE_ID";
