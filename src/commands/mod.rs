//! Command implementations for the pelada CLI

pub mod best_of_positions;
pub mod champions;
pub mod common;
pub mod import_data;
pub mod month_resume;
pub mod streaks;

use crate::cli::types::LeagueId;
use crate::error::{PeladaError, Result};

/// Resolve the league id from the CLI flag or the `PELADA_LEAGUE_ID`
/// environment variable.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(crate::LEAGUE_ID_ENV_VAR) {
        Ok(raw) => raw.parse(),
        Err(_) => Err(PeladaError::MissingLeagueId {
            env_var: crate::LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}
