//! League dump import.

use super::common::CommandContext;
use crate::cli::types::LeagueId;
use crate::storage::LeagueDump;
use crate::Result;
use std::path::Path;

/// Load a JSON league dump into the local database, replacing the league's
/// existing weeks.
pub fn handle_import(file: &Path, league_id: Option<LeagueId>, verbose: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let dump: LeagueDump = serde_json::from_str(&raw)?;

    let mut ctx = CommandContext::new(league_id)?;
    ctx.db.import_league(ctx.league_id, &dump)?;

    println!(
        "✓ Imported {} weeks and {} players into league {}",
        dump.weeks.len(),
        dump.players.len(),
        ctx.league_id
    );
    if verbose {
        for week in &dump.weeks {
            println!(
                "  {} (week {}): {} teams, {} matches",
                week.date,
                week.id,
                week.teams.len(),
                week.matches.len()
            );
        }
    }
    Ok(())
}
