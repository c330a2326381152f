//! Weekly champion resolution and persistence.

use super::common::CommandContext;
use crate::cli::types::{LeagueId, Scope};
use crate::engine::standings::resolve_week;
use crate::Result;

/// Resolve and persist the champion of every week in scope.
pub fn handle_resolve_champions(
    league_id: Option<LeagueId>,
    scope: Scope,
    as_json: bool,
) -> Result<()> {
    let mut ctx = CommandContext::new(league_id)?;
    let weeks = ctx.db.load_weeks(ctx.league_id, &scope)?;

    let mut resolutions = Vec::with_capacity(weeks.len());
    for week in &weeks {
        let resolution = resolve_week(week);
        ctx.db.persist_resolution(week, &resolution)?;
        resolutions.push(resolution);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resolutions)?);
        return Ok(());
    }

    if weeks.is_empty() {
        println!("No weeks in scope.");
        return Ok(());
    }
    for (week, resolution) in weeks.iter().zip(&resolutions) {
        match resolution.champion {
            Some(team_id) => println!("✓ {}: champion is team {}", week.date, team_id),
            None => println!("✓ {}: no champion (unresolved tie)", week.date),
        }
    }
    Ok(())
}
