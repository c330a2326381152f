//! Streak reconstruction and persistence.

use super::common::CommandContext;
use crate::cli::types::{LeagueId, Scope};
use crate::engine::streaks::{reconstruct_streaks, StreakEntry};
use crate::Result;

/// Reconstruct current award streaks over the league's full history and
/// persist them.
pub fn handle_streaks(league_id: Option<LeagueId>, as_json: bool) -> Result<()> {
    let mut ctx = CommandContext::new(league_id)?;
    let weeks = ctx.db.load_weeks(ctx.league_id, &Scope::all())?;

    let streaks = reconstruct_streaks(&weeks);
    ctx.db.persist_streaks(&streaks)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&streaks)?);
        return Ok(());
    }

    print_category("Week champion", &streaks.week_champion);
    print_category("Week striker", &streaks.week_striker);
    print_category("Week top assist", &streaks.week_top_assist);
    Ok(())
}

fn print_category(title: &str, entries: &[StreakEntry]) {
    println!("{title}:");
    if entries.is_empty() {
        println!("  (no current streaks)");
        return;
    }
    for entry in entries {
        let weeks = if entry.streak_count == 1 { "week" } else { "weeks" };
        println!("  player {}: {} {weeks}", entry.player_id, entry.streak_count);
    }
}
