//! Monthly award computation.

use super::common::CommandContext;
use crate::cli::types::{LeagueId, PlayerId, Scope};
use crate::engine::awards::{month_resume, AwardEntry};
use crate::engine::build_aggregates;
use crate::Result;
use std::collections::HashSet;

/// Compute and print the scope's six award lists.
pub fn handle_month_resume(
    league_id: Option<LeagueId>,
    scope: Scope,
    exclude: Vec<PlayerId>,
    as_json: bool,
) -> Result<()> {
    let ctx = CommandContext::new(league_id)?;
    let (weeks, players) = ctx.load_snapshot(&scope)?;

    let exclude: HashSet<PlayerId> = exclude.into_iter().collect();
    let aggregates = build_aggregates(&weeks, &players, &exclude);
    let resume = month_resume(&aggregates, weeks.len());

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resume)?);
        return Ok(());
    }

    print_category("Top scorer", &resume.scorer);
    print_category("Top assists", &resume.assists);
    print_category("MVP", &resume.mvp);
    print_category("LVP", &resume.lvp);
    print_category("Best defender", &resume.best_defender);
    print_category("Top pointer", &resume.top_pointer);
    Ok(())
}

fn print_category(title: &str, entries: &[AwardEntry]) {
    println!("{title}:");
    if entries.is_empty() {
        println!("  (no eligible players)");
        return;
    }
    for entry in entries {
        println!("  {}: {}", entry.name, entry.count);
    }
}
