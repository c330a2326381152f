//! Match deduplication.
//!
//! The same physical match is reachable through its home team's
//! `matches_home` and its away team's `matches_away`. Everything downstream
//! (aggregates, standings, highlights) must count each match exactly once,
//! so the dedup contract lives here, in isolation, keyed by an explicit
//! seen-set.

use crate::cli::types::MatchId;
use crate::engine::snapshot::{MatchRecord, WeekSnapshot};
use std::collections::HashSet;

/// Collapse a week's redundant per-team match references into one flat list
/// of unique matches, in first-encounter order.
///
/// Match ids are only unique within one week's reachable set, so dedup is
/// always scoped to a single week.
pub fn unique_matches(week: &WeekSnapshot) -> Vec<&MatchRecord> {
    let mut seen: HashSet<MatchId> = HashSet::new();
    let mut matches = Vec::new();
    for team in &week.teams {
        for m in team.matches_home.iter().chain(team.matches_away.iter()) {
            if seen.insert(m.id) {
                matches.push(m);
            }
        }
    }
    matches
}
