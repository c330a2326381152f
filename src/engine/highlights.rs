//! Per-week highlight sets.
//!
//! A highlight set is the group of player ids satisfying one of the week's
//! top-category conditions, ties included: the champion team's roster, the
//! scorers tied at the week's maximum goals, and the providers tied at the
//! week's maximum assists. These sets feed the streak reconstructor.

use crate::cli::types::PlayerId;
use crate::engine::dedup::unique_matches;
use crate::engine::snapshot::WeekSnapshot;
use std::collections::{HashMap, HashSet};

/// The three highlight sets of one week.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekHighlights {
    /// Roster of the team(s) flagged champion.
    pub champions: HashSet<PlayerId>,
    /// All players tied at the week's maximum goal count.
    pub strikers: HashSet<PlayerId>,
    /// All players tied at the week's maximum assist count.
    pub top_assists: HashSet<PlayerId>,
}

fn tied_at_max(totals: &HashMap<PlayerId, u32>) -> HashSet<PlayerId> {
    let max = totals.values().copied().max().unwrap_or(0);
    if max == 0 {
        return HashSet::new();
    }
    totals
        .iter()
        .filter(|(_, &count)| count == max)
        .map(|(&player_id, _)| player_id)
        .collect()
}

/// Compute a week's highlight sets from its deduplicated matches and the
/// persisted champion flags.
pub fn week_highlights(week: &WeekSnapshot) -> WeekHighlights {
    let mut champions = HashSet::new();
    for team in week.teams.iter().filter(|t| t.champion) {
        champions.extend(team.player_ids.iter().copied());
    }

    let mut goals: HashMap<PlayerId, u32> = HashMap::new();
    let mut assists: HashMap<PlayerId, u32> = HashMap::new();
    for m in unique_matches(week) {
        for g in &m.goals {
            // Own goals never count toward the top-scorer highlight.
            if let Some(player_id) = g.player_id {
                *goals.entry(player_id).or_default() += g.goals;
            }
        }
        for a in &m.assists {
            *assists.entry(a.player_id).or_default() += a.assists;
        }
    }

    WeekHighlights {
        champions,
        strikers: tied_at_max(&goals),
        top_assists: tied_at_max(&assists),
    }
}
