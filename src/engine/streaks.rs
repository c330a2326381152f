//! Current-streak reconstruction.
//!
//! Walks weeks most-recent-first and reconstructs, per award category, each
//! player's currently-live consecutive-week streak. The pass is inherently
//! sequential: every week's transition depends on the (live, frozen) state
//! produced by the week after it, so the fold threads an explicit state
//! pair instead of sharing mutable maps across callbacks.

use crate::cli::types::PlayerId;
use crate::engine::highlights::week_highlights;
use crate::engine::snapshot::WeekSnapshot;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A player's reconstructed streak for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakEntry {
    pub player_id: PlayerId,
    pub streak_count: u32,
}

/// Current streaks per award category as of the most recent week.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Streaks {
    pub week_champion: Vec<StreakEntry>,
    pub week_striker: Vec<StreakEntry>,
    pub week_top_assist: Vec<StreakEntry>,
}

/// Per-category reconstruction state.
///
/// `live` holds players whose streak still reaches the week currently being
/// scanned; `frozen` holds final counts for players whose streak broke.
/// Once frozen, a count never changes for the rest of the run.
#[derive(Debug, Default)]
struct CategoryState {
    live: HashMap<PlayerId, u32>,
    frozen: HashMap<PlayerId, u32>,
}

impl CategoryState {
    /// Seed from the most recent week: every highlighted player opens a
    /// streak of 1. Only this step may add players to `live`; a streak that
    /// does not include the most recent week is not a current streak.
    fn seed(&mut self, highlight: &HashSet<PlayerId>) {
        for &player_id in highlight {
            self.live.insert(player_id, 1);
        }
    }

    /// Transition for one older week: live players present in the highlight
    /// extend their streak backward; the rest freeze at their count.
    fn advance(&mut self, highlight: &HashSet<PlayerId>) {
        let live = std::mem::take(&mut self.live);
        for (player_id, count) in live {
            if highlight.contains(&player_id) {
                self.live.insert(player_id, count + 1);
            } else {
                self.frozen.insert(player_id, count);
            }
        }
    }

    /// Freeze whatever survived the scan: an unbroken streak running
    /// through the oldest scanned week keeps its accumulated count.
    fn finish(&mut self) {
        self.frozen.extend(std::mem::take(&mut self.live));
    }

    fn entries(&self) -> Vec<StreakEntry> {
        let mut entries: Vec<StreakEntry> = self
            .frozen
            .iter()
            .map(|(&player_id, &streak_count)| StreakEntry {
                player_id,
                streak_count,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.streak_count
                .cmp(&a.streak_count)
                .then(a.player_id.cmp(&b.player_id))
        });
        entries
    }
}

/// Reconstruct current streaks for all three categories.
///
/// Weeks may arrive in any order; the scan itself runs in strict descending
/// date order. An empty week list yields empty streak lists.
pub fn reconstruct_streaks(weeks: &[WeekSnapshot]) -> Streaks {
    let mut ordered: Vec<&WeekSnapshot> = weeks.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    let mut champion = CategoryState::default();
    let mut striker = CategoryState::default();
    let mut top_assist = CategoryState::default();

    let mut scan = ordered.into_iter();
    if let Some(most_recent) = scan.next() {
        let h = week_highlights(most_recent);
        champion.seed(&h.champions);
        striker.seed(&h.strikers);
        top_assist.seed(&h.top_assists);
    }

    for week in scan {
        // Nothing older can change the result once every streak has broken.
        if champion.live.is_empty() && striker.live.is_empty() && top_assist.live.is_empty() {
            break;
        }
        let h = week_highlights(week);
        champion.advance(&h.champions);
        striker.advance(&h.strikers);
        top_assist.advance(&h.top_assists);
    }

    champion.finish();
    striker.finish();
    top_assist.finish();

    Streaks {
        week_champion: champion.entries(),
        week_striker: striker.entries(),
        week_top_assist: top_assist.entries(),
    }
}

#[cfg(test)]
mod tests;
