//! Team standings and weekly champion resolution.

use crate::cli::types::{TeamId, WeekId};
use crate::engine::dedup::unique_matches;
use crate::engine::snapshot::WeekSnapshot;
use serde::Serialize;

/// League table row for one of a week's teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: TeamId,
    /// League points: 3 per win, 1 per draw.
    pub points: u32,
    /// Matches with a recorded result.
    pub matches: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_diff: i64,
}

impl TeamStanding {
    fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            points: 0,
            matches: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
        }
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.matches += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        // Recomputed from the totals after every match, not accumulated
        // as an independent counter.
        self.goal_diff = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.points += match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => 3,
            std::cmp::Ordering::Equal => 1,
            std::cmp::Ordering::Less => 0,
        };
    }
}

/// The outcome of resolving one week: a unique champion team, or none when
/// the tie-break cascade never resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionResolution {
    pub week_id: WeekId,
    pub champion: Option<TeamId>,
    pub standings: Vec<TeamStanding>,
}

/// Accumulate league points over a week's deduplicated, played matches.
///
/// Teams without a single played match still appear, zeroed, in team order.
pub fn week_standings(week: &WeekSnapshot) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> =
        week.teams.iter().map(|t| TeamStanding::new(t.id)).collect();

    for m in unique_matches(week) {
        let Some(score) = &m.result else {
            continue;
        };
        if let Some(home) = standings.iter_mut().find(|s| s.team_id == m.home_team_id) {
            home.record(score.home_goals, score.away_goals);
        }
        if let Some(away) = standings.iter_mut().find(|s| s.team_id == m.away_team_id) {
            away.record(score.away_goals, score.home_goals);
        }
    }
    standings
}

/// Resolve a unique weekly champion among the teams tied at maximum points.
///
/// Cascade: fewest matches played, then best goal difference, then most
/// goals scored. A tie that survives every criterion yields `None` - a
/// valid terminal state, not an error.
pub fn resolve_champion(standings: &[TeamStanding]) -> Option<TeamId> {
    let max_points = standings.iter().map(|s| s.points).max()?;
    let mut contenders: Vec<&TeamStanding> =
        standings.iter().filter(|s| s.points == max_points).collect();

    if contenders.len() > 1 {
        // Fewest matches rewards efficiency when team match-counts differ.
        if let Some(fewest) = contenders.iter().map(|s| s.matches).min() {
            contenders.retain(|s| s.matches == fewest);
        }
    }
    if contenders.len() > 1 {
        if let Some(best_diff) = contenders.iter().map(|s| s.goal_diff).max() {
            contenders.retain(|s| s.goal_diff == best_diff);
        }
    }
    if contenders.len() > 1 {
        if let Some(most_goals) = contenders.iter().map(|s| s.goals_for).max() {
            contenders.retain(|s| s.goals_for == most_goals);
        }
    }

    match contenders.as_slice() {
        [only] => Some(only.team_id),
        _ => None,
    }
}

/// Standings plus champion resolution for one week.
pub fn resolve_week(week: &WeekSnapshot) -> ChampionResolution {
    let standings = week_standings(week);
    let champion = resolve_champion(&standings);
    ChampionResolution {
        week_id: week.id,
        champion,
        standings,
    }
}

#[cfg(test)]
mod tests;
