//! Immutable data-transfer shapes the engine computes over.
//!
//! A computation run receives one consistent snapshot of weeks, teams,
//! matches and player identities, fetched once by the storage layer. The
//! engine never assumes anything about how the snapshot was produced and
//! never mutates it; every run recomputes from the full eligible data set.

use crate::cli::types::{MatchId, PlayerId, Position, TeamId, WeekId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Player identity as resolved by storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
}

/// Final score of a played match. Absent on a `MatchRecord` when the match
/// has not been played yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub home_goals: u32,
    pub away_goals: u32,
}

/// One goal entry, batched by count.
///
/// Carries either a scoring `player_id` (credits the scorer) or an
/// `own_goal_player_id` (counts against the own-goal scorer only, never as a
/// scorer credit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub own_goal_player_id: Option<PlayerId>,
    pub goals: u32,
}

/// One assist entry, batched by count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistEvent {
    pub player_id: PlayerId,
    pub assists: u32,
}

/// A match between two of a week's teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchScore>,
    #[serde(default)]
    pub goals: Vec<GoalEvent>,
    #[serde(default)]
    pub assists: Vec<AssistEvent>,
}

/// A team fielded on one week, with its match references.
///
/// Every match is attached to BOTH of its teams (`matches_home` on the home
/// side, `matches_away` on the away side), mirroring how the data source
/// exposes it. Consumers must deduplicate by match id before counting
/// anything; see [`crate::engine::dedup::unique_matches`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub id: TeamId,
    /// Output of the champion resolver, persisted back by storage.
    #[serde(default)]
    pub champion: bool,
    /// League points, also a resolver output.
    #[serde(default)]
    pub points: u32,
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub matches_home: Vec<MatchRecord>,
    #[serde(default)]
    pub matches_away: Vec<MatchRecord>,
}

/// One calendar session of pickup football: a date plus the teams (and,
/// through them, the matches) played that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSnapshot {
    pub id: WeekId,
    pub date: NaiveDate,
    pub teams: Vec<TeamSnapshot>,
}

impl WeekSnapshot {
    /// Roster lookup for this week's teams, by team id.
    pub fn team(&self, id: TeamId) -> Option<&TeamSnapshot> {
        self.teams.iter().find(|t| t.id == id)
    }
}
