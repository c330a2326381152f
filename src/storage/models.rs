//! Data models for the storage layer

use crate::cli::types::{PlayerId, TeamId, WeekId};
use crate::engine::snapshot::{MatchRecord, PlayerInfo};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A league dump as produced by the recording application: player
/// identities plus weeks in the flat wire shape (matches listed once per
/// week). The redundant per-team match attachment is introduced at load
/// time, not in this format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueDump {
    pub players: Vec<PlayerInfo>,
    pub weeks: Vec<WeekDump>,
}

/// One week of the dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDump {
    pub id: WeekId,
    pub date: NaiveDate,
    pub teams: Vec<TeamDump>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

/// One team of a dumped week. Champion flag and points may already be
/// present when the dump was taken after a resolver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDump {
    pub id: TeamId,
    #[serde(default)]
    pub champion: bool,
    #[serde(default)]
    pub points: u32,
    pub player_ids: Vec<PlayerId>,
}

/// Per-player award bookkeeping row.
///
/// Streak persistence rewrites only the three `*_streak` columns; the
/// monthly columns belong to the monthly award path and survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardState {
    pub player_id: PlayerId,
    pub month_scorer: u32,
    pub month_assist: u32,
    pub month_mvp: u32,
    pub week_champion_streak: u32,
    pub week_striker_streak: u32,
    pub week_top_assist_streak: u32,
}
