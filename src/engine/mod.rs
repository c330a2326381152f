//! The season statistics, rankings, awards and streak engine.
//!
//! A pure, synchronous read -> compute -> report pipeline over an immutable
//! snapshot of weeks, teams, matches and players. Components, leaves first:
//! match dedup, the player aggregate fold, rankings, award selection,
//! position scoring, team standings/champion resolution, and the backward
//! streak reconstruction. No module here performs I/O; fetching the
//! snapshot and persisting results are the storage layer's job.

pub mod aggregate;
pub mod awards;
pub mod dedup;
pub mod highlights;
pub mod ranking;
pub mod scoring;
pub mod snapshot;
pub mod standings;
pub mod streaks;

pub use aggregate::{build_aggregates, PlayerAggregate};
pub use awards::{month_resume, AwardEntry, MonthResume};
pub use dedup::unique_matches;
pub use highlights::{week_highlights, WeekHighlights};
pub use ranking::{rank_by, Direction, RankingEntry};
pub use scoring::{best_of_positions, score_player, BestOfPositions, PositionScore};
pub use snapshot::{
    AssistEvent, GoalEvent, MatchRecord, MatchScore, PlayerInfo, TeamSnapshot, WeekSnapshot,
};
pub use standings::{resolve_champion, resolve_week, week_standings, ChampionResolution, TeamStanding};
pub use streaks::{reconstruct_streaks, StreakEntry, Streaks};
