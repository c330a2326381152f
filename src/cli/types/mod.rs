//! Type definitions for CLI arguments and domain identifiers.

pub mod ids;
pub mod position;
pub mod scope;

pub use ids::{LeagueId, MatchId, PlayerId, TeamId, WeekId};
pub use position::Position;
pub use scope::{Month, Scope};
