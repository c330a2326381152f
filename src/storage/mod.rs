//! Storage layer: the external collaborator that produces the engine's
//! snapshot and persists its outputs.

pub mod models;
pub mod queries;
pub mod schema;

pub use models::{AwardState, LeagueDump, TeamDump, WeekDump};
pub use schema::LeagueDatabase;
