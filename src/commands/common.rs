//! Common utilities shared across commands.

use super::resolve_league_id;
use crate::cli::types::{LeagueId, PlayerId, Scope};
use crate::engine::snapshot::{PlayerInfo, WeekSnapshot};
use crate::storage::LeagueDatabase;
use crate::Result;
use std::collections::HashMap;

/// Context containing the resources every command needs.
pub struct CommandContext {
    pub league_id: LeagueId,
    pub db: LeagueDatabase,
}

impl CommandContext {
    /// Resolve the league and open the database.
    pub fn new(league_id: Option<LeagueId>) -> Result<Self> {
        let league_id = resolve_league_id(league_id)?;
        let db = LeagueDatabase::new()?;
        Ok(Self { league_id, db })
    }

    /// Fetch the computation snapshot: the scope's weeks (date ascending)
    /// plus every known player identity.
    pub fn load_snapshot(
        &self,
        scope: &Scope,
    ) -> Result<(Vec<WeekSnapshot>, HashMap<PlayerId, PlayerInfo>)> {
        let weeks = self.db.load_weeks(self.league_id, scope)?;
        let players = self.db.load_players()?;
        Ok((weeks, players))
    }
}
