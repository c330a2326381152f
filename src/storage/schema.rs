//! Database schema and connection management

use anyhow::{anyhow, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::PathBuf;

/// Database connection manager for league data
pub struct LeagueDatabase {
    pub(crate) conn: Connection,
}

impl LeagueDatabase {
    /// Create a new database connection and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;

        // Ensure the data directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database for tests and dry runs.
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or_else(|| anyhow!("Could not determine data directory"))?;
        Ok(data_dir.join("pelada").join("league.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                position TEXT NOT NULL,
                is_champion INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS weeks (
                week_id INTEGER PRIMARY KEY,
                league_id INTEGER NOT NULL,
                date TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                team_id INTEGER PRIMARY KEY,
                week_id INTEGER NOT NULL,
                champion INTEGER NOT NULL DEFAULT 0,
                points INTEGER NOT NULL DEFAULT 0,
                FOREIGN KEY (week_id) REFERENCES weeks(week_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS team_players (
                team_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                PRIMARY KEY (team_id, player_id),
                FOREIGN KEY (team_id) REFERENCES teams(team_id)
            )",
            [],
        )?;

        // Match ids are only unique within one week's reachable set, so the
        // key is (week_id, match_id) and event rows carry both.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                week_id INTEGER NOT NULL,
                match_id INTEGER NOT NULL,
                home_team_id INTEGER NOT NULL,
                away_team_id INTEGER NOT NULL,
                home_goals INTEGER,
                away_goals INTEGER,
                PRIMARY KEY (week_id, match_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS goals (
                week_id INTEGER NOT NULL,
                match_id INTEGER NOT NULL,
                player_id INTEGER,
                own_goal_player_id INTEGER,
                goals INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS assists (
                week_id INTEGER NOT NULL,
                match_id INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                assists INTEGER NOT NULL
            )",
            [],
        )?;

        // One row per player; streak writes must leave the month_* columns
        // untouched.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS award_state (
                player_id INTEGER PRIMARY KEY,
                month_scorer INTEGER NOT NULL DEFAULT 0,
                month_assist INTEGER NOT NULL DEFAULT 0,
                month_mvp INTEGER NOT NULL DEFAULT 0,
                week_champion_streak INTEGER NOT NULL DEFAULT 0,
                week_striker_streak INTEGER NOT NULL DEFAULT 0,
                week_top_assist_streak INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        // Indexes for the snapshot load path
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_weeks_league_date
             ON weeks(league_id, date)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_teams_week ON teams(week_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_week ON matches(week_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_goals_match ON goals(week_id, match_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_assists_match ON assists(week_id, match_id)",
            [],
        )?;

        Ok(())
    }
}
