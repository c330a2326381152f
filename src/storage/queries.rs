//! Database query operations: snapshot loads and result persistence.

use super::{models::*, schema::LeagueDatabase};
use crate::cli::types::{LeagueId, MatchId, PlayerId, Position, Scope, TeamId, WeekId};
use crate::engine::snapshot::{
    AssistEvent, GoalEvent, MatchRecord, MatchScore, PlayerInfo, TeamSnapshot, WeekSnapshot,
};
use crate::engine::standings::ChampionResolution;
use crate::engine::streaks::Streaks;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};
use std::collections::HashMap;

impl LeagueDatabase {
    /// Insert or update a player's identity, preserving the champion flag.
    pub fn upsert_player(&mut self, player: &PlayerInfo) -> Result<()> {
        self.conn.execute(
            "INSERT INTO players (player_id, name, position)
             VALUES (?, ?, ?)
             ON CONFLICT(player_id) DO UPDATE SET
                 name = excluded.name,
                 position = excluded.position",
            params![player.id.as_u64(), player.name, player.position.code()],
        )?;
        Ok(())
    }

    /// Replace a league's weeks with the dump's contents and upsert its
    /// players, in one transaction. A failed import leaves the previous
    /// state fully intact.
    pub fn import_league(&mut self, league_id: LeagueId, dump: &LeagueDump) -> Result<()> {
        let tx = self.conn.transaction()?;

        for table in ["goals", "assists", "matches", "team_players", "teams"] {
            let sql = if table == "team_players" {
                "DELETE FROM team_players WHERE team_id IN (
                     SELECT team_id FROM teams WHERE week_id IN (
                         SELECT week_id FROM weeks WHERE league_id = ?))"
                    .to_string()
            } else {
                format!(
                    "DELETE FROM {table} WHERE week_id IN (
                         SELECT week_id FROM weeks WHERE league_id = ?)"
                )
            };
            tx.execute(&sql, params![league_id.as_u32()])?;
        }
        tx.execute(
            "DELETE FROM weeks WHERE league_id = ?",
            params![league_id.as_u32()],
        )?;

        for player in &dump.players {
            tx.execute(
                "INSERT INTO players (player_id, name, position)
                 VALUES (?, ?, ?)
                 ON CONFLICT(player_id) DO UPDATE SET
                     name = excluded.name,
                     position = excluded.position",
                params![player.id.as_u64(), player.name, player.position.code()],
            )?;
        }

        for week in &dump.weeks {
            tx.execute(
                "INSERT INTO weeks (week_id, league_id, date) VALUES (?, ?, ?)",
                params![
                    week.id.as_u64(),
                    league_id.as_u32(),
                    week.date.to_string()
                ],
            )?;
            for team in &week.teams {
                tx.execute(
                    "INSERT INTO teams (team_id, week_id, champion, points)
                     VALUES (?, ?, ?, ?)",
                    params![
                        team.id.as_u64(),
                        week.id.as_u64(),
                        team.champion,
                        team.points
                    ],
                )?;
                for player_id in &team.player_ids {
                    tx.execute(
                        "INSERT OR IGNORE INTO team_players (team_id, player_id)
                         VALUES (?, ?)",
                        params![team.id.as_u64(), player_id.as_u64()],
                    )?;
                }
            }
            for m in &week.matches {
                tx.execute(
                    "INSERT INTO matches
                         (week_id, match_id, home_team_id, away_team_id, home_goals, away_goals)
                     VALUES (?, ?, ?, ?, ?, ?)",
                    params![
                        week.id.as_u64(),
                        m.id.as_u64(),
                        m.home_team_id.as_u64(),
                        m.away_team_id.as_u64(),
                        m.result.map(|r| r.home_goals),
                        m.result.map(|r| r.away_goals),
                    ],
                )?;
                for g in &m.goals {
                    tx.execute(
                        "INSERT INTO goals
                             (week_id, match_id, player_id, own_goal_player_id, goals)
                         VALUES (?, ?, ?, ?, ?)",
                        params![
                            week.id.as_u64(),
                            m.id.as_u64(),
                            g.player_id.map(|p| p.as_u64()),
                            g.own_goal_player_id.map(|p| p.as_u64()),
                            g.goals
                        ],
                    )?;
                }
                for a in &m.assists {
                    tx.execute(
                        "INSERT INTO assists (week_id, match_id, player_id, assists)
                         VALUES (?, ?, ?, ?)",
                        params![
                            week.id.as_u64(),
                            m.id.as_u64(),
                            a.player_id.as_u64(),
                            a.assists
                        ],
                    )?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// All known player identities, keyed by id.
    pub fn load_players(&self) -> Result<HashMap<PlayerId, PlayerInfo>> {
        let mut stmt = self
            .conn
            .prepare("SELECT player_id, name, position FROM players")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, u64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut players = HashMap::new();
        for row in rows {
            let (id, name, position) = row?;
            let position: Position = position
                .parse()
                .with_context(|| format!("player {id} has an unknown position"))?;
            players.insert(
                PlayerId::new(id),
                PlayerInfo {
                    id: PlayerId::new(id),
                    name,
                    position,
                },
            );
        }
        Ok(players)
    }

    /// Load a league's weeks inside `scope`, ordered by date ascending.
    ///
    /// Every match is attached to BOTH of its teams (home side's
    /// `matches_home`, away side's `matches_away`), reproducing the
    /// redundant reachability the engine's deduplicator expects.
    pub fn load_weeks(&self, league_id: LeagueId, scope: &Scope) -> Result<Vec<WeekSnapshot>> {
        let mut stmt = self.conn.prepare(
            "SELECT week_id, date FROM weeks WHERE league_id = ? ORDER BY date, week_id",
        )?;
        let rows = stmt.query_map(params![league_id.as_u32()], |row| {
            Ok((row.get::<_, u64>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut weeks = Vec::new();
        for row in rows {
            let (week_id, date) = row?;
            let date: NaiveDate = date
                .parse()
                .with_context(|| format!("week {week_id} has an unparseable date"))?;
            if !scope.contains(date) {
                continue;
            }
            weeks.push(self.load_week(WeekId::new(week_id), date)?);
        }
        Ok(weeks)
    }

    fn load_week(&self, week_id: WeekId, date: NaiveDate) -> Result<WeekSnapshot> {
        let mut teams = self.load_week_teams(week_id)?;
        let matches = self.load_week_matches(week_id)?;

        for m in &matches {
            for team in teams.iter_mut() {
                if team.id == m.home_team_id {
                    team.matches_home.push(m.clone());
                } else if team.id == m.away_team_id {
                    team.matches_away.push(m.clone());
                }
            }
        }

        Ok(WeekSnapshot {
            id: week_id,
            date,
            teams,
        })
    }

    fn load_week_teams(&self, week_id: WeekId) -> Result<Vec<TeamSnapshot>> {
        let mut stmt = self.conn.prepare(
            "SELECT team_id, champion, points FROM teams WHERE week_id = ? ORDER BY team_id",
        )?;
        let rows = stmt.query_map(params![week_id.as_u64()], |row| {
            Ok((
                row.get::<_, u64>(0)?,
                row.get::<_, bool>(1)?,
                row.get::<_, u32>(2)?,
            ))
        })?;

        let mut teams = Vec::new();
        for row in rows {
            let (team_id, champion, points) = row?;
            let mut roster_stmt = self.conn.prepare(
                "SELECT player_id FROM team_players WHERE team_id = ? ORDER BY player_id",
            )?;
            let player_ids = roster_stmt
                .query_map(params![team_id], |row| row.get::<_, u64>(0))?
                .collect::<rusqlite::Result<Vec<u64>>>()?;

            teams.push(TeamSnapshot {
                id: TeamId::new(team_id),
                champion,
                points,
                player_ids: player_ids.into_iter().map(PlayerId::new).collect(),
                matches_home: vec![],
                matches_away: vec![],
            });
        }
        Ok(teams)
    }

    fn load_week_matches(&self, week_id: WeekId) -> Result<Vec<MatchRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT match_id, home_team_id, away_team_id, home_goals, away_goals
             FROM matches WHERE week_id = ? ORDER BY match_id",
        )?;
        let rows = stmt.query_map(params![week_id.as_u64()], |row| {
            Ok((
                row.get::<_, u64>(0)?,
                row.get::<_, u64>(1)?,
                row.get::<_, u64>(2)?,
                row.get::<_, Option<u32>>(3)?,
                row.get::<_, Option<u32>>(4)?,
            ))
        })?;

        let mut matches = Vec::new();
        for row in rows {
            let (match_id, home_team_id, away_team_id, home_goals, away_goals) = row?;
            let result = match (home_goals, away_goals) {
                (Some(home_goals), Some(away_goals)) => Some(MatchScore {
                    home_goals,
                    away_goals,
                }),
                _ => None,
            };

            let mut goals_stmt = self.conn.prepare(
                "SELECT player_id, own_goal_player_id, goals
                 FROM goals WHERE week_id = ? AND match_id = ?",
            )?;
            let goals = goals_stmt
                .query_map(params![week_id.as_u64(), match_id], |row| {
                    Ok(GoalEvent {
                        player_id: row.get::<_, Option<u64>>(0)?.map(PlayerId::new),
                        own_goal_player_id: row.get::<_, Option<u64>>(1)?.map(PlayerId::new),
                        goals: row.get(2)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<GoalEvent>>>()?;

            let mut assists_stmt = self.conn.prepare(
                "SELECT player_id, assists FROM assists WHERE week_id = ? AND match_id = ?",
            )?;
            let assists = assists_stmt
                .query_map(params![week_id.as_u64(), match_id], |row| {
                    Ok(AssistEvent {
                        player_id: PlayerId::new(row.get(0)?),
                        assists: row.get(1)?,
                    })
                })?
                .collect::<rusqlite::Result<Vec<AssistEvent>>>()?;

            matches.push(MatchRecord {
                id: MatchId::new(match_id),
                home_team_id: TeamId::new(home_team_id),
                away_team_id: TeamId::new(away_team_id),
                result,
                goals,
                assists,
            });
        }
        Ok(matches)
    }

    /// Persist a week's champion resolution: team points + champion flags,
    /// and the `is_champion` flag of every player rostered that week.
    /// Recomputing and persisting again yields the same stored state.
    pub fn persist_resolution(
        &mut self,
        week: &WeekSnapshot,
        resolution: &ChampionResolution,
    ) -> Result<()> {
        let tx = self.conn.transaction()?;

        for standing in &resolution.standings {
            tx.execute(
                "UPDATE teams SET points = ?, champion = ? WHERE team_id = ?",
                params![
                    standing.points,
                    Some(standing.team_id) == resolution.champion,
                    standing.team_id.as_u64()
                ],
            )?;
        }

        for team in &week.teams {
            let is_champion = Some(team.id) == resolution.champion;
            for player_id in &team.player_ids {
                tx.execute(
                    "UPDATE players SET is_champion = ? WHERE player_id = ?",
                    params![is_champion, player_id.as_u64()],
                )?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Persist reconstructed streaks, merging non-destructively: only the
    /// three streak columns are rewritten; monthly award fields survive.
    pub fn persist_streaks(&mut self, streaks: &Streaks) -> Result<()> {
        let tx = self.conn.transaction()?;

        // The write replaces streak state wholesale: anyone without a
        // current streak drops back to zero.
        tx.execute(
            "UPDATE award_state SET
                 week_champion_streak = 0,
                 week_striker_streak = 0,
                 week_top_assist_streak = 0",
            [],
        )?;

        for (column, entries) in [
            ("week_champion_streak", &streaks.week_champion),
            ("week_striker_streak", &streaks.week_striker),
            ("week_top_assist_streak", &streaks.week_top_assist),
        ] {
            let sql = format!(
                "INSERT INTO award_state (player_id, {column})
                 VALUES (?, ?)
                 ON CONFLICT(player_id) DO UPDATE SET {column} = excluded.{column}"
            );
            for entry in entries.iter() {
                tx.execute(&sql, params![entry.player_id.as_u64(), entry.streak_count])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    /// Record a player's monthly award tallies without touching streaks.
    pub fn set_month_awards(
        &mut self,
        player_id: PlayerId,
        scorer: u32,
        assist: u32,
        mvp: u32,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO award_state (player_id, month_scorer, month_assist, month_mvp)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(player_id) DO UPDATE SET
                 month_scorer = excluded.month_scorer,
                 month_assist = excluded.month_assist,
                 month_mvp = excluded.month_mvp",
            params![player_id.as_u64(), scorer, assist, mvp],
        )?;
        Ok(())
    }

    /// Full award bookkeeping row for one player, if any.
    pub fn get_award_state(&self, player_id: PlayerId) -> Result<Option<AwardState>> {
        let state = self
            .conn
            .query_row(
                "SELECT player_id, month_scorer, month_assist, month_mvp,
                        week_champion_streak, week_striker_streak, week_top_assist_streak
                 FROM award_state WHERE player_id = ?",
                params![player_id.as_u64()],
                |row| {
                    Ok(AwardState {
                        player_id: PlayerId::new(row.get(0)?),
                        month_scorer: row.get(1)?,
                        month_assist: row.get(2)?,
                        month_mvp: row.get(3)?,
                        week_champion_streak: row.get(4)?,
                        week_striker_streak: row.get(5)?,
                        week_top_assist_streak: row.get(6)?,
                    })
                },
            )
            .optional()?;
        Ok(state)
    }

    /// A player's stored champion flag (set by the resolver).
    pub fn player_is_champion(&self, player_id: PlayerId) -> Result<bool> {
        let flag = self.conn.query_row(
            "SELECT is_champion FROM players WHERE player_id = ?",
            params![player_id.as_u64()],
            |row| row.get::<_, bool>(0),
        )?;
        Ok(flag)
    }
}
