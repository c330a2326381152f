//! Dense, tie-aware rankings over player aggregates.

use crate::engine::aggregate::PlayerAggregate;
use std::cmp::Ordering;

/// Which end of a metric is "better".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower is better (goals conceded, points percentage for LVP).
    Ascending,
    /// Higher is better. The default for almost every category.
    Descending,
}

impl Direction {
    /// Ordering of `a` relative to `b` with the better value first.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        let natural = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            Direction::Ascending => natural,
            Direction::Descending => natural.reverse(),
        }
    }
}

/// Minimum share of the scope's weeks a player must have participated in to
/// be ranked. Intentionally slightly above a quarter so that exact-quarter
/// participants do not qualify.
pub const MIN_WEEKS_RATIO: f64 = 0.2501;

/// Participation floor for the ranking engine: `total_weeks * 0.2501`.
pub fn min_weeks(total_weeks: usize) -> f64 {
    total_weeks as f64 * MIN_WEEKS_RATIO
}

/// Whether a player clears the 25.01% participation floor.
pub fn meets_min_participation(weeks_played: u32, total_weeks: usize) -> bool {
    f64::from(weeks_played) >= min_weeks(total_weeks)
}

/// Participation floor used by LVP and best-of-position eligibility:
/// at least half of the scope's weeks, rounded up.
pub fn half_weeks(total_weeks: usize) -> u32 {
    (total_weeks.div_ceil(2)) as u32
}

/// One ranked player for a single metric.
#[derive(Debug, Clone)]
pub struct RankingEntry<'a> {
    pub aggregate: &'a PlayerAggregate,
    pub value: f64,
    /// Dense, tie-sharing rank: equal values share a rank; a value following
    /// a tied group ranks at 1 + the count of strictly-better players.
    pub rank: u32,
}

/// Rank eligible players by one numeric aggregate field.
///
/// Players under the 25.01% participation floor are filtered out before
/// ranking, so they never consume rank slots. Ranks are computed
/// independently per metric; a player's rank for one field says nothing
/// about their rank for another.
pub fn rank_by<'a, F>(
    aggregates: &'a [PlayerAggregate],
    metric: F,
    direction: Direction,
    total_weeks: usize,
) -> Vec<RankingEntry<'a>>
where
    F: Fn(&PlayerAggregate) -> f64,
{
    let mut eligible: Vec<(&PlayerAggregate, f64)> = aggregates
        .iter()
        .filter(|a| meets_min_participation(a.weeks_played, total_weeks))
        .map(|a| (a, metric(a)))
        .collect();
    eligible.sort_by(|(_, a), (_, b)| direction.compare(*a, *b));

    let mut ranked: Vec<RankingEntry<'a>> = Vec::with_capacity(eligible.len());
    for (index, (aggregate, value)) in eligible.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(prev) if prev.value == value => prev.rank,
            _ => (index + 1) as u32,
        };
        ranked.push(RankingEntry {
            aggregate,
            value,
            rank,
        });
    }
    ranked
}
