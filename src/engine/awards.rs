//! Monthly award selection.
//!
//! Every category uses the same tie-inclusive threshold: sort by the
//! category metric, read the value at 5th place, include everyone at least
//! as good as it, cap the list at 9 entries.

use crate::engine::aggregate::PlayerAggregate;
use crate::engine::ranking::{half_weeks, meets_min_participation, Direction};
use serde::Serialize;
use std::cmp::Ordering;

/// 1-indexed position whose value becomes the inclusive cutoff.
pub const AWARD_CUTOFF_RANK: usize = 5;

/// Hard output bound per award list.
pub const AWARD_LIST_CAP: usize = 9;

/// One awarded player and the metric value that earned the spot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwardEntry {
    pub name: String,
    pub count: f64,
}

/// The month's six award lists, each bounded at 9 entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthResume {
    pub scorer: Vec<AwardEntry>,
    pub assists: Vec<AwardEntry>,
    pub mvp: Vec<AwardEntry>,
    pub lvp: Vec<AwardEntry>,
    pub best_defender: Vec<AwardEntry>,
    pub top_pointer: Vec<AwardEntry>,
}

/// Apply the cutoff rule to candidates already sorted best-first.
///
/// The cutoff degrades to the last available value when fewer than 5
/// candidates exist; an empty candidate set yields an empty list.
fn select_with_cutoff(sorted: Vec<(String, f64)>, direction: Direction) -> Vec<AwardEntry> {
    let cutoff = match sorted.get(AWARD_CUTOFF_RANK - 1).or_else(|| sorted.last()) {
        Some(&(_, value)) => value,
        None => return Vec::new(),
    };
    sorted
        .into_iter()
        .filter(|&(_, value)| match direction {
            Direction::Descending => value >= cutoff,
            Direction::Ascending => value <= cutoff,
        })
        .take(AWARD_LIST_CAP)
        .map(|(name, count)| AwardEntry { name, count })
        .collect()
}

/// Sort candidates by a metric in its "better" direction and apply the
/// cutoff rule. Ties at the boundary are always included, even when that
/// makes the list longer than 5.
fn award_by<F>(
    candidates: &[&PlayerAggregate],
    metric: F,
    direction: Direction,
) -> Vec<AwardEntry>
where
    F: Fn(&PlayerAggregate) -> f64,
{
    let mut sorted: Vec<(String, f64)> = candidates
        .iter()
        .map(|&a| (a.name.clone(), metric(a)))
        .collect();
    sorted.sort_by(|(_, a), (_, b)| direction.compare(*a, *b));
    select_with_cutoff(sorted, direction)
}

/// MVP ordering: championships, tie-broken by fewest matches, then by
/// highest points-percentage.
fn mvp_order(a: &PlayerAggregate, b: &PlayerAggregate) -> Ordering {
    b.championships
        .cmp(&a.championships)
        .then(a.matches.cmp(&b.matches))
        .then(
            b.points_pct
                .partial_cmp(&a.points_pct)
                .unwrap_or(Ordering::Equal),
        )
}

/// Compute the month's award lists from the scope's aggregates.
///
/// `total_weeks` is the number of weeks in the computation scope, used by
/// the participation gates: LVP requires at least half the weeks, best
/// defender the 25.01% floor; the other categories are ungated.
pub fn month_resume(aggregates: &[PlayerAggregate], total_weeks: usize) -> MonthResume {
    let everyone: Vec<&PlayerAggregate> = aggregates.iter().collect();

    let regulars: Vec<&PlayerAggregate> = aggregates
        .iter()
        .filter(|a| a.weeks_played >= half_weeks(total_weeks))
        .collect();

    let gated: Vec<&PlayerAggregate> = aggregates
        .iter()
        .filter(|a| meets_min_participation(a.weeks_played, total_weeks))
        .collect();

    let mvp = {
        let mut sorted_aggs: Vec<&PlayerAggregate> = everyone.clone();
        sorted_aggs.sort_by(|a, b| mvp_order(a, b));
        let sorted: Vec<(String, f64)> = sorted_aggs
            .into_iter()
            .map(|a| (a.name.clone(), f64::from(a.championships)))
            .collect();
        select_with_cutoff(sorted, Direction::Descending)
    };

    MonthResume {
        scorer: award_by(&everyone, |a| f64::from(a.goals), Direction::Descending),
        assists: award_by(&everyone, |a| f64::from(a.assists), Direction::Descending),
        mvp,
        lvp: award_by(&regulars, |a| a.points_pct, Direction::Ascending),
        best_defender: award_by(&gated, |a| a.goals_conceded_avg, Direction::Ascending),
        top_pointer: award_by(&everyone, |a| f64::from(a.points), Direction::Descending),
    }
}
