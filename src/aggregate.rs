//! Group-by aggregation of delivery subsets into metric rows.
//!
//! [`Metrics::of`] folds any subset into totals; [`aggregate_by`] buckets a subset by
//! an arbitrary key and produces one [`MetricRow`] per key value actually present in
//! the subset — absent keys are never zero-filled, so chart surfaces render exactly
//! the rows returned.
//!
//! Ratio metrics (strike rate, economy) are undefined when their denominator is zero;
//! they return `None` (serialized as `null`) rather than NaN or a panic, and surfaces
//! render that as "unavailable".

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::types::{Delivery, Phase};

/// Aggregated totals for one group of deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Metrics {
    /// Distinct matches the group spans.
    pub matches: usize,
    /// Runs credited to batters.
    pub runs_batter: i64,
    /// Runs charged against bowlers.
    pub runs_bowler: i64,
    /// Total runs, extras included.
    pub runs_total: i64,
    /// Legal balls (wides/no-balls excluded). This is the only place `valid_ball`
    /// gates anything; run sums always cover every delivery in the group.
    pub balls: i64,
    /// Bowler-credited wickets.
    pub wickets: i64,
    /// Distinct batters with a recorded name.
    pub batters_used: usize,
    /// Distinct bowlers with a recorded name.
    pub bowlers_used: usize,
}

impl Metrics {
    /// Fold a delivery subset into totals.
    pub fn of<'a>(rows: impl IntoIterator<Item = &'a Delivery>) -> Self {
        let mut matches: HashSet<&str> = HashSet::new();
        let mut batters: HashSet<&str> = HashSet::new();
        let mut bowlers: HashSet<&str> = HashSet::new();
        let mut out = Self::default();

        for d in rows {
            matches.insert(d.match_id.as_str());
            if let Some(b) = d.batter.as_deref() {
                batters.insert(b);
            }
            if let Some(b) = d.bowler.as_deref() {
                bowlers.insert(b);
            }
            out.runs_batter += d.runs_batter;
            out.runs_bowler += d.runs_bowler;
            out.runs_total += d.runs_total;
            out.balls += i64::from(d.valid_ball);
            out.wickets += i64::from(d.bowler_wicket);
        }

        out.matches = matches.len();
        out.batters_used = batters.len();
        out.bowlers_used = bowlers.len();
        out
    }

    /// Overs bowled: legal balls divided by six, real-valued.
    ///
    /// Surfaces display this to one decimal.
    pub fn overs(&self) -> f64 {
        self.balls as f64 / 6.0
    }

    /// Strike rate: runs per hundred balls faced, rounded to two decimals.
    ///
    /// `None` when no legal ball was faced; the ratio is undefined and surfaces show
    /// it as unavailable.
    pub fn strike_rate(&self) -> Option<f64> {
        if self.balls == 0 {
            return None;
        }
        Some(round2(self.runs_batter as f64 / self.balls as f64 * 100.0))
    }

    /// Economy: runs conceded per over bowled, rounded to two decimals.
    ///
    /// `None` when no legal ball was bowled.
    pub fn economy(&self) -> Option<f64> {
        if self.balls == 0 {
            return None;
        }
        Some(round2(self.runs_bowler as f64 / self.overs()))
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// One aggregated row produced by a group-by.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow<K> {
    /// Grouping key value.
    pub key: K,
    /// Totals for the group.
    pub metrics: Metrics,
}

/// Group a subset by an arbitrary key and aggregate each bucket.
///
/// Rows for which `key_fn` returns `None` are skipped (e.g. deliveries with no
/// recorded player name). Output is sorted by key and contains exactly the key values
/// present in the subset.
pub fn aggregate_by<'a, K, F>(rows: &[&'a Delivery], key_fn: F) -> Vec<MetricRow<K>>
where
    K: Ord,
    F: Fn(&'a Delivery) -> Option<K>,
{
    let mut groups: BTreeMap<K, Vec<&Delivery>> = BTreeMap::new();
    for &d in rows {
        if let Some(key) = key_fn(d) {
            groups.entry(key).or_default().push(d);
        }
    }

    groups
        .into_iter()
        .map(|(key, group)| MetricRow {
            key,
            metrics: Metrics::of(group),
        })
        .collect()
}

/// Aggregate a subset per match phase, in innings order.
pub fn aggregate_by_phase(rows: &[&Delivery]) -> Vec<MetricRow<Phase>> {
    aggregate_by(rows, |d| Some(d.phase))
}

/// Aggregate a subset per batter. Deliveries with no recorded batter are skipped.
pub fn aggregate_by_batter(rows: &[&Delivery]) -> Vec<MetricRow<String>> {
    aggregate_by(rows, |d| d.batter.clone())
}

/// Aggregate a subset per bowler. Deliveries with no recorded bowler are skipped.
pub fn aggregate_by_bowler(rows: &[&Delivery]) -> Vec<MetricRow<String>> {
    aggregate_by(rows, |d| d.bowler.clone())
}
