//! Core data model: deliveries, match phases, and the immutable delivery table.
//!
//! One [`Delivery`] is one recorded ball. Loading produces a [`DeliveryTable`] that is
//! never mutated afterwards; every query borrows from it.

use std::fmt;

use serde::Serialize;

/// Coarse innings bucket keyed by over number.
///
/// Variants are ordered by innings position, so sorting metric rows by phase yields
/// Powerplay, then Middle Overs, then Death Overs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Phase {
    /// Overs 1-6 (fielding restrictions in force).
    Powerplay,
    /// Overs 7-15.
    MiddleOvers,
    /// Overs 16 and later.
    DeathOvers,
}

impl Phase {
    /// Classify an over number into its phase.
    ///
    /// Total over all integers: band upper bounds are inclusive (over 6 is still
    /// Powerplay, over 15 is still Middle Overs). Out-of-range inputs (negative,
    /// absurdly large) are classified by the same rule, never rejected.
    pub fn of_over(over: i64) -> Self {
        if over <= 6 {
            Self::Powerplay
        } else if over <= 15 {
            Self::MiddleOvers
        } else {
            Self::DeathOvers
        }
    }

    /// Human-readable label used by presentation surfaces.
    pub fn label(self) -> &'static str {
        match self {
            Self::Powerplay => "Powerplay",
            Self::MiddleOvers => "Middle Overs",
            Self::DeathOvers => "Death Overs",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ball bowled in a match.
///
/// `batter`/`bowler` are `None` when the source row has no name recorded; distinct
/// player enumeration skips them. `phase` is derived from `over` at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    /// Match identifier; opaque, only compared for equality and distinct counts.
    pub match_id: String,
    /// Season label, canonicalized to a string-comparable form.
    pub season: String,
    /// Over number within the innings.
    pub over: i64,
    /// Team batting on this ball (canonical franchise name).
    pub batting_team: String,
    /// Team bowling on this ball (canonical franchise name).
    pub bowling_team: String,
    /// Batter on strike, if recorded.
    pub batter: Option<String>,
    /// Bowler delivering, if recorded.
    pub bowler: Option<String>,
    /// Runs credited to the batter off this ball.
    pub runs_batter: i64,
    /// Runs charged against the bowler on this ball.
    pub runs_bowler: i64,
    /// Total runs on the ball, extras included.
    pub runs_total: i64,
    /// Whether the ball counts toward the legal six-per-over count
    /// (wides and no-balls do not).
    pub valid_ball: bool,
    /// Whether the ball took a bowler-credited wicket.
    pub bowler_wicket: bool,
    /// Innings phase, derived from `over`.
    pub phase: Phase,
}

/// Immutable, enriched delivery table.
///
/// Built once per load (normalized team names, canonical seasons, phases attached) and
/// treated as read-only for the rest of the process. All views are borrowed subsets;
/// sharing the table across readers needs no locking.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryTable {
    deliveries: Vec<Delivery>,
}

impl DeliveryTable {
    /// Wrap enriched deliveries in a table.
    pub fn new(deliveries: Vec<Delivery>) -> Self {
        Self { deliveries }
    }

    /// All deliveries, in source order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// Number of deliveries in the table.
    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    /// Whether the table holds no deliveries.
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }
}
