//! Filtering and views over the enriched delivery table.
//!
//! Every function here is a non-mutating projection: subsets borrow rows from the
//! [`DeliveryTable`] and an empty subset is a perfectly valid result (a filter
//! combination that matches nothing is "no data", not a failure).

use std::collections::BTreeSet;

use crate::types::{Delivery, DeliveryTable};

/// A conjunction of equality predicates over delivery fields.
///
/// Unset fields match everything; `matches` is the AND of the set ones.
///
/// # Examples
///
/// ```rust
/// use cricket_analytics::query::DeliveryFilter;
///
/// let filter = DeliveryFilter::new()
///     .season("2024")
///     .batting_team("Chennai Super Kings");
/// assert_ne!(filter, DeliveryFilter::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryFilter {
    season: Option<String>,
    batting_team: Option<String>,
    bowling_team: Option<String>,
    batter: Option<String>,
    bowler: Option<String>,
}

impl DeliveryFilter {
    /// A filter that matches every delivery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact season.
    pub fn season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Require the batting team (canonical name).
    pub fn batting_team(mut self, team: impl Into<String>) -> Self {
        self.batting_team = Some(team.into());
        self
    }

    /// Require the bowling team (canonical name).
    pub fn bowling_team(mut self, team: impl Into<String>) -> Self {
        self.bowling_team = Some(team.into());
        self
    }

    /// Require the batter on strike. A delivery with no recorded batter never matches.
    pub fn batter(mut self, batter: impl Into<String>) -> Self {
        self.batter = Some(batter.into());
        self
    }

    /// Require the bowler. A delivery with no recorded bowler never matches.
    pub fn bowler(mut self, bowler: impl Into<String>) -> Self {
        self.bowler = Some(bowler.into());
        self
    }

    /// Whether `delivery` satisfies every set predicate.
    pub fn matches(&self, delivery: &Delivery) -> bool {
        fn eq(want: &Option<String>, have: &str) -> bool {
            want.as_deref().is_none_or(|w| w == have)
        }
        fn eq_name(want: &Option<String>, have: Option<&str>) -> bool {
            match want.as_deref() {
                None => true,
                Some(w) => have == Some(w),
            }
        }

        eq(&self.season, &delivery.season)
            && eq(&self.batting_team, &delivery.batting_team)
            && eq(&self.bowling_team, &delivery.bowling_team)
            && eq_name(&self.batter, delivery.batter.as_deref())
            && eq_name(&self.bowler, delivery.bowler.as_deref())
    }
}

/// Deliveries matching `filter`, borrowed from the table in source order.
pub fn filter_by<'a>(table: &'a DeliveryTable, filter: &DeliveryFilter) -> Vec<&'a Delivery> {
    table
        .deliveries()
        .iter()
        .filter(|d| filter.matches(d))
        .collect()
}

/// Distinct seasons, sorted ascending.
pub fn distinct_seasons<'a>(rows: impl IntoIterator<Item = &'a Delivery>) -> Vec<String> {
    let set: BTreeSet<&str> = rows.into_iter().map(|d| d.season.as_str()).collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Distinct canonical team names (batting and bowling sides), sorted ascending.
pub fn distinct_teams<'a>(rows: impl IntoIterator<Item = &'a Delivery>) -> Vec<String> {
    let mut set: BTreeSet<&str> = BTreeSet::new();
    for d in rows {
        set.insert(d.batting_team.as_str());
        set.insert(d.bowling_team.as_str());
    }
    set.into_iter().map(str::to_owned).collect()
}

/// Distinct batter names, sorted ascending. Rows with no recorded batter are skipped.
pub fn distinct_batters<'a>(rows: impl IntoIterator<Item = &'a Delivery>) -> Vec<String> {
    let set: BTreeSet<&str> = rows
        .into_iter()
        .filter_map(|d| d.batter.as_deref())
        .collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Distinct bowler names, sorted ascending. Rows with no recorded bowler are skipped.
pub fn distinct_bowlers<'a>(rows: impl IntoIterator<Item = &'a Delivery>) -> Vec<String> {
    let set: BTreeSet<&str> = rows
        .into_iter()
        .filter_map(|d| d.bowler.as_deref())
        .collect();
    set.into_iter().map(str::to_owned).collect()
}

/// A team's season split into its two roles.
///
/// `batting` and `bowling` are disjoint (a team never plays itself) and together cover
/// every delivery that season involving the team in either role.
#[derive(Debug, Clone)]
pub struct TeamSeasonView<'a> {
    /// Deliveries where the team batted.
    pub batting: Vec<&'a Delivery>,
    /// Deliveries where the team bowled/fielded.
    pub bowling: Vec<&'a Delivery>,
}

/// Split one team's deliveries in one season by role.
pub fn team_in_season<'a>(
    table: &'a DeliveryTable,
    season: &str,
    team: &str,
) -> TeamSeasonView<'a> {
    TeamSeasonView {
        batting: filter_by(
            table,
            &DeliveryFilter::new().season(season).batting_team(team),
        ),
        bowling: filter_by(
            table,
            &DeliveryFilter::new().season(season).bowling_team(team),
        ),
    }
}

/// All deliveries where `batter` faced `bowler`, across every season.
///
/// An empty result means the pair never met in the dataset; callers surface it as a
/// no-data state.
pub fn matchup<'a>(table: &'a DeliveryTable, batter: &str, bowler: &str) -> Vec<&'a Delivery> {
    filter_by(table, &DeliveryFilter::new().batter(batter).bowler(bowler))
}

/// Which analytics surface the caller is driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// One team's season, split by batting/bowling role.
    TeamAnalytics { season: String, team: String },
    /// One batter against one bowler, all seasons.
    Matchup { batter: String, bowler: String },
}

/// Subset(s) produced by running a [`ViewMode`] against the table.
#[derive(Debug, Clone)]
pub enum ViewData<'a> {
    /// Team-in-season split.
    Team(TeamSeasonView<'a>),
    /// Batter-versus-bowler deliveries (possibly empty).
    Matchup(Vec<&'a Delivery>),
}

/// Run a view mode against the table.
pub fn run_view<'a>(table: &'a DeliveryTable, mode: &ViewMode) -> ViewData<'a> {
    match mode {
        ViewMode::TeamAnalytics { season, team } => {
            ViewData::Team(team_in_season(table, season, team))
        }
        ViewMode::Matchup { batter, bowler } => ViewData::Matchup(matchup(table, batter, bowler)),
    }
}
