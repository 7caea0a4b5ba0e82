//! Team-name and season canonicalization.
//!
//! Franchises get renamed between eras; the raw dataset carries whichever name was
//! current when the match was played. Normalization collapses historical aliases onto
//! the current franchise name so a team's rows group together across seasons, and
//! coerces season labels to a stable string-comparable form.
//!
//! Applied once at load time, before the table is frozen. Both steps are idempotent.

use crate::types::Delivery;

/// Historical franchise renames, old name → current name.
///
/// No rename target appears as a rename source ([`assert_rename_table_acyclic`]), so
/// applying the mapping twice is the same as applying it once. Names not listed here
/// pass through unchanged.
const TEAM_RENAMES: [(&str, &str); 4] = [
    ("Kings XI Punjab", "Punjab Kings"),
    ("Royal Challengers Bangalore", "Royal Challengers Bengaluru"),
    ("Delhi Daredevils", "Delhi Capitals"),
    ("Rising Pune Supergiant", "Rising Pune Supergiants"),
];

/// Verify the rename table has no chained renames (no target is also a source).
///
/// Run once during loading; a chained entry would make normalization depend on how
/// many times it ran.
///
/// # Panics
///
/// Panics if a rename target appears as a rename source.
pub(crate) fn assert_rename_table_acyclic() {
    for (_, target) in TEAM_RENAMES {
        assert!(
            TEAM_RENAMES.iter().all(|(source, _)| *source != target),
            "rename table chains through '{target}'"
        );
    }
}

/// Canonical franchise name for a raw team cell.
///
/// Trims surrounding whitespace, then applies the historical rename table. Unmapped
/// names are returned trimmed but otherwise unchanged.
pub fn canonical_team(raw: &str) -> String {
    let trimmed = raw.trim();
    for (source, target) in TEAM_RENAMES {
        if trimmed == source {
            return target.to_owned();
        }
    }
    trimmed.to_owned()
}

/// Canonical season label.
///
/// Sources disagree on whether seasons are stored as text or numbers; a numeric season
/// that round-tripped through a float column arrives as e.g. `2016.0`. Collapse
/// integral floats to their integer rendering so equality and ascending sort behave
/// the same regardless of source typing. Non-numeric labels (e.g. `2007/08`) pass
/// through trimmed.
pub fn canonical_season(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse::<f64>() {
        if v.fract() == 0.0 && v.abs() < 1e15 {
            return format!("{}", v as i64);
        }
    }
    trimmed.to_owned()
}

/// Apply team and season canonicalization to one delivery in place.
pub fn normalize_delivery(delivery: &mut Delivery) {
    delivery.batting_team = canonical_team(&delivery.batting_team);
    delivery.bowling_team = canonical_team(&delivery.bowling_team);
    delivery.season = canonical_season(&delivery.season);
}
