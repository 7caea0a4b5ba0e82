//! Loading the delivery dataset into an enriched [`DeliveryTable`].
//!
//! Most callers should use [`load_deliveries`] (or [`load_deliveries_with`] to attach
//! an observer), which:
//!
//! - reads the delivery CSV ([`csv`]) into typed rows, with phases attached
//! - normalizes franchise names and season labels ([`crate::normalize`])
//! - freezes the result as an immutable [`DeliveryTable`]
//!
//! Hosts that keep one table per process should go through
//! [`crate::store::shared_table`] instead, which memoizes the first successful load.

pub mod csv;
pub mod observability;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::DataResult;
use crate::normalize;
use crate::types::DeliveryTable;

pub use csv::{read_deliveries_from_path, read_deliveries_from_reader, REQUIRED_COLUMNS};
pub use observability::{CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadStats, StdErrObserver};

/// Options controlling dataset loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// Optional observer notified of the load outcome.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Load and enrich the delivery dataset from a CSV source.
///
/// Equivalent to [`load_deliveries_with`] with default options.
pub fn load_deliveries(path: impl AsRef<Path>) -> DataResult<DeliveryTable> {
    load_deliveries_with(path, &LoadOptions::default())
}

/// Load and enrich the delivery dataset, reporting the outcome to any configured
/// observer.
///
/// Fails if the source is missing, malformed (wrong column set, unparsable cells), or
/// empty; on success the returned table is fully enriched (canonical team names,
/// canonical seasons, phases) and read-only from here on.
pub fn load_deliveries_with(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> DataResult<DeliveryTable> {
    let path = path.as_ref();
    let ctx = LoadContext {
        path: path.to_path_buf(),
    };

    let result = load_enriched(path);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(&ctx, table_stats(table)),
            Err(e) => obs.on_failure(&ctx, e),
        }
    }

    result
}

fn load_enriched(path: &Path) -> DataResult<DeliveryTable> {
    normalize::assert_rename_table_acyclic();

    let mut deliveries = csv::read_deliveries_from_path(path)?;
    for delivery in &mut deliveries {
        normalize::normalize_delivery(delivery);
    }
    Ok(DeliveryTable::new(deliveries))
}

fn table_stats(table: &DeliveryTable) -> LoadStats {
    let mut seasons: HashSet<&str> = HashSet::new();
    let mut teams: HashSet<&str> = HashSet::new();
    for d in table.deliveries() {
        seasons.insert(d.season.as_str());
        teams.insert(d.batting_team.as_str());
        teams.insert(d.bowling_team.as_str());
    }
    LoadStats {
        deliveries: table.len(),
        seasons: seasons.len(),
        teams: teams.len(),
    }
}
