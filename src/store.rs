//! Process-wide memoization of the enriched delivery table.
//!
//! The source dataset is immutable for the life of the process, so the table is built
//! at most once and shared read-only afterwards. [`shared_table`] is the explicit
//! accessor: the first successful call loads and caches; every later call returns the
//! same `Arc` without touching the source, whatever path it passes. Failed loads are
//! not cached, so a host can surface the error and retry after fixing the source.

use std::path::Path;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::DataResult;
use crate::ingestion::{self, LoadOptions};
use crate::types::DeliveryTable;

static TABLE: OnceLock<Arc<DeliveryTable>> = OnceLock::new();
// Serializes first-time construction so concurrent first readers converge on a single
// load instead of each parsing the source.
static INIT: Mutex<()> = Mutex::new(());

/// The process-wide enriched delivery table, loading it on first access.
///
/// Equivalent to [`shared_table_with`] with default options.
pub fn shared_table(path: impl AsRef<Path>) -> DataResult<Arc<DeliveryTable>> {
    shared_table_with(path, &LoadOptions::default())
}

/// The process-wide enriched delivery table, loading it on first access with the given
/// options.
///
/// Once a load has succeeded, the options (and path) of later calls are ignored: the
/// cached table is returned as-is.
pub fn shared_table_with(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> DataResult<Arc<DeliveryTable>> {
    if let Some(table) = TABLE.get() {
        return Ok(Arc::clone(table));
    }

    let _guard = INIT.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
    // Another reader may have finished loading while we waited for the guard.
    if let Some(table) = TABLE.get() {
        return Ok(Arc::clone(table));
    }

    let table = Arc::new(ingestion::load_deliveries_with(path, options)?);
    let _ = TABLE.set(Arc::clone(&table));
    Ok(table)
}
