//! `cricket-analytics` is the analytics core of a dashboard over a static ball-by-ball
//! cricket dataset: it loads delivery records from CSV into an immutable in-memory
//! [`types::DeliveryTable`], normalizes franchise names and seasons, tags every
//! delivery with its innings [`types::Phase`], and derives batting/bowling metric rows
//! from filtered views.
//!
//! Presentation (widgets, charts, theming) lives outside this crate and drives it
//! through four operations:
//!
//! - [`store::shared_table`]: the enriched table, loaded once per process and cached
//! - [`query::filter_by`] (and the named views [`query::team_in_season`] /
//!   [`query::matchup`]): borrowed subsets of the table
//! - [`aggregate::aggregate_by`] (and its phase/player wrappers): metric rows per group
//! - [`types::Phase::of_over`]: phase classification for an over number
//!
//! ## Loading
//!
//! ```no_run
//! use cricket_analytics::store;
//!
//! # fn main() -> Result<(), cricket_analytics::DataError> {
//! // First call reads and enriches the CSV; later calls return the cached table.
//! let table = store::shared_table("deliveries.csv")?;
//! println!("deliveries={}", table.len());
//! # Ok(())
//! # }
//! ```
//!
//! A load fails (with a [`error::DataError`]) only when the data is unavailable: source
//! missing or unreadable, required columns absent, unparsable cells, or zero rows.
//! After a successful load nothing else in the crate can fail — a filter that matches
//! nothing returns an empty subset, and a ratio with a zero denominator reports as
//! unavailable (`None`), never as NaN or a panic.
//!
//! ## Querying and aggregating
//!
//! ```rust
//! use cricket_analytics::aggregate::{aggregate_by_phase, Metrics};
//! use cricket_analytics::query::{self, DeliveryFilter};
//! use cricket_analytics::types::{Delivery, DeliveryTable, Phase};
//!
//! let table = DeliveryTable::new(vec![Delivery {
//!     match_id: "m1".to_string(),
//!     season: "2024".to_string(),
//!     over: 3,
//!     batting_team: "Punjab Kings".to_string(),
//!     bowling_team: "Mumbai Indians".to_string(),
//!     batter: Some("Shashank Singh".to_string()),
//!     bowler: Some("Jasprit Bumrah".to_string()),
//!     runs_batter: 4,
//!     runs_bowler: 4,
//!     runs_total: 4,
//!     valid_ball: true,
//!     bowler_wicket: false,
//!     phase: Phase::of_over(3),
//! }]);
//!
//! let subset = query::filter_by(&table, &DeliveryFilter::new().season("2024"));
//! let rows = aggregate_by_phase(&subset);
//! assert_eq!(rows[0].key, Phase::Powerplay);
//! assert_eq!(rows[0].metrics.strike_rate(), Some(400.0));
//!
//! let nothing = Metrics::of(query::matchup(&table, "A", "B"));
//! assert_eq!(nothing.strike_rate(), None); // unavailable, not an error
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading, enrichment pipeline, load observers
//! - [`normalize`]: franchise-rename and season canonicalization
//! - [`types`]: delivery/phase/table data model
//! - [`query`]: equality filters, distinct enumeration, named views
//! - [`aggregate`]: metric totals, derived ratios, group-by
//! - [`store`]: load-once process-wide table accessor
//! - [`error`]: the data-unavailable error type

pub mod aggregate;
pub mod error;
pub mod ingestion;
pub mod normalize;
pub mod query;
pub mod store;
pub mod types;

pub use error::{DataError, DataResult};
