//! CSV loading of delivery records.
//!
//! The delivery schema is fixed (see [`REQUIRED_COLUMNS`]); columns are located by
//! header name, so source column order does not matter and unrecognized columns are
//! ignored. That is also how the legacy positional-index column some exports carry
//! (`Unnamed: 0`, or a blank header) gets dropped: it is simply never read.

use std::path::Path;

use crate::error::{DataError, DataResult};
use crate::types::{Delivery, Phase};

/// Column names every delivery source must provide.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "match_id",
    "season",
    "over",
    "batting_team",
    "bowling_team",
    "batter",
    "bowler",
    "runs_batter",
    "runs_bowler",
    "runs_total",
    "valid_ball",
    "bowler_wicket",
];

/// Read a CSV file into raw (un-normalized) delivery records.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all of [`REQUIRED_COLUMNS`] (order can differ; extras are
///   ignored).
/// - Each cell is parsed according to its column's type; `batter`/`bowler` may be
///   empty, every other cell must hold a value.
/// - A source with zero data rows is [`DataError::EmptyDataset`].
pub fn read_deliveries_from_path(path: impl AsRef<Path>) -> DataResult<Vec<Delivery>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    read_deliveries_from_reader(&mut rdr)
}

/// Read delivery records from an existing CSV reader.
pub fn read_deliveries_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> DataResult<Vec<Delivery>> {
    let headers = rdr.headers()?.clone();
    let cols = ColumnIndexes::resolve(&headers)?;

    let mut deliveries: Vec<Delivery> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        deliveries.push(cols.parse_row(user_row, &record)?);
    }

    if deliveries.is_empty() {
        return Err(DataError::EmptyDataset);
    }
    Ok(deliveries)
}

/// Resolved CSV column positions for the fixed delivery schema.
struct ColumnIndexes {
    match_id: usize,
    season: usize,
    over: usize,
    batting_team: usize,
    bowling_team: usize,
    batter: usize,
    bowler: usize,
    runs_batter: usize,
    runs_bowler: usize,
    runs_total: usize,
    valid_ball: usize,
    bowler_wicket: usize,
}

impl ColumnIndexes {
    fn resolve(headers: &csv::StringRecord) -> DataResult<Self> {
        let find = |name: &str| -> DataResult<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                DataError::MissingColumn {
                    column: name.to_owned(),
                    headers: headers.iter().map(str::to_owned).collect(),
                }
            })
        };

        Ok(Self {
            match_id: find("match_id")?,
            season: find("season")?,
            over: find("over")?,
            batting_team: find("batting_team")?,
            bowling_team: find("bowling_team")?,
            batter: find("batter")?,
            bowler: find("bowler")?,
            runs_batter: find("runs_batter")?,
            runs_bowler: find("runs_bowler")?,
            runs_total: find("runs_total")?,
            valid_ball: find("valid_ball")?,
            bowler_wicket: find("bowler_wicket")?,
        })
    }

    fn parse_row(&self, row: usize, record: &csv::StringRecord) -> DataResult<Delivery> {
        let cell = |idx: usize| record.get(idx).unwrap_or("");

        let over = parse_int(row, "over", cell(self.over))?;

        Ok(Delivery {
            match_id: parse_text(row, "match_id", cell(self.match_id))?,
            season: parse_text(row, "season", cell(self.season))?,
            over,
            batting_team: parse_text(row, "batting_team", cell(self.batting_team))?,
            bowling_team: parse_text(row, "bowling_team", cell(self.bowling_team))?,
            batter: parse_name(cell(self.batter)),
            bowler: parse_name(cell(self.bowler)),
            runs_batter: parse_runs(row, "runs_batter", cell(self.runs_batter))?,
            runs_bowler: parse_runs(row, "runs_bowler", cell(self.runs_bowler))?,
            runs_total: parse_runs(row, "runs_total", cell(self.runs_total))?,
            valid_ball: parse_flag(row, "valid_ball", cell(self.valid_ball))?,
            bowler_wicket: parse_flag(row, "bowler_wicket", cell(self.bowler_wicket))?,
            phase: Phase::of_over(over),
        })
    }
}

fn parse_error(row: usize, column: &str, raw: &str, message: impl Into<String>) -> DataError {
    DataError::Parse {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message: message.into(),
    }
}

fn parse_text(row: usize, column: &str, raw: &str) -> DataResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(parse_error(row, column, raw, "missing value"));
    }
    Ok(trimmed.to_owned())
}

/// Player-name cells may legitimately be empty; empty maps to `None`.
fn parse_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_int(row: usize, column: &str, raw: &str) -> DataResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(parse_error(row, column, raw, "missing value"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|e| parse_error(row, column, raw, e.to_string()))
}

fn parse_runs(row: usize, column: &str, raw: &str) -> DataResult<i64> {
    let runs = parse_int(row, column, raw)?;
    if runs < 0 {
        return Err(parse_error(row, column, raw, "run count cannot be negative"));
    }
    Ok(runs)
}

fn parse_flag(row: usize, column: &str, raw: &str) -> DataResult<bool> {
    let trimmed = raw.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err(parse_error(
            row,
            column,
            raw,
            "expected bool (true/false/1/0/yes/no)",
        )),
    }
}
