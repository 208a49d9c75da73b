#![cfg(feature = "polars")]

//! Tabular OHLC loading for charts.
//!
//! Reads a delimited file into the five parallel columns the series adapter
//! consumes. Column names and datetime formats are caller-configurable; the
//! date and time columns are combined before parsing, unless the file keeps
//! a single datetime column.

use std::path::Path;

use chrono::NaiveDateTime;
use eyre::{eyre, Result, WrapErr};
use polars::prelude::*;
use tracing::info;

use crate::series::OhlcColumns;

#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub date_col: String,
    /// `None` when `date_col` already holds a combined datetime.
    pub time_col: Option<String>,
    pub open_col: String,
    pub high_col: String,
    pub low_col: String,
    pub close_col: String,
    /// chrono format string for the date column.
    pub date_format: String,
    /// chrono format string for the time column; unused without `time_col`.
    pub time_format: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            date_col: "DATE".to_string(),
            time_col: Some("TIME".to_string()),
            open_col: "OPEN".to_string(),
            high_col: "HIGH".to_string(),
            low_col: "LOW".to_string(),
            close_col: "CLOSE".to_string(),
            date_format: "%Y.%m.%d".to_string(),
            time_format: "%H:%M:%S".to_string(),
        }
    }
}

/// Loads an OHLC table and returns its columns in natural reading order,
/// with timestamps as Unix-epoch seconds. Any malformed row, missing column
/// or unparsable datetime fails the whole load.
pub fn load_ohlc_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<OhlcColumns> {
    let path = path.as_ref();
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .wrap_err_with(|| format!("opening {}", path.display()))?
        .finish()
        .wrap_err_with(|| format!("reading {}", path.display()))?;

    let columns = OhlcColumns {
        dates: parse_dates(&df, options)?,
        opens: f64_column(&df, &options.open_col)?,
        highs: f64_column(&df, &options.high_col)?,
        lows: f64_column(&df, &options.low_col)?,
        closes: f64_column(&df, &options.close_col)?,
    };
    columns
        .validate()
        .wrap_err_with(|| format!("validating {}", path.display()))?;
    info!(rows = columns.len(), path = %path.display(), "loaded OHLC table");
    Ok(columns)
}

fn parse_dates(df: &DataFrame, options: &LoadOptions) -> Result<Vec<f64>> {
    let dates = str_column(df, &options.date_col)?;
    match &options.time_col {
        Some(time_col) => {
            let times = str_column(df, time_col)?;
            let format = format!("{} {}", options.date_format, options.time_format);
            dates
                .iter()
                .zip(&times)
                .map(|(date, time)| parse_timestamp(&format!("{date} {time}"), &format))
                .collect()
        }
        None => dates
            .iter()
            .map(|date| parse_timestamp(date, &options.date_format))
            .collect(),
    }
}

/// Parses a naive datetime and interprets it as UTC.
fn parse_timestamp(text: &str, format: &str) -> Result<f64> {
    let parsed = NaiveDateTime::parse_from_str(text, format)
        .wrap_err_with(|| format!("datetime {text:?} does not match format {format:?}"))?;
    Ok(parsed.and_utc().timestamp() as f64)
}

fn str_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let values = series_column(df, name)?
        .str()
        .wrap_err_with(|| format!("column {name:?} is not a string column"))?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .map(str::to_owned)
                .ok_or_else(|| eyre!("null value in column {name:?} at row {row}"))
        })
        .collect()
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let values = series_column(df, name)?
        .cast(&DataType::Float64)
        .wrap_err_with(|| format!("column {name:?} is not numeric"))?;
    values
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| eyre!("null value in column {name:?} at row {row}"))
        })
        .collect()
}

fn series_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    Ok(df
        .column(name)
        .wrap_err_with(|| format!("column {name:?} missing from table"))?
        .as_materialized_series())
}
