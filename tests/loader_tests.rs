#![cfg(feature = "polars")]

use std::path::PathBuf;

use chartkit::loader::{load_ohlc_csv, LoadOptions};
use chrono::NaiveDate;

fn write_csv(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("chartkit_{}_{name}.csv", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

fn utc_seconds(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> f64 {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
        .and_utc()
        .timestamp() as f64
}

#[test]
fn test_load_with_split_date_and_time_columns() {
    let path = write_csv(
        "split",
        "DATE,TIME,OPEN,HIGH,LOW,CLOSE\n\
         2025.10.29,00:00:00,1.07,1.08,1.06,1.075\n\
         2025.10.29,00:01:00,1.075,1.09,1.07,1.08\n",
    );

    let columns = load_ohlc_csv(&path, &LoadOptions::default()).unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns.dates[0], utc_seconds(2025, 10, 29, 0, 0, 0));
    assert_eq!(columns.dates[1], utc_seconds(2025, 10, 29, 0, 1, 0));
    assert_eq!(columns.opens, vec![1.07, 1.075]);
    assert_eq!(columns.highs, vec![1.08, 1.09]);
    assert_eq!(columns.lows, vec![1.06, 1.07]);
    assert_eq!(columns.closes, vec![1.075, 1.08]);
}

#[test]
fn test_load_with_combined_datetime_column() {
    let path = write_csv(
        "combined",
        "stamp,open,high,low,close\n\
         2024-01-02 09:30:00,10.0,11.0,9.5,10.5\n\
         2024-01-02 09:31:00,10.5,11.5,10.0,11.0\n",
    );
    let options = LoadOptions {
        date_col: "stamp".to_string(),
        time_col: None,
        open_col: "open".to_string(),
        high_col: "high".to_string(),
        low_col: "low".to_string(),
        close_col: "close".to_string(),
        date_format: "%Y-%m-%d %H:%M:%S".to_string(),
        time_format: String::new(),
    };

    let columns = load_ohlc_csv(&path, &options).unwrap();
    assert_eq!(columns.dates[0], utc_seconds(2024, 1, 2, 9, 30, 0));
    assert_eq!(columns.dates[1], utc_seconds(2024, 1, 2, 9, 31, 0));
    assert_eq!(columns.closes, vec![10.5, 11.0]);
}

#[test]
fn test_missing_column_is_an_error() {
    let path = write_csv(
        "missing_col",
        "DATE,TIME,OPEN,HIGH,LOW\n2025.10.29,00:00:00,1.0,1.1,0.9\n",
    );
    let err = load_ohlc_csv(&path, &LoadOptions::default()).unwrap_err();
    assert!(err.to_string().contains("CLOSE"), "got: {err:#}");
}

#[test]
fn test_unparsable_datetime_is_an_error() {
    let path = write_csv(
        "bad_datetime",
        "DATE,TIME,OPEN,HIGH,LOW,CLOSE\n29/10/2025,00:00:00,1.0,1.1,0.9,1.05\n",
    );
    assert!(load_ohlc_csv(&path, &LoadOptions::default()).is_err());
}

#[test]
fn test_unsorted_rows_are_an_error() {
    let path = write_csv(
        "unsorted",
        "DATE,TIME,OPEN,HIGH,LOW,CLOSE\n\
         2025.10.29,00:05:00,1.0,1.1,0.9,1.05\n\
         2025.10.29,00:00:00,1.0,1.1,0.9,1.05\n",
    );
    assert!(load_ohlc_csv(&path, &LoadOptions::default()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("chartkit_definitely_absent.csv");
    assert!(load_ohlc_csv(&path, &LoadOptions::default()).is_err());
}
