//! OHLC column adapter between caller order and host renderer order.
//!
//! Callers supply columns in natural reading order (open, high, low, close);
//! the host candlestick renderer expects (open, close, low, high). The
//! adapter validates shape invariants once, at chart construction, and
//! reorders by moving the vectors.

use eyre::{ensure, Result};

/// Caller-facing OHLC columns. `dates` are Unix seconds, non-decreasing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OhlcColumns {
    pub dates: Vec<f64>,
    pub opens: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
}

impl OhlcColumns {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        let n = self.dates.len();
        ensure!(n > 0, "OHLC data is empty");
        ensure!(
            self.opens.len() == n
                && self.highs.len() == n
                && self.lows.len() == n
                && self.closes.len() == n,
            "OHLC column lengths differ: dates={}, opens={}, highs={}, lows={}, closes={}",
            n,
            self.opens.len(),
            self.highs.len(),
            self.lows.len(),
            self.closes.len()
        );
        // A NaN anywhere in the dates also fails this comparison.
        ensure!(
            self.dates.windows(2).all(|w| w[0] <= w[1]),
            "dates must be non-decreasing Unix timestamps"
        );
        Ok(())
    }
}

/// Columns in the order the host candlestick renderer consumes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CandleColumns {
    pub dates: Vec<f64>,
    pub opens: Vec<f64>,
    pub closes: Vec<f64>,
    pub lows: Vec<f64>,
    pub highs: Vec<f64>,
}

impl CandleColumns {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Inverse permutation, back to caller order.
    pub fn into_natural_order(self) -> OhlcColumns {
        let Self {
            dates,
            opens,
            closes,
            lows,
            highs,
        } = self;
        OhlcColumns {
            dates,
            opens,
            highs,
            lows,
            closes,
        }
    }
}

/// Validates and reorders caller columns into the host's expected order.
/// The vectors are moved, not copied.
pub fn adapt(columns: OhlcColumns) -> Result<CandleColumns> {
    columns.validate()?;
    let OhlcColumns {
        dates,
        opens,
        highs,
        lows,
        closes,
    } = columns;
    Ok(CandleColumns {
        dates,
        opens,
        closes,
        lows,
        highs,
    })
}
