//! Caller-supplied configuration, validated before any host call is made.

use eyre::{ensure, Result};
use serde::{Deserialize, Serialize};

/// RGBA color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
}

/// Window-level chart settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0, "chart width must be positive");
        ensure!(self.height > 0, "chart height must be positive");
        Ok(())
    }
}

/// Candlestick series appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandleStyle {
    pub bull_color: Rgba,
    pub bear_color: Rgba,
    /// Body width as a fraction of the bar spacing, in (0, 1].
    pub weight: f32,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            bull_color: Rgba::new(0, 255, 117, 255),
            bear_color: Rgba::new(255, 82, 82, 255),
            weight: 0.25,
        }
    }
}

impl CandleStyle {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.weight.is_finite() && self.weight > 0.0 && self.weight <= 1.0,
            "candle weight must be in (0, 1], got {}",
            self.weight
        );
        Ok(())
    }
}

/// Which point a wheel zoom holds fixed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomAnchor {
    /// Geometric center of the current view.
    #[default]
    ViewCenter,
    /// Data coordinate under the pointer.
    Pointer,
}

/// Wheel zoom behavior.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Fraction of the span gained or lost per wheel step, in (0, 1).
    pub factor: f64,
    /// Width in pixels of the strip at the plot's left edge that routes the
    /// gesture to the price axis.
    pub strip_width: f32,
    pub anchor: ZoomAnchor,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            factor: 0.1,
            strip_width: 60.0,
            anchor: ZoomAnchor::ViewCenter,
        }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.factor.is_finite() && self.factor > 0.0 && self.factor < 1.0,
            "zoom factor must be in (0, 1), got {}",
            self.factor
        );
        ensure!(
            self.strip_width.is_finite() && self.strip_width > 0.0,
            "axis strip width must be positive, got {}",
            self.strip_width
        );
        Ok(())
    }
}
