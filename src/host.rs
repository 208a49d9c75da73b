//! Typed surface of the host plotting library.
//!
//! The host owns windows, plots, axes, series, layout and rendering; this
//! crate only forwards creation calls and reads back per-frame state. Every
//! created item is addressed by an opaque handle returned by the host, so two
//! simultaneously open charts can never collide on a shared name.

use eyre::Result;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::CandleStyle;
use crate::geometry::PixelRect;
use crate::series::CandleColumns;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlotId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesKind {
    Line,
    Scatter,
    Bars,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSpec {
    pub label: String,
    pub pan_button: MouseButton,
    pub fit_button: MouseButton,
    pub legend: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub label: String,
    /// Format ticks as timestamps instead of plain numbers.
    pub time_scaled: bool,
}

/// One wheel step. Only the sign of `delta` is meaningful; events are
/// transient and consumed by a single dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WheelEvent {
    pub delta: i32,
}

/// The surface this crate consumes from the host plotting library.
///
/// Layout queries (`plot_rect`, `axis_rect`) return `None` while the item has
/// not been laid out yet; callers must treat that as "exclude this item for
/// the current frame". Pointer and bounds reads are fallible for the same
/// reason during the first rendered frames.
pub trait PlotHost {
    fn create_window(&mut self, spec: &WindowSpec) -> Result<WindowId>;

    fn create_plot(&mut self, window: WindowId, spec: &PlotSpec) -> Result<PlotId>;

    fn add_axis(&mut self, plot: PlotId, spec: &AxisSpec) -> Result<AxisId>;

    fn add_xy_series(
        &mut self,
        axis: AxisId,
        kind: SeriesKind,
        x: &[f64],
        y: &[f64],
        label: &str,
    ) -> Result<SeriesId>;

    fn add_candle_series(
        &mut self,
        axis: AxisId,
        columns: &CandleColumns,
        label: &str,
        style: &CandleStyle,
    ) -> Result<SeriesId>;

    /// One-shot request to fit the axis to the data attached to it.
    fn fit_axis(&mut self, axis: AxisId) -> Result<()>;

    /// Pointer position in viewport pixel space.
    fn pointer_position(&self) -> Result<Vec2>;

    fn plot_rect(&self, plot: PlotId) -> Option<PixelRect>;

    fn axis_rect(&self, axis: AxisId) -> Option<PixelRect>;

    fn axis_limits(&self, axis: AxisId) -> Result<(f64, f64)>;

    fn set_axis_limits(&mut self, axis: AxisId, min: f64, max: f64) -> Result<()>;

    /// Renders one frame. Returns `false` once the window has been closed.
    fn frame(&mut self) -> Result<bool>;

    /// Drains the wheel events observed since the previous frame.
    fn poll_wheel(&mut self) -> Vec<WheelEvent>;
}
