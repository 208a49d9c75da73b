#![allow(dead_code)]

//! Scripted stand-in for the host plotting library.

use std::collections::HashMap;

use chartkit::config::CandleStyle;
use chartkit::geometry::PixelRect;
use chartkit::host::{
    AxisId, AxisSpec, PlotHost, PlotId, PlotSpec, SeriesId, SeriesKind, WheelEvent, WindowId,
    WindowSpec,
};
use chartkit::series::CandleColumns;
use eyre::{eyre, Result};
use glam::Vec2;

/// Record of every creation call, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Window(WindowSpec),
    Plot(PlotSpec),
    Axis(AxisSpec),
    XySeries {
        kind: SeriesKind,
        label: String,
        len: usize,
    },
    CandleSeries {
        label: String,
        len: usize,
        style: CandleStyle,
    },
    FitAxis(AxisId),
}

/// Fake host: creation calls hand out sequential ids and are logged; layout
/// and bounds are whatever the test scripts into the maps. A missing entry
/// reproduces the host's "not laid out yet" behavior.
#[derive(Default)]
pub struct MockHost {
    next_id: u64,
    pub calls: Vec<HostCall>,
    /// `None` makes the pointer read fail, as on the first frames.
    pub pointer: Option<Vec2>,
    pub plot_rects: HashMap<PlotId, PixelRect>,
    pub axis_rects: HashMap<AxisId, PixelRect>,
    pub limits: HashMap<AxisId, (f64, f64)>,
    pub set_limit_calls: Vec<(AxisId, f64, f64)>,
    pub frames_left: u32,
    pub wheel_events: Vec<WheelEvent>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn next(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl PlotHost for MockHost {
    fn create_window(&mut self, spec: &WindowSpec) -> Result<WindowId> {
        self.calls.push(HostCall::Window(spec.clone()));
        Ok(WindowId(self.next()))
    }

    fn create_plot(&mut self, _window: WindowId, spec: &PlotSpec) -> Result<PlotId> {
        self.calls.push(HostCall::Plot(spec.clone()));
        Ok(PlotId(self.next()))
    }

    fn add_axis(&mut self, _plot: PlotId, spec: &AxisSpec) -> Result<AxisId> {
        self.calls.push(HostCall::Axis(spec.clone()));
        Ok(AxisId(self.next()))
    }

    fn add_xy_series(
        &mut self,
        _axis: AxisId,
        kind: SeriesKind,
        x: &[f64],
        _y: &[f64],
        label: &str,
    ) -> Result<SeriesId> {
        self.calls.push(HostCall::XySeries {
            kind,
            label: label.to_string(),
            len: x.len(),
        });
        Ok(SeriesId(self.next()))
    }

    fn add_candle_series(
        &mut self,
        _axis: AxisId,
        columns: &CandleColumns,
        label: &str,
        style: &CandleStyle,
    ) -> Result<SeriesId> {
        self.calls.push(HostCall::CandleSeries {
            label: label.to_string(),
            len: columns.len(),
            style: style.clone(),
        });
        Ok(SeriesId(self.next()))
    }

    fn fit_axis(&mut self, axis: AxisId) -> Result<()> {
        self.calls.push(HostCall::FitAxis(axis));
        Ok(())
    }

    fn pointer_position(&self) -> Result<Vec2> {
        self.pointer.ok_or_else(|| eyre!("pointer not available"))
    }

    fn plot_rect(&self, plot: PlotId) -> Option<PixelRect> {
        self.plot_rects.get(&plot).copied()
    }

    fn axis_rect(&self, axis: AxisId) -> Option<PixelRect> {
        self.axis_rects.get(&axis).copied()
    }

    fn axis_limits(&self, axis: AxisId) -> Result<(f64, f64)> {
        self.limits
            .get(&axis)
            .copied()
            .ok_or_else(|| eyre!("limits not available for {axis:?}"))
    }

    fn set_axis_limits(&mut self, axis: AxisId, min: f64, max: f64) -> Result<()> {
        self.set_limit_calls.push((axis, min, max));
        self.limits.insert(axis, (min, max));
        Ok(())
    }

    fn frame(&mut self) -> Result<bool> {
        if self.frames_left == 0 {
            return Ok(false);
        }
        self.frames_left -= 1;
        Ok(true)
    }

    fn poll_wheel(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.wheel_events)
    }
}
