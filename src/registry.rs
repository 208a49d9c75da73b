//! Per-plot axis enumeration and read-through state access.
//!
//! The registry is the single place that knows which axes participate in a
//! plot: exactly one horizontal time axis and one or more vertical price
//! axes. It holds no bounds or layout of its own; every query goes straight
//! to the host so the controller's view can never drift from the renderer's.

use eyre::Result;
use serde::{Deserialize, Serialize};

use crate::geometry::PixelRect;
use crate::host::{AxisId, AxisOrientation, PlotHost};

/// Role an axis plays in gesture routing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRole {
    Time,
    Price,
    Generic,
}

/// One axis as seen by the hit tester for a single frame.
#[derive(Clone, Copy, Debug)]
pub struct AxisSnapshot {
    pub id: AxisId,
    pub orientation: AxisOrientation,
    pub role: AxisRole,
    pub rect: PixelRect,
}

#[derive(Clone, Copy, Debug)]
struct AxisEntry {
    id: AxisId,
    orientation: AxisOrientation,
    role: AxisRole,
}

#[derive(Clone, Debug)]
pub struct AxisRegistry {
    axes: Vec<AxisEntry>,
}

impl AxisRegistry {
    /// Registers the time axis and the price axes of one plot. The first
    /// price axis is the one wheel gestures address; routing across several
    /// vertical axes is an extension point, not implemented.
    pub fn new(time_axis: AxisId, price_axes: impl IntoIterator<Item = AxisId>) -> Self {
        let mut axes = vec![AxisEntry {
            id: time_axis,
            orientation: AxisOrientation::Horizontal,
            role: AxisRole::Time,
        }];
        axes.extend(price_axes.into_iter().map(|id| AxisEntry {
            id,
            orientation: AxisOrientation::Vertical,
            role: AxisRole::Price,
        }));
        Self { axes }
    }

    pub fn time_axis(&self) -> AxisId {
        self.axes[0].id
    }

    /// Current pixel rect for an axis, or `None` while the host has not laid
    /// it out (or reports a collapsed rect). Callers exclude such axes from
    /// hit-testing for the frame.
    pub fn rect(&self, host: &dyn PlotHost, id: AxisId) -> Option<PixelRect> {
        host.axis_rect(id).filter(|rect| !rect.is_degenerate())
    }

    pub fn bounds(&self, host: &dyn PlotHost, id: AxisId) -> Result<(f64, f64)> {
        host.axis_limits(id)
    }

    pub fn set_bounds(
        &self,
        host: &mut dyn PlotHost,
        id: AxisId,
        min: f64,
        max: f64,
    ) -> Result<()> {
        host.set_axis_limits(id, min, max)
    }

    /// Fresh per-frame view of every axis that is ready for hit-testing.
    pub fn snapshot(&self, host: &dyn PlotHost) -> Vec<AxisSnapshot> {
        self.axes
            .iter()
            .filter_map(|entry| {
                self.rect(host, entry.id).map(|rect| AxisSnapshot {
                    id: entry.id,
                    orientation: entry.orientation,
                    role: entry.role,
                    rect,
                })
            })
            .collect()
    }
}
