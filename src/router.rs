//! Wheel gesture routing with per-event failure isolation.

use eyre::{ensure, Result};
use glam::Vec2;
use tracing::debug;

use crate::config::{ZoomAnchor, ZoomConfig};
use crate::hit_test::HitTester;
use crate::host::{AxisOrientation, PlotHost, PlotId, WheelEvent};
use crate::registry::{AxisRegistry, AxisSnapshot};
use crate::transform::{self, WheelDirection};

/// Turns polled wheel events into per-axis zooms. Constructed once per chart
/// and dispatched for every event the host reports for the chart's lifetime.
pub struct GestureRouter {
    plot: PlotId,
    registry: AxisRegistry,
    hit_tester: HitTester,
    config: ZoomConfig,
}

impl GestureRouter {
    pub fn new(plot: PlotId, registry: AxisRegistry, config: ZoomConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            plot,
            registry,
            hit_tester: HitTester::new(config.strip_width),
            config,
        })
    }

    /// Callback boundary. Anything that goes wrong while processing one
    /// event (pointer read, layout query, bounds read) drops that event; the
    /// render loop keeps running and the next gesture simply retries.
    pub fn on_wheel(&self, host: &mut dyn PlotHost, event: &WheelEvent) {
        if let Err(err) = self.process(host, event) {
            debug!(delta = event.delta, error = %err, "wheel gesture dropped");
        }
    }

    fn process(&self, host: &mut dyn PlotHost, event: &WheelEvent) -> Result<()> {
        let Some(direction) = WheelDirection::from_delta(event.delta) else {
            return Ok(());
        };
        let pointer = host.pointer_position()?;
        // Rects are re-read every event; they move between frames when the
        // window is resized or docked.
        let Some(plot_rect) = host.plot_rect(self.plot) else {
            return Ok(());
        };
        let axes = self.registry.snapshot(host);
        let Some(hit) = self.hit_tester.hit(pointer, &plot_rect, &axes) else {
            return Ok(());
        };

        let (min, max) = self.registry.bounds(host, hit.id)?;
        ensure!(
            min.is_finite() && max.is_finite() && min < max,
            "axis bounds unusable: ({min}, {max})"
        );

        let pivot_pct = match self.config.anchor {
            ZoomAnchor::ViewCenter => 0.5,
            ZoomAnchor::Pointer => pointer_pivot(pointer, &hit),
        };
        let scale = transform::wheel_scale(direction, self.config.factor);
        let (new_min, new_max) = transform::zoom_range((min, max), pivot_pct, scale);
        // Single write: both ends land together or not at all.
        self.registry.set_bounds(host, hit.id, new_min, new_max)
    }
}

/// Maps the pointer to a pivot fraction inside the hit axis's rect. Screen y
/// grows downward while data on a vertical axis grows upward, hence the flip.
fn pointer_pivot(pointer: Vec2, axis: &AxisSnapshot) -> f64 {
    let pct = match axis.orientation {
        AxisOrientation::Horizontal => (pointer.x - axis.rect.origin.x) / axis.rect.width(),
        AxisOrientation::Vertical => 1.0 - (pointer.y - axis.rect.origin.y) / axis.rect.height(),
    };
    f64::from(pct.clamp(0.0, 1.0))
}
