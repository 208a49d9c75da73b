//! Pure zoom math for the wheel controller.

/// Wheel direction, reduced from the raw delta sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// `None` for a zero delta; such events are dropped.
    pub fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Self::In),
            d if d < 0 => Some(Self::Out),
            _ => None,
        }
    }
}

/// Span multiplier for one wheel step: zoom in shrinks the span by `factor`,
/// zoom out grows it. One step in followed by one step out leaves a residual
/// of `1 - factor^2`; the two are not inverses.
pub fn wheel_scale(direction: WheelDirection, factor: f64) -> f64 {
    match direction {
        WheelDirection::In => 1.0 - factor,
        WheelDirection::Out => 1.0 + factor,
    }
}

/// Rescales `(min, max)` about a pivot expressed as a fraction of the span.
///
/// `pivot_pct` 0.5 keeps the view center fixed; 0.0 pins the left/bottom
/// bound, 1.0 the right/top bound. For finite `min < max` and a positive
/// finite `scale` the result is never inverted or collapsed.
pub fn zoom_range(bounds: (f64, f64), pivot_pct: f64, scale: f64) -> (f64, f64) {
    let (min, max) = bounds;
    let span = max - min;
    let new_span = span * scale;
    let pivot = min + span * pivot_pct;
    (
        pivot - new_span * pivot_pct,
        pivot + new_span * (1.0 - pivot_pct),
    )
}
