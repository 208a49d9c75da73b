//! chartkit: a convenience layer over a host plotting library, with
//! pointer-driven per-axis wheel zoom and OHLC data loading.

pub mod charts;
pub mod config;
pub mod geometry;
pub mod host;
pub mod loader;
pub mod registry;
pub mod router;
pub mod series;
pub mod transform;

pub use charts::{CandlestickChart, LineChart, ScatterChart};
pub use config::{CandleStyle, ChartConfig, Rgba, ZoomAnchor, ZoomConfig};
pub use geometry::PixelRect;
pub use host::{AxisId, PlotHost, PlotId, SeriesId, WheelEvent, WindowId};
pub use registry::{AxisRegistry, AxisRole};
pub use router::GestureRouter;
pub use series::{adapt, CandleColumns, OhlcColumns};

#[cfg(feature = "polars")]
pub use loader::{load_ohlc_csv, LoadOptions};
