//! High-level chart types that drive the host library end to end.
//!
//! Each chart validates its inputs at construction, issues the window /
//! plot / axis / series creation calls in order, then runs the host's render
//! loop. Pan (left drag) and fit (middle double-click) stay delegated to the
//! host; only the per-axis wheel zoom is handled here.

use eyre::{ensure, Result};

use crate::config::{CandleStyle, ChartConfig, ZoomConfig};
use crate::host::{
    AxisOrientation, AxisSpec, MouseButton, PlotHost, PlotSpec, SeriesKind, WindowSpec,
};
use crate::registry::AxisRegistry;
use crate::router::GestureRouter;
use crate::series::{self, CandleColumns, OhlcColumns};

/// Candlestick chart with wheel zoom routed per axis: scrolling over the
/// plot body zooms time, scrolling over the left price strip zooms price.
pub struct CandlestickChart {
    columns: CandleColumns,
    label: String,
    config: ChartConfig,
    style: CandleStyle,
    zoom: ZoomConfig,
}

impl CandlestickChart {
    /// Fails on malformed columns; no partial chart is ever shown.
    pub fn new(columns: OhlcColumns, label: impl Into<String>) -> Result<Self> {
        Ok(Self {
            columns: series::adapt(columns)?,
            label: label.into(),
            config: ChartConfig::default(),
            style: CandleStyle::default(),
            zoom: ZoomConfig::default(),
        })
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_style(mut self, style: CandleStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    /// Builds the chart on the host and runs its render loop until the
    /// window is closed. Configuration is checked before the first host call.
    pub fn show(&self, host: &mut dyn PlotHost) -> Result<()> {
        self.config.validate()?;
        self.style.validate()?;
        self.zoom.validate()?;

        let window = host.create_window(&window_spec(&self.config))?;
        let plot = host.create_plot(
            window,
            &PlotSpec {
                label: self.label.clone(),
                pan_button: MouseButton::Left,
                fit_button: MouseButton::Middle,
                legend: true,
            },
        )?;
        let time_axis = host.add_axis(
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Horizontal,
                label: "Time".to_string(),
                time_scaled: true,
            },
        )?;
        let price_axis = host.add_axis(
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Vertical,
                label: "Price".to_string(),
                time_scaled: false,
            },
        )?;
        host.add_candle_series(price_axis, &self.columns, &self.label, &self.style)?;
        host.fit_axis(price_axis)?;

        let registry = AxisRegistry::new(time_axis, [price_axis]);
        let router = GestureRouter::new(plot, registry, self.zoom.clone())?;
        while host.frame()? {
            for event in host.poll_wheel() {
                router.on_wheel(host, &event);
            }
        }
        Ok(())
    }
}

/// Line chart over paired x/y columns.
pub struct LineChart {
    inner: XyChart,
}

impl LineChart {
    pub fn new(x: Vec<f64>, y: Vec<f64>, label: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: XyChart::new(SeriesKind::Line, x, y, label.into())?,
        })
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.inner.config = config;
        self
    }

    pub fn show(&self, host: &mut dyn PlotHost) -> Result<()> {
        self.inner.show(host)
    }
}

/// Scatter chart over paired x/y columns.
pub struct ScatterChart {
    inner: XyChart,
}

impl ScatterChart {
    pub fn new(x: Vec<f64>, y: Vec<f64>, label: impl Into<String>) -> Result<Self> {
        Ok(Self {
            inner: XyChart::new(SeriesKind::Scatter, x, y, label.into())?,
        })
    }

    pub fn with_config(mut self, config: ChartConfig) -> Self {
        self.inner.config = config;
        self
    }

    pub fn show(&self, host: &mut dyn PlotHost) -> Result<()> {
        self.inner.show(host)
    }
}

struct XyChart {
    kind: SeriesKind,
    x: Vec<f64>,
    y: Vec<f64>,
    label: String,
    config: ChartConfig,
}

impl XyChart {
    fn new(kind: SeriesKind, x: Vec<f64>, y: Vec<f64>, label: String) -> Result<Self> {
        ensure!(!x.is_empty(), "series data is empty");
        ensure!(
            x.len() == y.len(),
            "x/y column lengths differ: x={}, y={}",
            x.len(),
            y.len()
        );
        Ok(Self {
            kind,
            x,
            y,
            label,
            config: ChartConfig::default(),
        })
    }

    fn show(&self, host: &mut dyn PlotHost) -> Result<()> {
        self.config.validate()?;

        let window = host.create_window(&window_spec(&self.config))?;
        let plot = host.create_plot(
            window,
            &PlotSpec {
                label: self.label.clone(),
                pan_button: MouseButton::Left,
                fit_button: MouseButton::Left,
                legend: true,
            },
        )?;
        host.add_axis(
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Horizontal,
                label: "X".to_string(),
                time_scaled: false,
            },
        )?;
        let y_axis = host.add_axis(
            plot,
            &AxisSpec {
                orientation: AxisOrientation::Vertical,
                label: "Y".to_string(),
                time_scaled: false,
            },
        )?;
        host.add_xy_series(y_axis, self.kind, &self.x, &self.y, &self.label)?;
        host.fit_axis(y_axis)?;

        while host.frame()? {
            // Wheel events are still drained so they cannot pile up in the
            // host queue; XY charts keep the host's built-in interactions.
            host.poll_wheel();
        }
        Ok(())
    }
}

fn window_spec(config: &ChartConfig) -> WindowSpec {
    WindowSpec {
        title: config.title.clone(),
        width: config.width,
        height: config.height,
    }
}
