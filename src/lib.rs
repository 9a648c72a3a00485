//! # Chartwatch
//!
//! 12 Charts to Watch - a dashboard backend that generates crypto-market
//! time series and shapes them into charts and headline figures.
//!
//! ## Features
//!
//! - **Deterministic series**: Twelve metrics, each a fixed formula of the point index
//! - **Chart specs**: Line, stacked-area, dual-line and bar charts with stable colors
//! - **Headlines**: Latest value and change derived from the series itself
//! - **REST API**: JSON views, raw series and CSV export over Axum
//!
//! ## Modules
//!
//! - [`series`]: Series generator
//! - [`view`]: Chart and headline rendering
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use chartwatch::series::{generate, MetricId};
//! use chartwatch::view::{Renderer, Selection, View};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//!
//! // Raw series
//! let series = generate(MetricId::X402Volume, now, None).unwrap();
//! assert_eq!(series.len(), 90);
//!
//! // Home summary
//! let renderer = Renderer::default();
//! match renderer.render_selection(Selection::Home, now).unwrap() {
//!     View::Home { headlines } => assert_eq!(headlines.len(), 12),
//!     View::Metric(_) => unreachable!(),
//! }
//! ```

pub mod api;
pub mod config;
pub mod series;
pub mod view;

// Re-export top-level types for convenience
pub use series::{
    generate, generate_by_name, Cadence, MetricId, MetricSeries, SeriesError, SeriesPoint,
    SeriesResult,
};

pub use view::{
    ChartKind, ChartSpec, ChartTrace, Headline, MetricDescriptor, MetricView, Palette, Renderer,
    Selection, Unit, View,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, DashboardConfig, LoggingConfig};
