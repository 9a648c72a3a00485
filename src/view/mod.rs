//! View rendering
//!
//! Shapes generated series into chart specifications and headline pairs
//! for the dashboard's home and detail views.

pub mod chart;
pub mod descriptor;
pub mod renderer;

pub use chart::{ChartKind, ChartSpec, ChartTrace, Palette, DEFAULT_PALETTE};
pub use descriptor::{describe, HeadlineBasis, MetricDescriptor, Unit, DESCRIPTORS};
pub use renderer::{format_change, headline_from_series, Headline, MetricView, Renderer, Selection, View};
