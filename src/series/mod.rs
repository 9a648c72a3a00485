//! Series generation for the twelve dashboard metrics
//!
//! Every series is synthesized on demand from a fixed formula; nothing is
//! stored or cached.

pub mod error;
pub mod generator;
pub mod types;

pub use error::{SeriesError, SeriesResult};
pub use generator::{generate, generate_by_name, parse_length, values_at};
pub use types::{Cadence, MetricId, MetricSeries, SeriesPoint};
