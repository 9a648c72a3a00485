//! View Renderer
//!
//! Turns a selection into something to display: the home summary (one
//! headline per metric) or a single metric's chart plus its headline.
//!
//! Headlines are derived from the generated series. The latest value is the
//! newest point's basis value and the change is measured from the oldest
//! point to the newest.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

use super::chart::{ChartSpec, Palette};
use super::descriptor::{describe, HeadlineBasis, MetricDescriptor};
use crate::series::{generate, MetricId, MetricSeries, SeriesError, SeriesResult};

/// What the user picked: the home summary or one metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    /// Summary of every metric
    Home,
    /// A single metric's detail view
    Metric(MetricId),
}

impl Selection {
    /// All thirteen selections, `home` first, then metrics in table order
    pub fn all() -> Vec<Selection> {
        std::iter::once(Selection::Home)
            .chain(MetricId::all().iter().copied().map(Selection::Metric))
            .collect()
    }

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Home => "home",
            Selection::Metric(metric) => metric.as_str(),
        }
    }
}

impl FromStr for Selection {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "home" {
            Ok(Selection::Home)
        } else {
            s.parse().map(Selection::Metric)
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest value and change for one metric
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Headline {
    /// Metric identifier
    pub metric: MetricId,
    /// Display name
    pub name: &'static str,
    /// Formatted latest value, e.g. `$545M`
    pub value: String,
    /// Formatted change over the series, e.g. `+445.0%`
    pub change: String,
}

/// Detail view of one metric
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricView {
    /// Static metadata
    pub descriptor: MetricDescriptor,
    /// Chart to draw
    pub chart: ChartSpec,
    /// Headline pair
    pub headline: Headline,
}

/// Rendered result of a selection
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    /// One headline per metric, in table order
    Home { headlines: Vec<Headline> },
    /// One metric's chart and headline
    Metric(MetricView),
}

/// Renders views from freshly generated series
///
/// Holds only the palette; every call regenerates its data.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    palette: Palette,
}

impl Renderer {
    /// Create a renderer with a custom palette
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Palette used for category colors
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render one metric's detail view
    pub fn render(&self, metric: MetricId, as_of: DateTime<Utc>) -> SeriesResult<MetricView> {
        let descriptor = describe(metric);
        let series = generate(metric, as_of, None)?;

        let chart = ChartSpec::from_series(
            descriptor.chart_title,
            descriptor.kind,
            &series,
            &self.palette,
        );

        Ok(MetricView {
            descriptor: *descriptor,
            chart,
            headline: headline_from_series(descriptor, &series),
        })
    }

    /// Headline for one metric
    pub fn headline(&self, metric: MetricId, as_of: DateTime<Utc>) -> SeriesResult<Headline> {
        let descriptor = describe(metric);
        let series = generate(metric, as_of, None)?;
        Ok(headline_from_series(descriptor, &series))
    }

    /// Headlines for every metric, in table order
    pub fn home(&self, as_of: DateTime<Utc>) -> SeriesResult<Vec<Headline>> {
        MetricId::all()
            .iter()
            .map(|metric| self.headline(*metric, as_of))
            .collect()
    }

    /// Render any selection
    pub fn render_selection(
        &self,
        selection: Selection,
        as_of: DateTime<Utc>,
    ) -> SeriesResult<View> {
        tracing::debug!(selection = %selection, "Rendering view");

        match selection {
            Selection::Home => Ok(View::Home {
                headlines: self.home(as_of)?,
            }),
            Selection::Metric(metric) => self.render(metric, as_of).map(View::Metric),
        }
    }

    /// Render a selection given by its textual identifier
    pub fn render_str(&self, selection: &str, as_of: DateTime<Utc>) -> SeriesResult<View> {
        self.render_selection(selection.parse()?, as_of)
    }
}

/// Build the headline pair from a series
pub fn headline_from_series(descriptor: &MetricDescriptor, series: &MetricSeries) -> Headline {
    let basis = |index: usize| -> f64 {
        let point = &series.points[index];
        match descriptor.basis {
            HeadlineBasis::Total => point.total(),
            HeadlineBasis::Category(name) => series
                .category_index(name)
                .map(|col| point.values[col])
                .unwrap_or_else(|| point.total()),
        }
    };

    let (first, last) = if series.is_empty() {
        (0.0, 0.0)
    } else {
        (basis(0), basis(series.len() - 1))
    };

    Headline {
        metric: descriptor.metric,
        name: descriptor.name,
        value: descriptor.unit.format(last),
        change: format_change(first, last),
    }
}

/// Percentage change from `first` to `last`, signed, one decimal
pub fn format_change(first: f64, last: f64) -> String {
    if first == 0.0 {
        return "0.0%".to_string();
    }
    format!("{:+.1}%", (last - first) / first * 100.0)
}
