//! Chart specifications
//!
//! A `ChartSpec` is a rendering-agnostic description of one chart: what
//! kind of chart to draw, the x-axis timestamps, and one colored trace per
//! category. Any frontend can draw it.

use serde::Serialize;

use crate::series::{MetricId, MetricSeries};

/// Default chart colors, assigned by category position
pub const DEFAULT_PALETTE: [&str; 5] = [
    "#3b82f6", // Blue
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#f59e0b", // Amber
    "#10b981", // Emerald
];

/// How a chart should be drawn
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// One filled line
    Line,
    /// Categories drawn cumulatively, summing to a total
    StackedArea,
    /// Two independent lines on shared axes
    DualLine,
    /// One bar per point
    Bar,
}

impl ChartKind {
    /// True if trace values add up visually
    pub fn is_stacked(&self) -> bool {
        matches!(self, ChartKind::StackedArea)
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::StackedArea => write!(f, "stacked_area"),
            ChartKind::DualLine => write!(f, "dual_line"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}

/// Ordered list of colors, cycled by category index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette; returns `None` if `colors` is empty
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// Color for the category at `index`
    pub fn color(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette holds at least one color
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All colors in order
    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// One plotted category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartTrace {
    /// Category name (legend label)
    pub name: &'static str,
    /// Line, fill or bar color
    pub color: String,
    /// Values aligned with `ChartSpec::timestamps`
    pub values: Vec<f64>,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartSpec {
    /// Metric being drawn
    pub metric: MetricId,
    /// Chart title
    pub title: &'static str,
    /// How to draw it
    pub kind: ChartKind,
    /// X-axis values (Unix milliseconds), oldest first
    pub timestamps: Vec<i64>,
    /// One trace per category, in category order
    pub traces: Vec<ChartTrace>,
}

impl ChartSpec {
    /// Shape a series into a chart
    pub fn from_series(
        title: &'static str,
        kind: ChartKind,
        series: &MetricSeries,
        palette: &Palette,
    ) -> Self {
        let traces = series
            .categories
            .iter()
            .enumerate()
            .map(|(i, &name)| ChartTrace {
                name,
                color: palette.color(i).to_string(),
                values: series.points.iter().map(|p| p.values[i]).collect(),
            })
            .collect();

        Self {
            metric: series.metric,
            title,
            kind,
            timestamps: series.timestamps(),
            traces,
        }
    }

    /// Look up a trace by category name
    pub fn trace(&self, name: &str) -> Option<&ChartTrace> {
        self.traces.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::generate;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_palette_cycles() {
        let palette = Palette::new(vec!["#000".to_string(), "#fff".to_string()]).unwrap();
        assert_eq!(palette.color(0), "#000");
        assert_eq!(palette.color(1), "#fff");
        assert_eq!(palette.color(2), "#000");
        assert_eq!(palette.color(7), "#fff");
    }

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
    }

    #[test]
    fn test_from_series() {
        let as_of = Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap();
        let series = generate(MetricId::VaultAum, as_of, Some(5)).unwrap();
        let chart = ChartSpec::from_series(
            "Vault AUM",
            ChartKind::StackedArea,
            &series,
            &Palette::default(),
        );

        assert_eq!(chart.timestamps.len(), 5);
        assert_eq!(chart.traces.len(), 3);
        assert_eq!(chart.traces[0].name, "Morpho");
        assert_eq!(chart.traces[0].color, DEFAULT_PALETTE[0]);
        assert_eq!(chart.traces[2].color, DEFAULT_PALETTE[2]);

        let euler = chart.trace("Euler").unwrap();
        assert_eq!(euler.values, vec![2500.0, 2535.0, 2570.0, 2605.0, 2640.0]);
        assert!(chart.trace("Yearn").is_some());
        assert!(chart.trace("Aave").is_none());
    }

    #[test]
    fn test_chart_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&ChartKind::StackedArea).unwrap(),
            "\"stacked_area\""
        );
        assert_eq!(ChartKind::DualLine.to_string(), "dual_line");
        assert!(ChartKind::StackedArea.is_stacked());
        assert!(!ChartKind::DualLine.is_stacked());
    }
}
