//! Metric descriptors
//!
//! Static display metadata for each metric. Both the home summary and the
//! per-metric detail view read from this single table.

use serde::Serialize;

use super::chart::ChartKind;
use crate::series::MetricId;

/// Display unit of a metric's headline value
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// US dollars, series values expressed in millions
    UsdMillions,
    /// Percentage points
    Percent,
    /// Ether
    Eth,
    /// Solana
    Sol,
    /// Bitcoin
    Btc,
}

impl Unit {
    /// Format a raw series value for display
    pub fn format(&self, value: f64) -> String {
        match self {
            Unit::UsdMillions => {
                if value.abs() >= 1000.0 {
                    format!("${:.1}B", value / 1000.0)
                } else {
                    format!("${:.0}M", value)
                }
            }
            Unit::Percent => format!("{:.1}%", value),
            Unit::Eth => format!("{:.3} ETH", value),
            Unit::Sol => compact(value, "SOL"),
            Unit::Btc => compact(value, "BTC"),
        }
    }
}

fn compact(value: f64, symbol: &str) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M {}", value / 1_000_000.0, symbol)
    } else if abs >= 1_000.0 {
        format!("{:.1}K {}", value / 1_000.0, symbol)
    } else {
        format!("{:.0} {}", value, symbol)
    }
}

/// Which value a headline summarizes
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type", content = "category")]
pub enum HeadlineBasis {
    /// Sum of all categories
    Total,
    /// A single named category
    Category(&'static str),
}

/// Static metadata for one metric
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MetricDescriptor {
    /// Metric identifier
    pub metric: MetricId,
    /// Short name used on the home view
    pub name: &'static str,
    /// Detail page title
    pub title: &'static str,
    /// Chart title
    pub chart_title: &'static str,
    /// Optional caption under the title
    pub caption: Option<&'static str>,
    /// Headline display unit
    pub unit: Unit,
    /// How the chart is drawn
    pub kind: ChartKind,
    /// What the headline summarizes
    pub basis: HeadlineBasis,
}

const fn entry(
    metric: MetricId,
    name: &'static str,
    title: &'static str,
    chart_title: &'static str,
    unit: Unit,
    kind: ChartKind,
) -> MetricDescriptor {
    MetricDescriptor {
        metric,
        name,
        title,
        chart_title,
        caption: None,
        unit,
        kind,
        basis: HeadlineBasis::Total,
    }
}

/// Descriptor table, in dashboard order
pub static DESCRIPTORS: [MetricDescriptor; 12] = [
    MetricDescriptor {
        caption: Some("Weekly total prediction market trading volume"),
        ..entry(
            MetricId::PredictionMarkets,
            "Prediction Markets",
            "Prediction Market Volumes by Market-Type",
            "Market Volume",
            Unit::UsdMillions,
            ChartKind::StackedArea,
        )
    },
    entry(
        MetricId::RwaTokenisation,
        "RWA Tokenisation",
        "RWA Onchain Tokenisation AUM",
        "RWA AUM",
        Unit::UsdMillions,
        ChartKind::StackedArea,
    ),
    entry(
        MetricId::X402Volume,
        "x402 Volume",
        "x402 Volume",
        "x402 Protocol Volume",
        Unit::UsdMillions,
        ChartKind::Line,
    ),
    entry(
        MetricId::VaultAum,
        "Vault AUM",
        "Onchain Vault AUM",
        "Vault AUM",
        Unit::UsdMillions,
        ChartKind::StackedArea,
    ),
    entry(
        MetricId::PerpOi,
        "Perp Futures OI",
        "Perpetual Futures Open Interest",
        "Perp OI",
        Unit::UsdMillions,
        ChartKind::StackedArea,
    ),
    entry(
        MetricId::Buyback,
        "Buyback Activity",
        "Buyback Activity",
        "Token Buybacks",
        Unit::UsdMillions,
        ChartKind::Line,
    ),
    entry(
        MetricId::SolanaMev,
        "Solana MEV",
        "Solana MEV Extraction",
        "Jito Tips",
        Unit::Sol,
        ChartKind::Line,
    ),
    entry(
        MetricId::ShieldedZec,
        "Shielded ZEC",
        "Shielded ZEC as Privacy Proxy",
        "Shielded %",
        Unit::Percent,
        ChartKind::Line,
    ),
    // Blob fee and calldata are alternatives, so the headline tracks the blob fee only
    MetricDescriptor {
        basis: HeadlineBasis::Category("blob_fee"),
        ..entry(
            MetricId::BlobFees,
            "Blob Fees",
            "Ethereum's Blob Fee Floor",
            "Blob Fee vs Calldata",
            Unit::Eth,
            ChartKind::DualLine,
        )
    },
    entry(
        MetricId::CryptoCards,
        "Crypto Cards",
        "Crypto Cards Spend Volume",
        "Weekly Card Spend",
        Unit::UsdMillions,
        ChartKind::Bar,
    ),
    entry(
        MetricId::BtcEtf,
        "BTC ETF AUM",
        "Spot BTC ETF AUM",
        "BTC ETF Holdings",
        Unit::Btc,
        ChartKind::StackedArea,
    ),
    entry(
        MetricId::StablecoinRates,
        "Stablecoin Rates",
        "Onchain Stablecoin Borrow Rates",
        "Aave USDC Borrow APY",
        Unit::Percent,
        ChartKind::Line,
    ),
];

/// Look up the descriptor for a metric
pub fn describe(metric: MetricId) -> &'static MetricDescriptor {
    // Table order matches `MetricId::all()`
    &DESCRIPTORS[metric as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for (descriptor, metric) in DESCRIPTORS.iter().zip(MetricId::all()) {
            assert_eq!(descriptor.metric, *metric);
            assert_eq!(describe(*metric).metric, *metric);
        }
    }

    #[test]
    fn test_chart_kinds() {
        for metric in MetricId::all() {
            let kind = describe(*metric).kind;
            match metric {
                MetricId::PredictionMarkets
                | MetricId::RwaTokenisation
                | MetricId::VaultAum
                | MetricId::PerpOi
                | MetricId::BtcEtf => assert_eq!(kind, ChartKind::StackedArea),
                MetricId::BlobFees => assert_eq!(kind, ChartKind::DualLine),
                MetricId::CryptoCards => assert_eq!(kind, ChartKind::Bar),
                _ => {
                    assert_eq!(metric.categories().len(), 1, "{}", metric);
                    assert_eq!(kind, ChartKind::Line);
                }
            }
        }
    }

    #[test]
    fn test_category_basis_names_exist() {
        for descriptor in DESCRIPTORS.iter() {
            if let HeadlineBasis::Category(name) = descriptor.basis {
                assert!(descriptor.metric.categories().contains(&name));
            }
        }
    }

    #[test]
    fn test_unit_format() {
        assert_eq!(Unit::UsdMillions.format(545.0), "$545M");
        assert_eq!(Unit::UsdMillions.format(15180.0), "$15.2B");
        assert_eq!(Unit::Percent.format(42.9), "42.9%");
        assert_eq!(Unit::Eth.format(0.043), "0.043 ETH");
        assert_eq!(Unit::Sol.format(139_000.0), "139.0K SOL");
        assert_eq!(Unit::Btc.format(1_011_500.0), "1.0M BTC");
        assert_eq!(Unit::Btc.format(250.0), "250 BTC");
    }
}
