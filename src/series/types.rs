//! Core data types for the series generator
//!
//! This module defines the fundamental types shared by the generator and
//! the view renderer:
//! - `MetricId`: The closed set of tracked metrics
//! - `Cadence`: Spacing between consecutive points
//! - `SeriesPoint`: One dated row of per-category values
//! - `MetricSeries`: An ordered run of points for one metric

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::SeriesError;

/// Identifier of one of the twelve tracked metrics
///
/// Declaration order is the dashboard's table order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    /// Prediction market volume by market type
    PredictionMarkets,
    /// Real-world-asset tokenisation AUM
    RwaTokenisation,
    /// x402 protocol volume
    X402Volume,
    /// Onchain vault AUM
    VaultAum,
    /// Perpetual futures open interest
    PerpOi,
    /// Cumulative token buybacks
    Buyback,
    /// Jito tips on Solana
    SolanaMev,
    /// Share of ZEC held in the shielded pool
    ShieldedZec,
    /// Ethereum blob fee versus calldata cost
    BlobFees,
    /// Crypto card spend
    CryptoCards,
    /// Spot BTC ETF holdings
    BtcEtf,
    /// Stablecoin borrow APY
    StablecoinRates,
}

impl MetricId {
    /// Get all metrics in table order
    pub fn all() -> &'static [MetricId] {
        &[
            MetricId::PredictionMarkets,
            MetricId::RwaTokenisation,
            MetricId::X402Volume,
            MetricId::VaultAum,
            MetricId::PerpOi,
            MetricId::Buyback,
            MetricId::SolanaMev,
            MetricId::ShieldedZec,
            MetricId::BlobFees,
            MetricId::CryptoCards,
            MetricId::BtcEtf,
            MetricId::StablecoinRates,
        ]
    }

    /// Wire identifier (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::PredictionMarkets => "prediction_markets",
            MetricId::RwaTokenisation => "rwa_tokenisation",
            MetricId::X402Volume => "x402_volume",
            MetricId::VaultAum => "vault_aum",
            MetricId::PerpOi => "perp_oi",
            MetricId::Buyback => "buyback",
            MetricId::SolanaMev => "solana_mev",
            MetricId::ShieldedZec => "shielded_zec",
            MetricId::BlobFees => "blob_fees",
            MetricId::CryptoCards => "crypto_cards",
            MetricId::BtcEtf => "btc_etf",
            MetricId::StablecoinRates => "stablecoin_rates",
        }
    }

    /// Category names, in the order values appear in each point
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            MetricId::PredictionMarkets => &["sports", "economics", "tech_science", "politics"],
            MetricId::RwaTokenisation => {
                &["yield_bearing", "private_credit", "tokenised_equities"]
            }
            MetricId::X402Volume => &["volume"],
            MetricId::VaultAum => &["Morpho", "Euler", "Yearn"],
            MetricId::PerpOi => &["Hyperliquid", "Aster"],
            MetricId::Buyback => &["cumulative"],
            MetricId::SolanaMev => &["jito_tips"],
            MetricId::ShieldedZec => &["shielded_pct"],
            MetricId::BlobFees => &["blob_fee", "calldata"],
            MetricId::CryptoCards => &["volume"],
            MetricId::BtcEtf => &["BlackRock", "Fidelity"],
            MetricId::StablecoinRates => &["borrow_apy"],
        }
    }

    /// Spacing between points
    pub fn cadence(&self) -> Cadence {
        match self {
            MetricId::CryptoCards => Cadence::Weekly,
            _ => Cadence::Daily,
        }
    }

    /// Number of points generated when no override is given
    pub fn default_length(&self) -> usize {
        match self.cadence() {
            Cadence::Daily => 90,
            Cadence::Weekly => 30,
        }
    }
}

impl std::fmt::Display for MetricId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricId {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricId::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| SeriesError::UnknownMetric(s.to_string()))
    }
}

/// Fixed interval between consecutive points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One point per UTC day
    Daily,
    /// One point per week, anchored on Sunday
    Weekly,
}

impl Cadence {
    /// Distance between two consecutive points
    pub fn step(&self) -> Duration {
        match self {
            Cadence::Daily => Duration::days(1),
            Cadence::Weekly => Duration::weeks(1),
        }
    }

    /// Round a timestamp down to the nearest cadence boundary
    ///
    /// Daily boundaries are UTC midnights; weekly boundaries are the UTC
    /// midnight of each Sunday. Returns `None` when that boundary lies
    /// before the earliest representable date.
    pub fn align(&self, at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let midnight = at.date_naive().and_time(NaiveTime::MIN).and_utc();
        match self {
            Cadence::Daily => Some(midnight),
            Cadence::Weekly => {
                let back = at.weekday().num_days_from_sunday() as i64;
                midnight.checked_sub_signed(Duration::days(back))
            }
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cadence::Daily => write!(f, "daily"),
            Cadence::Weekly => write!(f, "weekly"),
        }
    }
}

/// A single dated row of a series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesPoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// One value per category, aligned with `MetricSeries::categories`
    pub values: Vec<f64>,
}

impl SeriesPoint {
    /// Sum of all category values
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Ordered series of points for one metric
///
/// Timestamps are strictly increasing at exactly `cadence` spacing, and
/// every point carries one value per entry in `categories`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricSeries {
    /// Which metric this series belongs to
    pub metric: MetricId,
    /// Spacing between points
    pub cadence: Cadence,
    /// Category names
    pub categories: &'static [&'static str],
    /// Points, oldest first
    pub points: Vec<SeriesPoint>,
}

impl MetricSeries {
    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First (oldest) point
    pub fn first(&self) -> Option<&SeriesPoint> {
        self.points.first()
    }

    /// Last (newest) point
    pub fn last(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }

    /// Position of a category in each point's values
    pub fn category_index(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|c| *c == category)
    }

    /// Value of `category` at point `index`
    pub fn value(&self, index: usize, category: &str) -> Option<f64> {
        let col = self.category_index(category)?;
        self.points.get(index).and_then(|p| p.values.get(col)).copied()
    }

    /// All values of one category, oldest first
    pub fn column(&self, category: &str) -> Option<Vec<f64>> {
        let col = self.category_index(category)?;
        Some(self.points.iter().map(|p| p.values[col]).collect())
    }

    /// All timestamps, oldest first
    pub fn timestamps(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.timestamp).collect()
    }
}
