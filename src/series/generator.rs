//! Series Generator
//!
//! Produces the synthetic series behind every chart. Each metric is a fixed
//! arithmetic progression over the zero-based point index `i` (0 = oldest),
//! so a series is fully determined by its metric, its anchor time and its
//! length.

use chrono::{DateTime, Utc};

use super::error::{SeriesError, SeriesResult};
use super::types::{MetricId, MetricSeries, SeriesPoint};

/// Generate the series for `metric`, ending at the cadence boundary at or
/// before `as_of`.
///
/// `length` overrides the metric's default number of points and must be
/// positive. Every timestamp of the result, including the oldest, is a
/// representable date; otherwise the call fails with `InvalidLength` (for an
/// override) or `OutOfRange` (for the default length).
pub fn generate(
    metric: MetricId,
    as_of: DateTime<Utc>,
    length: Option<i64>,
) -> SeriesResult<MetricSeries> {
    let len = resolve_length(metric, length)?;
    let cadence = metric.cadence();
    let end = cadence
        .align(as_of)
        .ok_or_else(|| SeriesError::OutOfRange(as_of.timestamp_millis().to_string()))?
        .timestamp_millis();
    let step = cadence.step().num_milliseconds();

    if series_start(end, step, len).is_none() {
        return Err(match length {
            Some(n) => SeriesError::InvalidLength(n.to_string()),
            None => SeriesError::OutOfRange(as_of.timestamp_millis().to_string()),
        });
    }

    let points = (0..len)
        .map(|i| SeriesPoint {
            timestamp: end - (len - 1 - i) as i64 * step,
            values: values_at(metric, i),
        })
        .collect();

    tracing::trace!(metric = %metric, length = len, "Generated series");

    Ok(MetricSeries {
        metric,
        cadence,
        categories: metric.categories(),
        points,
    })
}

/// Generate a series from a textual metric identifier
pub fn generate_by_name(
    metric: &str,
    as_of: DateTime<Utc>,
    length: Option<i64>,
) -> SeriesResult<MetricSeries> {
    generate(metric.parse()?, as_of, length)
}

/// Parse a textual length override (e.g. a query parameter)
///
/// Anything that is not a positive integer is rejected, including
/// fractional values such as `2.5`.
pub fn parse_length(s: &str) -> SeriesResult<i64> {
    let trimmed = s.trim();
    let n: i64 = trimmed
        .parse()
        .map_err(|_| SeriesError::InvalidLength(trimmed.to_string()))?;
    if n <= 0 {
        return Err(SeriesError::InvalidLength(n.to_string()));
    }
    Ok(n)
}

fn resolve_length(metric: MetricId, length: Option<i64>) -> SeriesResult<usize> {
    match length {
        None => Ok(metric.default_length()),
        Some(n) if n > 0 => {
            usize::try_from(n).map_err(|_| SeriesError::InvalidLength(n.to_string()))
        }
        Some(n) => Err(SeriesError::InvalidLength(n.to_string())),
    }
}

/// Timestamp of the oldest point, if it is a representable date
fn series_start(end: i64, step: i64, len: usize) -> Option<i64> {
    let span = i64::try_from(len - 1).ok()?.checked_mul(step)?;
    let start = end.checked_sub(span)?;
    DateTime::from_timestamp_millis(start).map(|_| start)
}

/// Per-category values of `metric` at index `i`, in category order
pub fn values_at(metric: MetricId, i: usize) -> Vec<f64> {
    let x = i as f64;
    let cycle = |period: usize| (i % period) as f64;

    match metric {
        MetricId::PredictionMarkets => vec![
            50.0 + 2.0 * x,
            30.0 + 1.5 * x,
            20.0 + x,
            40.0 + 1.8 * x,
        ],
        MetricId::RwaTokenisation => vec![
            2000.0 + 50.0 * x,
            1500.0 + 40.0 * x,
            1000.0 + 30.0 * x,
        ],
        MetricId::X402Volume => vec![100.0 + 5.0 * x],
        MetricId::VaultAum => vec![
            3000.0 + 40.0 * x,
            2500.0 + 35.0 * x,
            2000.0 + 25.0 * x,
        ],
        MetricId::PerpOi => vec![1500.0 + 30.0 * x, 800.0 + 20.0 * x],
        MetricId::Buyback => vec![500.0 + 8.0 * x],
        MetricId::SolanaMev => vec![50_000.0 + 1000.0 * x],
        MetricId::ShieldedZec => vec![42.0 + cycle(20) * 0.1],
        MetricId::BlobFees => vec![
            0.015 + cycle(15) * 0.002,
            0.05 + cycle(10) * 0.003,
        ],
        MetricId::CryptoCards => vec![150.0 + 10.0 * x],
        MetricId::BtcEtf => vec![400_000.0 + 2000.0 * x, 300_000.0 + 1500.0 * x],
        MetricId::StablecoinRates => vec![7.0 + cycle(20) * 0.3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Cadence;
    use chrono::TimeZone;

    const EPS: f64 = 1e-9;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 31, 18, 30, 0).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_default_lengths() {
        for metric in MetricId::all() {
            let series = generate(*metric, as_of(), None).unwrap();
            let expected = if *metric == MetricId::CryptoCards { 30 } else { 90 };
            assert_eq!(series.len(), expected, "{}", metric);
        }
    }

    #[test]
    fn test_timestamps_follow_cadence() {
        for metric in MetricId::all() {
            let series = generate(*metric, as_of(), None).unwrap();
            let step = metric.cadence().step().num_milliseconds();

            for pair in series.points.windows(2) {
                assert_eq!(pair[1].timestamp - pair[0].timestamp, step, "{}", metric);
            }

            let last = series.last().unwrap().timestamp;
            assert_eq!(
                last,
                metric.cadence().align(as_of()).unwrap().timestamp_millis(),
                "{}",
                metric
            );
        }
    }

    #[test]
    fn test_weekly_series_ends_on_sunday() {
        // 2026-03-31 is a Tuesday
        let series = generate(MetricId::CryptoCards, as_of(), None).unwrap();
        let last = series.last().unwrap().timestamp;
        let expected = Utc.with_ymd_and_hms(2026, 3, 29, 0, 0, 0).unwrap();
        assert_eq!(last, expected.timestamp_millis());
        assert_eq!(series.cadence, Cadence::Weekly);
    }

    #[test]
    fn test_categories_consistent_across_points() {
        for metric in MetricId::all() {
            let series = generate(*metric, as_of(), None).unwrap();
            assert_eq!(series.categories, metric.categories());
            assert!(series
                .points
                .iter()
                .all(|p| p.values.len() == series.categories.len()));
        }
    }

    #[test]
    fn test_x402_endpoints() {
        let series = generate(MetricId::X402Volume, as_of(), None).unwrap();
        assert_close(series.value(0, "volume").unwrap(), 100.0);
        assert_close(series.value(89, "volume").unwrap(), 545.0);
    }

    #[test]
    fn test_shielded_zec_cycles() {
        let series = generate(MetricId::ShieldedZec, as_of(), None).unwrap();
        assert_close(series.value(19, "shielded_pct").unwrap(), 43.9);
        assert_close(series.value(20, "shielded_pct").unwrap(), 42.0);
        assert_close(series.value(25, "shielded_pct").unwrap(), 42.5);
    }

    #[test]
    fn test_formulas() {
        type Formula = fn(usize) -> f64;
        let cases: [(MetricId, &str, Formula); 22] = [
            (MetricId::PredictionMarkets, "sports", |i| 50.0 + 2.0 * i as f64),
            (MetricId::PredictionMarkets, "economics", |i| 30.0 + 1.5 * i as f64),
            (MetricId::PredictionMarkets, "tech_science", |i| 20.0 + i as f64),
            (MetricId::PredictionMarkets, "politics", |i| 40.0 + 1.8 * i as f64),
            (MetricId::RwaTokenisation, "yield_bearing", |i| 2000.0 + 50.0 * i as f64),
            (MetricId::RwaTokenisation, "private_credit", |i| 1500.0 + 40.0 * i as f64),
            (MetricId::RwaTokenisation, "tokenised_equities", |i| 1000.0 + 30.0 * i as f64),
            (MetricId::X402Volume, "volume", |i| 100.0 + 5.0 * i as f64),
            (MetricId::VaultAum, "Morpho", |i| 3000.0 + 40.0 * i as f64),
            (MetricId::VaultAum, "Euler", |i| 2500.0 + 35.0 * i as f64),
            (MetricId::VaultAum, "Yearn", |i| 2000.0 + 25.0 * i as f64),
            (MetricId::PerpOi, "Hyperliquid", |i| 1500.0 + 30.0 * i as f64),
            (MetricId::PerpOi, "Aster", |i| 800.0 + 20.0 * i as f64),
            (MetricId::Buyback, "cumulative", |i| 500.0 + 8.0 * i as f64),
            (MetricId::SolanaMev, "jito_tips", |i| 50_000.0 + 1000.0 * i as f64),
            (MetricId::ShieldedZec, "shielded_pct", |i| 42.0 + (i % 20) as f64 * 0.1),
            (MetricId::BlobFees, "blob_fee", |i| 0.015 + (i % 15) as f64 * 0.002),
            (MetricId::BlobFees, "calldata", |i| 0.05 + (i % 10) as f64 * 0.003),
            (MetricId::CryptoCards, "volume", |i| 150.0 + 10.0 * i as f64),
            (MetricId::BtcEtf, "BlackRock", |i| 400_000.0 + 2000.0 * i as f64),
            (MetricId::BtcEtf, "Fidelity", |i| 300_000.0 + 1500.0 * i as f64),
            (MetricId::StablecoinRates, "borrow_apy", |i| 7.0 + (i % 20) as f64 * 0.3),
        ];

        for (metric, category, formula) in cases {
            let series = generate(metric, as_of(), None).unwrap();
            for i in 0..series.len() {
                let actual = series.value(i, category).unwrap();
                let expected = formula(i);
                assert!(
                    (actual - expected).abs() < EPS,
                    "{}.{}[{}]: expected {}, got {}",
                    metric,
                    category,
                    i,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_blob_periods_differ() {
        let series = generate(MetricId::BlobFees, as_of(), None).unwrap();
        // i = 12: blob_fee still climbing, calldata already wrapped
        assert_close(series.value(12, "blob_fee").unwrap(), 0.015 + 12.0 * 0.002);
        assert_close(series.value(12, "calldata").unwrap(), 0.05 + 2.0 * 0.003);
    }

    #[test]
    fn test_length_override() {
        let series = generate(MetricId::Buyback, as_of(), Some(7)).unwrap();
        assert_eq!(series.len(), 7);
        assert_close(series.value(0, "cumulative").unwrap(), 500.0);
        assert_close(series.value(6, "cumulative").unwrap(), 548.0);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(
            generate(MetricId::Buyback, as_of(), Some(0)),
            Err(SeriesError::InvalidLength("0".to_string()))
        );
        assert_eq!(
            generate(MetricId::Buyback, as_of(), Some(-3)),
            Err(SeriesError::InvalidLength("-3".to_string()))
        );
    }

    #[test]
    fn test_length_beyond_date_range() {
        assert_eq!(
            generate(MetricId::Buyback, as_of(), Some(i64::MAX)),
            Err(SeriesError::InvalidLength(i64::MAX.to_string()))
        );
        // Representable span arithmetic, but the oldest day predates the calendar
        assert_eq!(
            generate(MetricId::Buyback, as_of(), Some(1_000_000_000)),
            Err(SeriesError::InvalidLength("1000000000".to_string()))
        );
    }

    #[test]
    fn test_anchor_at_date_range_floor() {
        let earliest = DateTime::<Utc>::MIN_UTC;
        assert!(matches!(
            generate(MetricId::CryptoCards, earliest, None),
            Err(SeriesError::OutOfRange(_))
        ));
        assert!(matches!(
            generate(MetricId::Buyback, earliest, None),
            Err(SeriesError::OutOfRange(_))
        ));

        // A single daily point at the floor is still representable
        let series = generate(MetricId::Buyback, earliest, Some(1)).unwrap();
        assert_eq!(series.points[0].timestamp, earliest.timestamp_millis());
    }

    #[test]
    fn test_unknown_metric() {
        assert_eq!(
            generate_by_name("dogecoin_memes", as_of(), None),
            Err(SeriesError::UnknownMetric("dogecoin_memes".to_string()))
        );
        assert!(generate_by_name("perp_oi", as_of(), None).is_ok());
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("30"), Ok(30));
        assert_eq!(parse_length(" 12 "), Ok(12));
        assert!(matches!(parse_length("0"), Err(SeriesError::InvalidLength(_))));
        assert!(matches!(parse_length("-3"), Err(SeriesError::InvalidLength(_))));
        assert!(matches!(parse_length("2.5"), Err(SeriesError::InvalidLength(_))));
        assert!(matches!(parse_length("ten"), Err(SeriesError::InvalidLength(_))));
    }

    #[test]
    fn test_deterministic() {
        let a = generate(MetricId::BlobFees, as_of(), None).unwrap();
        let b = generate(MetricId::BlobFees, as_of(), None).unwrap();
        assert_eq!(a, b);
    }
}
