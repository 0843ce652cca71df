//! Summary statistics shared by the live card view and the report
//! generator. Pure over its inputs so both consumers see identical numbers.

use gridmon_common::types::MetricStats;

/// Aggregates a metric series into `{min, max, avg, current}`.
///
/// Non-finite entries are excluded before aggregation; an empty (or fully
/// excluded) series yields `None` rather than an error. `min`/`max`/`avg`
/// are rounded to 2 decimal places.
pub fn aggregate(series: &[f64], current: f64) -> Option<MetricStats> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0usize;

    for &value in series {
        if !value.is_finite() {
            continue;
        }
        min = min.min(value);
        max = max.max(value);
        sum += value;
        count += 1;
    }

    if count == 0 {
        return None;
    }

    Some(MetricStats {
        min: round2(min),
        max: round2(max),
        avg: round2(sum / count as f64),
        current,
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_simple_series() {
        let stats = aggregate(&[10.0, 20.0, 30.0], 30.0).unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.avg, 20.0);
        assert_eq!(stats.current, 30.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        let stats = aggregate(&[1.0, 2.0, 2.0], 2.0).unwrap();
        assert_eq!(stats.avg, 1.67);
    }

    #[test]
    fn empty_series_yields_none() {
        assert!(aggregate(&[], 0.0).is_none());
    }

    #[test]
    fn nan_entries_are_excluded() {
        let stats = aggregate(&[f64::NAN, 5.0, f64::NAN], 5.0).unwrap();
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.avg, 5.0);
    }
}
