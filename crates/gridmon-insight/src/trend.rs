//! Statistical trend classification over the most recent sample window.

use crate::catalog::{Guidance, SuggestionCatalog};
use gridmon_common::types::{Metric, TrendInsight};

/// Number of most-recent samples considered by the classifier.
pub const WINDOW: usize = 5;

/// Minimum |rate of change| (percent) before a predictive sentence is
/// appended to an abnormal insight.
pub const PREDICTION_RATE_GATE: f64 = 10.0;

/// Deviation sensitivity multiplier per metric. Fixed at compile time;
/// tighter values flag abnormality sooner.
fn sensitivity(metric: Metric) -> f64 {
    match metric {
        Metric::Temperature => 2.0,
        Metric::Humidity => 2.0,
        Metric::Voltage => 1.5,
        Metric::Current => 2.0,
        Metric::OilLevel => 1.5,
        Metric::Power => 2.5,
        Metric::Energy => 2.0,
        Metric::Angle => 1.2,
    }
}

/// Classifies the trend of one metric series.
///
/// Uses only the last [`WINDOW`] values (down to a 2-sample minimum);
/// returns `None` when the series is shorter than 2 samples. The result is
/// a fresh payload each time: the trend delta, an abnormality verdict
/// against the windowed mean, the matching guidance list from `catalog`,
/// and a display-formatted rate of change.
pub fn classify(series: &[f64], metric: Metric, catalog: &SuggestionCatalog) -> Option<TrendInsight> {
    if series.len() < 2 {
        return None;
    }

    let window = &series[series.len().saturating_sub(WINDOW)..];
    let first = window[0];
    let last = window[window.len() - 1];
    let trend = last - first;

    let n = window.len() as f64;
    let avg = window.iter().sum::<f64>() / n;
    // population standard deviation: divide by n, not n-1
    let variance = window.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    // A flat window has zero deviation, so this is false whenever std_dev
    // is 0 regardless of the multiplier.
    let is_abnormal = (last - avg).abs() > sensitivity(metric) * std_dev;

    // Zero-division policy: an initial value of 0 yields a 0% rate and no
    // prediction, never a non-finite value in user-facing text.
    let rate = if first.abs() < f64::EPSILON {
        0.0
    } else {
        ((last - first) / first) * 100.0
    };

    let guidance = if !is_abnormal {
        Guidance::Stable
    } else if trend > 0.0 {
        Guidance::High
    } else if trend < 0.0 {
        Guidance::Low
    } else {
        // abnormal but directionless; high/low guidance would mislead
        Guidance::Stable
    };

    let mut suggestions = catalog.suggestions(metric, guidance);

    if is_abnormal && rate.abs() > PREDICTION_RATE_GATE {
        let hours = (100.0 / rate).abs() * 24.0;
        suggestions.push(format!(
            "{} {:.1} hours",
            catalog.prediction_phrase(metric),
            hours
        ));
    }

    Some(TrendInsight {
        metric,
        trend,
        is_abnormal,
        suggestions,
        rate_of_change: format!("{rate:.1}%/hour"),
    })
}
