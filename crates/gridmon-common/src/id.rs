//! Alert identifier derivation.
//!
//! Identifiers are deterministic, derived from the metric and the rule kind
//! that produced the alert. A threshold that stays breached across many
//! evaluation passes therefore keeps one identity until the condition
//! clears, which is what dismissal operates on.

use crate::types::Metric;

/// Derives the identifier for an alert raised by `rule_kind` on `metric`.
///
/// # Examples
///
/// ```
/// use gridmon_common::id::alert_id;
/// use gridmon_common::types::Metric;
///
/// assert_eq!(alert_id(Metric::OilLevel, "threshold"), "oil_level:threshold");
/// ```
pub fn alert_id(metric: Metric, rule_kind: &str) -> String {
    format!("{metric}:{rule_kind}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_stable_across_calls() {
        assert_eq!(
            alert_id(Metric::Angle, "range"),
            alert_id(Metric::Angle, "range")
        );
    }

    #[test]
    fn ids_are_distinct_per_metric_and_rule() {
        let mut ids = HashSet::new();
        for metric in Metric::ALL {
            for rule in ["threshold", "range"] {
                assert!(ids.insert(alert_id(metric, rule)));
            }
        }
        assert_eq!(ids.len(), Metric::ALL.len() * 2);
    }
}
