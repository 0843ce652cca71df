//! Stateful alert lifecycle manager.

use crate::rules::{AngleRangeRule, OilLevelRule};
use crate::AlertRule;
use gridmon_common::types::{AlertQueue, Metric, MetricIndicator, TelemetrySample};

/// Holds the active alert set and the modal-visibility flag, and evaluates
/// every registered [`AlertRule`] against the latest published sample.
///
/// Each evaluation pass replaces the active list wholesale; alerts carry
/// stable `(metric, rule)` identifiers, so an ongoing breach is the same
/// alert across passes and dismissal operates on the condition.
pub struct AlertEngine {
    rules: Vec<Box<dyn AlertRule>>,
    queue: AlertQueue,
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::with_rules(vec![
            Box::new(OilLevelRule::default()),
            Box::new(AngleRangeRule::default()),
        ])
    }
}

impl AlertEngine {
    pub fn with_rules(rules: Vec<Box<dyn AlertRule>>) -> Self {
        Self {
            rules,
            queue: AlertQueue::default(),
        }
    }

    pub fn rules(&self) -> &[Box<dyn AlertRule>] {
        &self.rules
    }

    /// The live queue state the presentation layer binds to.
    pub fn queue(&self) -> &AlertQueue {
        &self.queue
    }

    /// Evaluates the latest sample against all rules, replacing the active
    /// alert list. A non-empty result forces the modal visible; an empty
    /// result clears the list but leaves the flag as it was.
    pub fn evaluate(&mut self, sample: &TelemetrySample) -> &AlertQueue {
        let alerts: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(sample))
            .collect();

        if !alerts.is_empty() {
            for alert in &alerts {
                tracing::debug!(
                    id = %alert.id,
                    metric = %alert.metric,
                    value = alert.current_value,
                    "critical threshold breached"
                );
            }
            self.queue.modal_visible = true;
        }
        self.queue.alerts = alerts;
        &self.queue
    }

    /// Removes one alert by identifier. Emptying the queue lowers the
    /// modal flag.
    pub fn dismiss(&mut self, id: &str) {
        self.queue.alerts.retain(|alert| alert.id != id);
        if self.queue.alerts.is_empty() {
            self.queue.modal_visible = false;
        }
    }

    /// Clears the queue and hides the modal.
    pub fn dismiss_all(&mut self) {
        self.queue.alerts.clear();
        self.queue.modal_visible = false;
    }

    /// Per-card indicator for a metric's current value, derived from the
    /// same rules as the queue so the two can never disagree. Independent
    /// of the queue state.
    pub fn metric_alert(&self, metric: Metric, value: f64) -> Option<MetricIndicator> {
        if !value.is_finite() {
            return None;
        }
        self.rules
            .iter()
            .filter(|rule| rule.metric() == metric)
            .find_map(|rule| {
                let direction = rule.check(value)?;
                Some(MetricIndicator {
                    metric,
                    severity: rule.severity(),
                    direction,
                    description: rule.description(direction),
                })
            })
    }
}
