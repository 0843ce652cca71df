//! Trend analysis and threshold alerting for equipment telemetry.
//!
//! The engine turns a time-ordered stream of [`TelemetrySample`]s into
//! per-metric trend insights, remediation guidance, and a deduplicated
//! critical-alert queue. [`session::TelemetrySession`] is the single entry
//! point: each published sample triggers one synchronous
//! append → classify → aggregate → alert-evaluate pass.
//!
//! Hard-threshold rules implement [`AlertRule`] and are registered in the
//! [`engine::AlertEngine`]. Built-in rules cover the oil-level operating
//! point and the tilt-angle safety band.

pub mod catalog;
pub mod engine;
pub mod rules;
pub mod session;
pub mod stats;
pub mod trend;


use gridmon_common::id::alert_id;
use gridmon_common::types::{Alert, Metric, Severity, TelemetrySample, ThresholdDirection};

/// A hard-threshold rule evaluated against the latest sample only.
///
/// Implementations describe the boundary and its messaging; the provided
/// [`AlertRule::evaluate`] builds the full [`Alert`] so the modal queue and
/// the per-card indicator can never disagree on threshold logic.
pub trait AlertRule: Send + Sync {
    /// Rule kind, used in the derived alert identifier (e.g. `"threshold"`).
    fn kind(&self) -> &'static str;

    /// The metric this rule applies to.
    fn metric(&self) -> Metric;

    /// Severity assigned to alerts produced by this rule.
    fn severity(&self) -> Severity;

    /// Returns which side of the boundary `value` breached, or `None` when
    /// the value is within bounds.
    fn check(&self, value: f64) -> Option<ThresholdDirection>;

    /// Display form of the fixed boundary (e.g. `"20%"`, `"-3.5° to 3.5°"`).
    fn threshold_label(&self) -> String;

    /// Alert headline including the current value and the boundary.
    fn message(&self, value: f64, direction: ThresholdDirection) -> String;

    /// Longer remediation hint for the alert modal.
    fn description(&self, direction: ThresholdDirection) -> String;

    /// Evaluates the latest sample and returns an alert if the boundary is
    /// breached. A value that never parsed upstream (non-finite) suppresses
    /// the rule entirely.
    fn evaluate(&self, sample: &TelemetrySample) -> Option<Alert> {
        let value = sample.value(self.metric());
        if !value.is_finite() {
            return None;
        }
        let direction = self.check(value)?;
        Some(Alert {
            id: alert_id(self.metric(), self.kind()),
            metric: self.metric(),
            severity: self.severity(),
            direction,
            message: self.message(value, direction),
            current_value: value,
            threshold: self.threshold_label(),
            description: self.description(direction),
            timestamp: sample.captured_at,
        })
    }
}
