use crate::AlertRule;
use gridmon_common::types::{Metric, Severity, ThresholdDirection};

/// Tilt angle must stay inside the closed safety band [min, max] degrees.
pub struct AngleRangeRule {
    pub min: f64,
    pub max: f64,
    pub severity: Severity,
}

impl Default for AngleRangeRule {
    fn default() -> Self {
        Self {
            min: -3.5,
            max: 3.5,
            severity: Severity::Critical,
        }
    }
}

impl AlertRule for AngleRangeRule {
    fn kind(&self) -> &'static str {
        "range"
    }

    fn metric(&self) -> Metric {
        Metric::Angle
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, value: f64) -> Option<ThresholdDirection> {
        if value < self.min {
            Some(ThresholdDirection::Low)
        } else if value > self.max {
            Some(ThresholdDirection::High)
        } else {
            None
        }
    }

    fn threshold_label(&self) -> String {
        format!("{}° to {}°", self.min, self.max)
    }

    fn message(&self, value: f64, direction: ThresholdDirection) -> String {
        format!(
            "Tilt angle {direction}: {value:.2}° (safe band {})",
            self.threshold_label()
        )
    }

    fn description(&self, direction: ThresholdDirection) -> String {
        match direction {
            ThresholdDirection::Low => {
                "Structure is leaning beyond the negative band limit. Inspect \
                 the foundation and schedule a structural survey."
                    .to_string()
            }
            ThresholdDirection::High => {
                "Structure is leaning beyond the positive band limit. Inspect \
                 the foundation and schedule a structural survey."
                    .to_string()
            }
        }
    }
}
