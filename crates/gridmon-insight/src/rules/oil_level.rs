use crate::AlertRule;
use gridmon_common::types::{Metric, Severity, ThresholdDirection};

/// Oil level must sit exactly at the operating point (20%); any other
/// reading is a critical deviation, not a tolerance-band check.
pub struct OilLevelRule {
    pub operating_point: f64,
    pub severity: Severity,
}

impl Default for OilLevelRule {
    fn default() -> Self {
        Self {
            operating_point: 20.0,
            severity: Severity::Critical,
        }
    }
}

impl AlertRule for OilLevelRule {
    fn kind(&self) -> &'static str {
        "threshold"
    }

    fn metric(&self) -> Metric {
        Metric::OilLevel
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, value: f64) -> Option<ThresholdDirection> {
        if value == self.operating_point {
            None
        } else if value < self.operating_point {
            Some(ThresholdDirection::Low)
        } else {
            Some(ThresholdDirection::High)
        }
    }

    fn threshold_label(&self) -> String {
        format!("{:.0}%", self.operating_point)
    }

    fn message(&self, value: f64, direction: ThresholdDirection) -> String {
        format!(
            "Oil level {direction}: {value:.1}% (operating point {})",
            self.threshold_label()
        )
    }

    fn description(&self, direction: ThresholdDirection) -> String {
        match direction {
            ThresholdDirection::Low => {
                "Oil level is below the operating point. Inspect the tank and \
                 radiators for leaks and schedule a top-up."
                    .to_string()
            }
            ThresholdDirection::High => {
                "Oil level is above the operating point. Check for thermal \
                 expansion and verify the conservator breather."
                    .to_string()
            }
        }
    }
}
