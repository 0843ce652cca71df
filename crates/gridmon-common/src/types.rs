use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One of the eight measured quantities carried by every telemetry sample.
///
/// # Examples
///
/// ```
/// use gridmon_common::types::Metric;
///
/// let m: Metric = "oil_level".parse().unwrap();
/// assert_eq!(m, Metric::OilLevel);
/// assert_eq!(m.to_string(), "oil_level");
/// assert_eq!(m.label(), "Oil Level");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Temperature,
    Humidity,
    OilLevel,
    Voltage,
    Current,
    Power,
    Energy,
    Angle,
}

impl Metric {
    /// All metrics, in the order they appear on a sample.
    pub const ALL: [Metric; 8] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::OilLevel,
        Metric::Voltage,
        Metric::Current,
        Metric::Power,
        Metric::Energy,
        Metric::Angle,
    ];

    /// Human-readable name for card titles and alert messages.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::OilLevel => "Oil Level",
            Metric::Voltage => "Voltage",
            Metric::Current => "Current",
            Metric::Power => "Power",
            Metric::Energy => "Energy",
            Metric::Angle => "Tilt Angle",
        }
    }

    /// Display unit for the metric.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::OilLevel => "%",
            Metric::Voltage => "V",
            Metric::Current => "A",
            Metric::Power => "W",
            Metric::Energy => "kWh",
            Metric::Angle => "°",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Temperature => write!(f, "temperature"),
            Metric::Humidity => write!(f, "humidity"),
            Metric::OilLevel => write!(f, "oil_level"),
            Metric::Voltage => write!(f, "voltage"),
            Metric::Current => write!(f, "current"),
            Metric::Power => write!(f, "power"),
            Metric::Energy => write!(f, "energy"),
            Metric::Angle => write!(f, "angle"),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" => Ok(Metric::Temperature),
            "humidity" => Ok(Metric::Humidity),
            "oil_level" | "oillevel" => Ok(Metric::OilLevel),
            "voltage" => Ok(Metric::Voltage),
            "current" => Ok(Metric::Current),
            "power" => Ok(Metric::Power),
            "energy" => Ok(Metric::Energy),
            "angle" => Ok(Metric::Angle),
            _ => Err(format!("unknown metric: {s}")),
        }
    }
}

/// Alert severity level, ordered from lowest to highest.
///
/// # Examples
///
/// ```
/// use gridmon_common::types::Severity;
///
/// let sev: Severity = "critical".parse().unwrap();
/// assert_eq!(sev, Severity::Critical);
/// assert!(Severity::Critical > Severity::Info);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Badge color for the presentation layer.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#1890ff",
            Severity::Warning => "#faad14",
            Severity::Critical => "#f5222d",
        }
    }

    /// Badge icon name for the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Info => "info-circle",
            Severity::Warning => "warning",
            Severity::Critical => "alert",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "critical" => Ok(Severity::Critical),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

/// Which side of a hard threshold the current value sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThresholdDirection {
    Low,
    High,
}

impl std::fmt::Display for ThresholdDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdDirection::Low => write!(f, "LOW"),
            ThresholdDirection::High => write!(f, "HIGH"),
        }
    }
}

/// One equipment reading: eight numeric metric fields plus the
/// display-formatted time strings the ingestion source provides.
///
/// Immutable once constructed. Values that failed to parse upstream are
/// stored as `0` (see [`TelemetrySample::from_raw`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySample {
    /// Display-formatted time of day (e.g. `"14:05:30"`).
    pub timestamp: String,
    /// Display-formatted date (e.g. `"2026-08-30"`).
    pub date: String,
    /// Wall-clock instant the sample was published into the session.
    pub captured_at: DateTime<Utc>,
    pub temperature: f64,
    pub humidity: f64,
    pub oil_level: f64,
    pub voltage: f64,
    pub current: f64,
    pub power: f64,
    pub energy: f64,
    pub angle: f64,
}

/// Unparsed metric fields as read from the tabular source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawSample<'a> {
    pub timestamp: &'a str,
    pub date: &'a str,
    pub temperature: &'a str,
    pub humidity: &'a str,
    pub oil_level: &'a str,
    pub voltage: &'a str,
    pub current: &'a str,
    pub power: &'a str,
    pub energy: &'a str,
    pub angle: &'a str,
}

impl TelemetrySample {
    /// Builds a sample from raw tabular cells, coercing any metric cell
    /// that does not parse as a number to `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmon_common::types::{RawSample, TelemetrySample};
    ///
    /// let sample = TelemetrySample::from_raw(&RawSample {
    ///     timestamp: "14:05:30",
    ///     date: "2026-08-30",
    ///     temperature: "25.4",
    ///     oil_level: "n/a",
    ///     ..Default::default()
    /// });
    /// assert_eq!(sample.temperature, 25.4);
    /// assert_eq!(sample.oil_level, 0.0);
    /// ```
    pub fn from_raw(raw: &RawSample<'_>) -> Self {
        Self {
            timestamp: raw.timestamp.to_string(),
            date: raw.date.to_string(),
            captured_at: Utc::now(),
            temperature: parse_or_zero(raw.temperature),
            humidity: parse_or_zero(raw.humidity),
            oil_level: parse_or_zero(raw.oil_level),
            voltage: parse_or_zero(raw.voltage),
            current: parse_or_zero(raw.current),
            power: parse_or_zero(raw.power),
            energy: parse_or_zero(raw.energy),
            angle: parse_or_zero(raw.angle),
        }
    }

    /// Projects the sample onto one metric.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Temperature => self.temperature,
            Metric::Humidity => self.humidity,
            Metric::OilLevel => self.oil_level,
            Metric::Voltage => self.voltage,
            Metric::Current => self.current,
            Metric::Power => self.power,
            Metric::Energy => self.energy,
            Metric::Angle => self.angle,
        }
    }
}

/// Parse policy for malformed input: substitute `0`, never propagate.
pub fn parse_or_zero(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(0.0)
}

/// Summary statistics over one metric series, as shown on a card or in a
/// generated report. `min`/`max`/`avg` are rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricStats {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
    pub current: f64,
}

/// Derived trend payload for one metric. Recomputed from scratch on every
/// new sample; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendInsight {
    pub metric: Metric,
    /// Signed delta over the classification window (last − first).
    pub trend: f64,
    pub is_abnormal: bool,
    /// Headline line first, numbered remediation steps after, optionally a
    /// predictive sentence last.
    pub suggestions: Vec<String>,
    /// Display-formatted rate of change (e.g. `"50.0%/hour"`).
    pub rate_of_change: String,
}

/// A critical-threshold breach produced by the alert engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Stable identifier derived from `(metric, rule)`; an ongoing
    /// condition keeps the same id across evaluation passes.
    pub id: String,
    pub metric: Metric,
    pub severity: Severity,
    pub direction: ThresholdDirection,
    pub message: String,
    pub current_value: f64,
    /// Display form of the breached boundary (e.g. `"20%"`, `"-3.5° to 3.5°"`).
    pub threshold: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

/// The active alert set plus the modal-visibility flag the presentation
/// layer binds to. Owned by the alert engine; read-only elsewhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertQueue {
    pub alerts: Vec<Alert>,
    pub modal_visible: bool,
}

/// Inline per-card badge for a metric whose current value breaches a hard
/// threshold. Derived from the same rules as the queue alerts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricIndicator {
    pub metric: Metric,
    pub severity: Severity,
    pub direction: ThresholdDirection,
    pub description: String,
}

impl MetricIndicator {
    pub fn color(&self) -> &'static str {
        self.severity.color()
    }

    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_coerces_garbage() {
        assert_eq!(parse_or_zero("12.5"), 12.5);
        assert_eq!(parse_or_zero(" -3.2 "), -3.2);
        assert_eq!(parse_or_zero("n/a"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
    }

    #[test]
    fn sample_projects_every_metric() {
        let sample = TelemetrySample::from_raw(&RawSample {
            timestamp: "10:00:00",
            date: "2026-08-30",
            temperature: "1",
            humidity: "2",
            oil_level: "3",
            voltage: "4",
            current: "5",
            power: "6",
            energy: "7",
            angle: "8",
        });
        let values: Vec<f64> = Metric::ALL.iter().map(|m| sample.value(*m)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn every_metric_has_a_label_and_unit() {
        for metric in Metric::ALL {
            assert!(!metric.label().is_empty());
            assert!(!metric.unit().is_empty());
        }
        assert_eq!(Metric::OilLevel.unit(), "%");
        assert_eq!(Metric::Angle.unit(), "°");
    }

    #[test]
    fn metric_round_trips_through_display() {
        for metric in Metric::ALL {
            let parsed: Metric = metric.to_string().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }
}
