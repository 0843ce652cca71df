//! Static remediation-suggestion catalog.
//!
//! Maps each metric to ordered guidance lists for rising, falling and
//! stable trends, plus the phrase used by the predictive sentence. This is
//! content data, not logic: the built-in table can be replaced or extended
//! from a TOML document without touching the classifier.

use gridmon_common::types::Metric;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Which guidance list applies to a classified trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guidance {
    /// Abnormal with a rising trend.
    High,
    /// Abnormal with a falling trend.
    Low,
    /// Within normal variation.
    Stable,
}

/// Guidance entry for one metric. The first line of each list is the
/// headline warning or confirmation; the remaining lines are numbered
/// remediation steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionSet {
    #[serde(default)]
    pub high: Vec<String>,
    #[serde(default)]
    pub low: Vec<String>,
    #[serde(default)]
    pub stable: Vec<String>,
    /// Prefix of the predictive sentence; the classifier appends the
    /// estimated hours.
    #[serde(default)]
    pub prediction: String,
}

/// Errors raised while loading catalog overrides.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog: invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

/// The full suggestion table, keyed by metric name.
///
/// Metrics without an entry fall back to a generic one-line message, so an
/// edited or partial override document can never make classification fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionCatalog {
    #[serde(default)]
    pub metrics: HashMap<String, SuggestionSet>,
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        BUILT_IN.clone()
    }
}

impl SuggestionCatalog {
    /// Parses a catalog from a TOML document.
    ///
    /// ```
    /// use gridmon_insight::catalog::SuggestionCatalog;
    ///
    /// let catalog = SuggestionCatalog::from_toml_str(r#"
    /// [metrics.temperature]
    /// high = ["Warning: running hot", "1. Check the fans"]
    /// prediction = "May overheat in approximately"
    /// "#).unwrap();
    /// assert_eq!(catalog.metrics["temperature"].high.len(), 2);
    /// ```
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        Ok(toml::from_str(doc)?)
    }

    /// Overlays `overrides` onto the built-in table, replacing whole
    /// per-metric entries.
    pub fn with_overrides(overrides: SuggestionCatalog) -> Self {
        let mut catalog = Self::default();
        catalog.metrics.extend(overrides.metrics);
        catalog
    }

    /// Returns the guidance list for `(metric, guidance)`, falling back to
    /// a generic message when the metric has no entry.
    pub fn suggestions(&self, metric: Metric, guidance: Guidance) -> Vec<String> {
        match self.metrics.get(&metric.to_string()) {
            Some(set) => match guidance {
                Guidance::High => set.high.clone(),
                Guidance::Low => set.low.clone(),
                Guidance::Stable => set.stable.clone(),
            },
            None => vec![match guidance {
                Guidance::High => format!("{}: abnormal increase detected", metric.label()),
                Guidance::Low => format!("{}: abnormal decrease detected", metric.label()),
                Guidance::Stable => format!("{} levels are stable", metric.label()),
            }],
        }
    }

    /// Returns the predictive-sentence prefix for `metric`.
    pub fn prediction_phrase(&self, metric: Metric) -> String {
        match self.metrics.get(&metric.to_string()) {
            Some(set) if !set.prediction.is_empty() => set.prediction.clone(),
            _ => format!(
                "At the current rate, {} may reach a critical level in approximately",
                metric.label().to_lowercase()
            ),
        }
    }
}

fn set(high: &[&str], low: &[&str], stable: &[&str], prediction: &str) -> SuggestionSet {
    SuggestionSet {
        high: high.iter().map(|s| s.to_string()).collect(),
        low: low.iter().map(|s| s.to_string()).collect(),
        stable: stable.iter().map(|s| s.to_string()).collect(),
        prediction: prediction.to_string(),
    }
}

/// Built-in guidance table covering all eight metrics.
static BUILT_IN: LazyLock<SuggestionCatalog> = LazyLock::new(|| {
    let mut metrics = HashMap::new();

    metrics.insert(
        Metric::Temperature.to_string(),
        set(
            &[
                "Warning: temperature is rising abnormally",
                "1. Check the cooling system and ventilation openings",
                "2. Look for overload on the supply circuit",
                "3. Verify the ambient temperature around the enclosure",
            ],
            &[
                "Warning: temperature is dropping abnormally",
                "1. Check the enclosure heater and door seals",
                "2. Verify the temperature probe connection",
            ],
            &[
                "Temperature levels are stable",
                "1. Continue routine monitoring",
            ],
            "At the current rate, temperature may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::Humidity.to_string(),
        set(
            &[
                "Warning: humidity is rising abnormally",
                "1. Inspect door seals and cable glands for moisture ingress",
                "2. Check the anti-condensation heater",
                "3. Look for water accumulation inside the enclosure",
            ],
            &[
                "Warning: humidity is dropping abnormally",
                "1. Verify the humidity sensor against a handheld meter",
            ],
            &["Humidity levels are stable", "1. Continue routine monitoring"],
            "At the current rate, humidity may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::OilLevel.to_string(),
        set(
            &[
                "Warning: oil level is rising abnormally",
                "1. Check for thermal expansion due to overheating",
                "2. Verify the conservator breather is not blocked",
            ],
            &[
                "Warning: oil level is dropping abnormally",
                "1. Inspect the tank and radiators for leaks",
                "2. Check gasket seals and drain valves",
                "3. Schedule an oil top-up",
            ],
            &["Oil level is stable", "1. Continue routine monitoring"],
            "At the current rate, oil level may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::Voltage.to_string(),
        set(
            &[
                "Warning: voltage is rising abnormally",
                "1. Check the regulator and tap changer position",
                "2. Confirm the supply condition with the utility",
                "3. Inspect surge protection devices",
            ],
            &[
                "Warning: voltage is dropping abnormally",
                "1. Check for loose or corroded terminal connections",
                "2. Look for overload on downstream feeders",
            ],
            &["Voltage levels are stable", "1. Continue routine monitoring"],
            "At the current rate, voltage may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::Current.to_string(),
        set(
            &[
                "Warning: current draw is rising abnormally",
                "1. Check for overload or short-circuit conditions",
                "2. Inspect feeder insulation resistance",
                "3. Rebalance the load across phases",
            ],
            &[
                "Warning: current draw is dropping abnormally",
                "1. Check for tripped breakers or open circuits",
                "2. Verify the current transformer wiring",
            ],
            &["Current levels are stable", "1. Continue routine monitoring"],
            "At the current rate, current may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::Power.to_string(),
        set(
            &[
                "Warning: power draw is rising abnormally",
                "1. Review connected load against rated capacity",
                "2. Check power factor correction equipment",
            ],
            &[
                "Warning: power draw is dropping abnormally",
                "1. Check for partial outages on downstream circuits",
            ],
            &["Power levels are stable", "1. Continue routine monitoring"],
            "At the current rate, power may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::Energy.to_string(),
        set(
            &[
                "Warning: energy consumption is rising abnormally",
                "1. Audit recently added loads",
                "2. Check metering accuracy",
            ],
            &[
                "Warning: energy consumption is dropping abnormally",
                "1. Check for supply interruptions in the billing window",
            ],
            &[
                "Energy consumption is stable",
                "1. Continue routine monitoring",
            ],
            "At the current rate, energy consumption may reach a critical level in approximately",
        ),
    );

    metrics.insert(
        Metric::Angle.to_string(),
        set(
            &[
                "Warning: tilt angle is increasing abnormally",
                "1. Inspect the pole foundation for movement",
                "2. Check guy wires and structural fasteners",
                "3. Schedule a structural survey",
            ],
            &[
                "Warning: tilt angle is decreasing abnormally",
                "1. Inspect the pole foundation for movement",
                "2. Check for soil subsidence on the leaning side",
            ],
            &["Tilt angle is stable", "1. Continue routine monitoring"],
            "At the current rate, tilt angle may reach a critical level in approximately",
        ),
    );

    SuggestionCatalog { metrics }
});
