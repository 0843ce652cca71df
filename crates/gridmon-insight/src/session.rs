//! Session state: the sample log plus everything derived from it.

use crate::catalog::SuggestionCatalog;
use crate::engine::AlertEngine;
use crate::{stats, trend};
use gridmon_common::types::{
    AlertQueue, Metric, MetricIndicator, MetricStats, TelemetrySample, TrendInsight,
};
use std::collections::BTreeMap;

/// One monitoring session: owns the append-only sample log, the derived
/// insight map and the alert queue. State lives for the session only;
/// nothing is persisted.
///
/// [`TelemetrySession::publish`] is the single write entry point and runs
/// the whole append → classify → evaluate pass synchronously, so readers
/// never observe a partially updated session.
#[derive(Default)]
pub struct TelemetrySession {
    samples: Vec<TelemetrySample>,
    catalog: SuggestionCatalog,
    engine: AlertEngine,
    insights: BTreeMap<Metric, TrendInsight>,
}

impl TelemetrySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with an edited suggestion catalog (see
    /// [`SuggestionCatalog::with_overrides`]).
    pub fn with_catalog(catalog: SuggestionCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Appends a new sample and recomputes insights and alerts from it.
    pub fn publish(&mut self, sample: TelemetrySample) {
        self.samples.push(sample);
        tracing::debug!(samples = self.samples.len(), "telemetry sample published");

        for metric in Metric::ALL {
            let series = self.series(metric);
            match trend::classify(&series, metric, &self.catalog) {
                Some(insight) => {
                    if insight.is_abnormal {
                        tracing::info!(
                            metric = %metric,
                            trend = insight.trend,
                            rate = %insight.rate_of_change,
                            "abnormal trend classified"
                        );
                    }
                    self.insights.insert(metric, insight);
                }
                None => {
                    self.insights.remove(&metric);
                }
            }
        }

        if let Some(latest) = self.samples.last() {
            self.engine.evaluate(latest);
        }
    }

    /// The metric series in arrival order, projected from the sample log.
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.samples.iter().map(|s| s.value(metric)).collect()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn latest(&self) -> Option<&TelemetrySample> {
        self.samples.last()
    }

    /// All current insights; metrics with fewer than 2 samples are absent.
    pub fn insights(&self) -> &BTreeMap<Metric, TrendInsight> {
        &self.insights
    }

    pub fn insight(&self, metric: Metric) -> Option<&TrendInsight> {
        self.insights.get(&metric)
    }

    /// `{min, max, avg, current}` over the whole series for one metric.
    /// Consumed identically by the live view and the report generator.
    pub fn statistics(&self, metric: Metric) -> Option<MetricStats> {
        let current = self.latest()?.value(metric);
        stats::aggregate(&self.series(metric), current)
    }

    pub fn queue(&self) -> &AlertQueue {
        self.engine.queue()
    }

    pub fn dismiss(&mut self, id: &str) {
        self.engine.dismiss(id);
    }

    pub fn dismiss_all(&mut self) {
        self.engine.dismiss_all();
    }

    /// Inline badge for a metric's current value, or `None` when within
    /// bounds (or no sample has arrived yet).
    pub fn metric_alert(&self, metric: Metric) -> Option<MetricIndicator> {
        let value = self.latest()?.value(metric);
        self.engine.metric_alert(metric, value)
    }
}
