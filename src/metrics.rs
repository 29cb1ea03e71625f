//! Prometheus metrics & middleware helper.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};

/// Request metrics for every route, exposed on `/metrics`.
pub fn build() -> anyhow::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("kw_bot")
        .endpoint("/metrics") // exposed URL
        .build()
        .map_err(|e| anyhow::anyhow!(e))
}
