// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::Mutex;

/// Per-route request counters and latency samples, exposed at `/metrics`
/// in plain-text exposition format.
#[derive(Default)]
pub struct RequestMetrics {
    counts: Mutex<BTreeMap<(String, u16), u64>>,
    latency_ns: Mutex<BTreeMap<String, Vec<u64>>>,
}

impl RequestMetrics {
    pub(crate) async fn observe_request(&self, route: &str, status: StatusCode, latency: Duration) {
        let mut counts = self.counts.lock().await;
        *counts
            .entry((route.to_string(), status.as_u16()))
            .or_insert(0) += 1;
        drop(counts);
        let mut latency_map = self.latency_ns.lock().await;
        latency_map
            .entry(route.to_string())
            .or_default()
            .push(latency.as_nanos() as u64);
    }

    pub(crate) async fn render(&self) -> String {
        let mut body = String::new();
        let counts = self.counts.lock().await;
        for ((route, status), count) in counts.iter() {
            body.push_str(&format!(
                "pentrack_requests_total{{route=\"{route}\",status=\"{status}\"}} {count}\n"
            ));
        }
        drop(counts);
        let latency_map = self.latency_ns.lock().await;
        for (route, samples) in latency_map.iter() {
            let p50 = percentile_ns(samples, 0.50) / 1_000_000;
            let p95 = percentile_ns(samples, 0.95) / 1_000_000;
            body.push_str(&format!(
                "pentrack_request_latency_p50_ms{{route=\"{route}\"}} {p50}\n"
            ));
            body.push_str(&format!(
                "pentrack_request_latency_p95_ms{{route=\"{route}\"}} {p95}\n"
            ));
        }
        body
    }
}

pub(crate) fn percentile_ns(samples: &[u64], quantile: f64) -> u64 {
    if samples.is_empty() {
        return 0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    let idx = ((sorted.len() as f64) * quantile).ceil() as usize;
    sorted[idx.saturating_sub(1).min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_of_empty_samples_is_zero() {
        assert_eq!(percentile_ns(&[], 0.95), 0);
    }

    #[test]
    fn percentile_picks_rank_from_sorted_samples() {
        let samples = vec![50, 10, 40, 20, 30];
        assert_eq!(percentile_ns(&samples, 0.50), 30);
        assert_eq!(percentile_ns(&samples, 0.95), 50);
        assert_eq!(percentile_ns(&samples, 1.0), 50);
    }

    #[tokio::test]
    async fn render_lists_counts_and_latency_lines() {
        let metrics = RequestMetrics::default();
        metrics
            .observe_request("/api/projects", StatusCode::OK, Duration::from_millis(5))
            .await;
        metrics
            .observe_request("/api/projects", StatusCode::OK, Duration::from_millis(7))
            .await;
        metrics
            .observe_request("/api/projects", StatusCode::CREATED, Duration::from_millis(3))
            .await;

        let body = metrics.render().await;
        assert!(body
            .contains("pentrack_requests_total{route=\"/api/projects\",status=\"200\"} 2"));
        assert!(body
            .contains("pentrack_requests_total{route=\"/api/projects\",status=\"201\"} 1"));
        assert!(body.contains("pentrack_request_latency_p50_ms{route=\"/api/projects\"}"));
        assert!(body.contains("pentrack_request_latency_p95_ms{route=\"/api/projects\"}"));
    }
}
