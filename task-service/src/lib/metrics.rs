use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Mutex;
use std::time::Duration;
use std::time::Instant;

/// In-process HTTP metrics registry.
///
/// Shared read-mostly state: counters are atomics, the per-status map sits
/// behind a short-lived mutex. Recording happens once per request from the
/// metrics middleware; the /metrics handler takes a snapshot.
pub struct HttpMetrics {
    started_at: Instant,
    requests_total: AtomicU64,
    total_duration_micros: AtomicU64,
    responses_by_status: Mutex<HashMap<u16, u64>>,
}

impl HttpMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            requests_total: AtomicU64::new(0),
            total_duration_micros: AtomicU64::new(0),
            responses_by_status: Mutex::new(HashMap::new()),
        }
    }

    /// Record one finished request.
    pub fn record(&self, status: u16, duration: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.total_duration_micros
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);

        // A poisoned map loses one sample, never panics a request
        if let Ok(mut by_status) = self.responses_by_status.lock() {
            *by_status.entry(status).or_insert(0) += 1;
        }
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    /// Average request duration in milliseconds since startup.
    pub fn average_duration_ms(&self) -> f64 {
        let total = self.requests_total.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let micros = self.total_duration_micros.load(Ordering::Relaxed);
        micros as f64 / total as f64 / 1000.0
    }

    /// Per-status request counts, keyed by the status code as a string.
    pub fn requests_by_status(&self) -> HashMap<String, u64> {
        match self.responses_by_status.lock() {
            Ok(by_status) => by_status
                .iter()
                .map(|(status, count)| (status.to_string(), *count))
                .collect(),
            Err(_) => HashMap::new(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for HttpMetrics {
    fn default() -> Self {
        Self::new()
    }
}
