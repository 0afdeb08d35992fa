use std::time::Duration;

/// Code the upstream uses to signal throttling. It can arrive as an HTTP
/// status or inside an otherwise-200 response body, so callers check both.
pub const RATE_LIMIT_CODE: i64 = 429;

/// Pacing between requests and the backoff applied when the upstream
/// throttles. Throttled requests are retried at the same offset after
/// `backoff`; nothing else is ever retried.
#[derive(Debug, Clone)]
pub struct RatePolicy {
    /// Wait after each successful character page.
    pub page_interval: Duration,
    /// Wait after each event's roster completes.
    pub event_interval: Duration,
    /// Wait before re-issuing a throttled request.
    pub backoff: Duration,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            page_interval: Duration::from_millis(500),
            event_interval: Duration::from_secs(1),
            backoff: Duration::from_secs(2),
        }
    }
}

impl RatePolicy {
    /// Whether a response code is the throttle signal.
    pub fn is_throttle(&self, code: i64) -> bool {
        code == RATE_LIMIT_CODE
    }

    /// No waiting at all, for runs against a local mock server.
    pub fn immediate() -> Self {
        Self {
            page_interval: Duration::ZERO,
            event_interval: Duration::ZERO,
            backoff: Duration::ZERO,
        }
    }
}
