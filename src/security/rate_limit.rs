use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub const MAX_PAYMENT_ATTEMPTS: usize = 5;
pub const PAYMENT_WINDOW: Duration = Duration::from_secs(900);

/// Sliding-window limiter keyed by client IP.
///
/// Every payment attempt creates a gateway order, so attempts are counted
/// whether or not they succeed.
#[derive(Clone)]
pub struct RateLimiter {
    max_attempts: usize,
    window: Duration,
    attempts: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(MAX_PAYMENT_ATTEMPTS, PAYMENT_WINDOW)
    }
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record an attempt unless the IP is already at its limit.
    /// Returns false when the attempt must be refused.
    pub fn try_acquire(&self, ip: IpAddr) -> bool {
        self.try_acquire_at(ip, Instant::now())
    }

    fn try_acquire_at(&self, ip: IpAddr, now: Instant) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let timestamps = map.entry(ip).or_default();
        timestamps.retain(|t| now.saturating_duration_since(*t) < self.window);
        if timestamps.len() >= self.max_attempts {
            return false;
        }
        timestamps.push(now);
        true
    }

    /// Drop IPs with no attempts left in the window.
    pub fn prune(&self) {
        let now = Instant::now();
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.retain(|_, timestamps| {
            timestamps.retain(|t| now.saturating_duration_since(*t) < self.window);
            !timestamps.is_empty()
        });
    }
}
