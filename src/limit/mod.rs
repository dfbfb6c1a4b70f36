//! Sliding-window rate limiter keyed by caller identity.

use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tracing::warn;

use crate::errors::BriefError;

pub const ANONYMOUS: &str = "anonymous";

pub struct RateLimiter {
    window: Duration,
    max_requests: usize,
    hits: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self { window, max_requests, hits: Mutex::new(HashMap::new()) }
    }

    pub fn check(&self, identity: Option<&str>) -> Result<(), BriefError> {
        self.check_at(identity, Instant::now())
    }

    /// Record a request at `now`, or reject it without using a slot.
    pub fn check_at(&self, identity: Option<&str>, now: Instant) -> Result<(), BriefError> {
        let identity = identity
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(ANONYMOUS);

        let mut hits = self.hits.lock();
        let log = hits.entry(identity.to_string()).or_default();
        while log
            .front()
            .is_some_and(|t| now.saturating_duration_since(*t) >= self.window)
        {
            log.pop_front();
        }

        if log.len() >= self.max_requests {
            let wait = log
                .front()
                .map(|t| self.window.saturating_sub(now.saturating_duration_since(*t)))
                .unwrap_or(self.window);
            let retry_after_secs = wait.as_secs() + u64::from(wait.subsec_nanos() > 0);
            warn!(identity, retry_after_secs, "rate limit exceeded");
            return Err(BriefError::RateLimited {
                identity: identity.to_string(),
                retry_after_secs: retry_after_secs.max(1),
            });
        }

        log.push_back(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_after_max_and_recovers_after_window() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 2);
        let t0 = Instant::now();
        assert!(limiter.check_at(Some("alice"), t0).is_ok());
        assert!(limiter.check_at(Some("alice"), t0 + Duration::from_secs(10)).is_ok());

        let err = limiter.check_at(Some("alice"), t0 + Duration::from_secs(20)).unwrap_err();
        assert_eq!(
            err,
            BriefError::RateLimited { identity: "alice".into(), retry_after_secs: 40 }
        );

        // first hit has left the window
        assert!(limiter.check_at(Some("alice"), t0 + Duration::from_secs(60)).is_ok());
    }

    #[test]
    fn rejected_calls_do_not_consume_slots() {
        let limiter = RateLimiter::new(Duration::from_secs(10), 1);
        let t0 = Instant::now();
        assert!(limiter.check_at(Some("bob"), t0).is_ok());
        for s in 1..5 {
            assert!(limiter.check_at(Some("bob"), t0 + Duration::from_secs(s)).is_err());
        }
        assert!(limiter.check_at(Some("bob"), t0 + Duration::from_secs(10)).is_ok());
    }

    #[test]
    fn identities_are_independent_and_blank_is_anonymous() {
        let limiter = RateLimiter::new(Duration::from_secs(10), 1);
        let t0 = Instant::now();
        assert!(limiter.check_at(Some("a"), t0).is_ok());
        assert!(limiter.check_at(Some("b"), t0).is_ok());
        assert!(limiter.check_at(None, t0).is_ok());
        let err = limiter.check_at(Some("  "), t0).unwrap_err();
        assert!(matches!(err, BriefError::RateLimited { identity, .. } if identity == ANONYMOUS));
    }
}
