use dashmap::DashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

const MAX_ANALYSES_PER_MINUTE: u32 = 6;
const MAX_ANALYSES_PER_HOUR: u32 = 30;
const CLEANUP_INTERVAL_SECS: u64 = 300;

#[derive(Clone, Copy)]
struct Window {
    count: u32,
    start: Instant,
}

impl Window {
    fn roll(&mut self, period: Duration, now: Instant) {
        if now.duration_since(self.start) > period {
            self.count = 0;
            self.start = now;
        }
    }

    fn wait_secs(&self, period: Duration, now: Instant) -> u64 {
        period
            .as_secs()
            .saturating_sub(now.duration_since(self.start).as_secs())
    }
}

#[derive(Clone)]
struct ClientRecord {
    minute: Window,
    hour: Window,
}

impl Default for ClientRecord {
    fn default() -> Self {
        let now = Instant::now();
        let fresh = Window {
            count: 0,
            start: now,
        };
        Self {
            minute: fresh,
            hour: fresh,
        }
    }
}

#[derive(Clone)]
pub struct RateLimiter {
    clients: Arc<DashMap<IpAddr, ClientRecord>>,
    last_cleanup: Arc<std::sync::Mutex<Instant>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            clients: Arc::new(DashMap::new()),
            last_cleanup: Arc::new(std::sync::Mutex::new(Instant::now())),
        }
    }

    pub fn check(&self, ip: IpAddr) -> Result<(), RateLimitError> {
        self.maybe_cleanup();

        let now = Instant::now();
        let minute = Duration::from_secs(60);
        let hour = Duration::from_secs(3600);

        let mut record = self.clients.entry(ip).or_default();
        record.minute.roll(minute, now);
        record.hour.roll(hour, now);

        if record.minute.count >= MAX_ANALYSES_PER_MINUTE {
            return Err(RateLimitError::PerMinute(record.minute.wait_secs(minute, now)));
        }

        if record.hour.count >= MAX_ANALYSES_PER_HOUR {
            return Err(RateLimitError::PerHour(record.hour.wait_secs(hour, now)));
        }

        record.minute.count += 1;
        record.hour.count += 1;

        Ok(())
    }

    fn maybe_cleanup(&self) {
        let mut last_cleanup = self.last_cleanup.lock().unwrap();
        if last_cleanup.elapsed() > Duration::from_secs(CLEANUP_INTERVAL_SECS) {
            let cutoff = Instant::now() - Duration::from_secs(3600);
            self.clients.retain(|_, record| record.hour.start > cutoff);
            *last_cleanup = Instant::now();
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum RateLimitError {
    PerMinute(u64),
    PerHour(u64),
}

impl RateLimitError {
    pub fn user_message(&self) -> String {
        match self {
            Self::PerMinute(secs) => {
                format!("Too many analyses. Wait {} seconds and try again.", secs)
            }
            Self::PerHour(secs) => format!(
                "Hourly analysis limit reached. Try again in {} minutes.",
                secs / 60
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn allows_up_to_minute_limit_then_blocks() {
        let limiter = RateLimiter::new();
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

        for _ in 0..MAX_ANALYSES_PER_MINUTE {
            assert!(limiter.check(ip).is_ok());
        }
        assert!(matches!(
            limiter.check(ip),
            Err(RateLimitError::PerMinute(_))
        ));
    }

    #[test]
    fn limits_are_per_client() {
        let limiter = RateLimiter::new();
        let first = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let second = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));

        for _ in 0..MAX_ANALYSES_PER_MINUTE {
            assert!(limiter.check(first).is_ok());
        }
        assert!(limiter.check(first).is_err());
        assert!(limiter.check(second).is_ok());
    }
}
