//! Process uptime clock.
//!
//! The start instant is captured once when the clock is built and never
//! mutated, so readers need no synchronization. The dashboard string is
//! time-of-day style `HH:MM:SS` with no day field: hours wrap modulo 24.
//! Callers that need the unbounded value use [`UptimeClock::elapsed_secs`].

use std::time::Instant;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy)]
pub struct UptimeClock {
    started: Instant,
}

impl UptimeClock {
    /// Capture the process start time.
    pub fn start() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started: Instant) -> Self {
        Self { started }
    }

    /// Whole seconds since start.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs_at(Instant::now())
    }

    pub fn elapsed_secs_at(&self, now: Instant) -> u64 {
        now.saturating_duration_since(self.started).as_secs()
    }

    /// Uptime as `HH:MM:SS`, wrapping past 24 hours.
    pub fn elapsed(&self) -> String {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> String {
        format_hms(self.elapsed_secs_at(now))
    }
}

/// Format whole seconds as `HH:MM:SS` modulo one day.
pub fn format_hms(secs: u64) -> String {
    let s = secs % SECS_PER_DAY;
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn formats_hours_minutes_seconds() {
        let t0 = Instant::now();
        let clock = UptimeClock::started_at(t0);
        assert_eq!(clock.elapsed_at(t0), "00:00:00");
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(3661)), "01:01:01");
    }

    #[test]
    fn wraps_after_a_day() {
        let t0 = Instant::now();
        let clock = UptimeClock::started_at(t0);
        assert_eq!(clock.elapsed_at(t0 + Duration::from_secs(90_000)), "01:00:00");
        assert_eq!(clock.elapsed_secs_at(t0 + Duration::from_secs(90_000)), 90_000);
        assert_eq!(format_hms(SECS_PER_DAY - 1), "23:59:59");
    }

    #[test]
    fn drops_subsecond_precision() {
        let t0 = Instant::now();
        let clock = UptimeClock::started_at(t0);
        assert_eq!(clock.elapsed_at(t0 + Duration::from_millis(59_999)), "00:00:59");
    }

    #[test]
    fn now_before_start_is_zero() {
        let t0 = Instant::now() + Duration::from_secs(10);
        let clock = UptimeClock::started_at(t0);
        assert_eq!(clock.elapsed_secs_at(Instant::now()), 0);
    }
}
