//! Host CPU/memory sampling.
//!
//! The CPU reading needs two refreshes separated by a sleep, so sampling is a
//! blocking call. [`SysinfoSampler`] runs it on tokio's blocking pool and
//! builds a fresh `System` per call; nothing shared is locked while it sleeps.

use std::time::Duration;

use async_trait::async_trait;
use sysinfo::System;

use healthdash_core::error::{HealthDashError, Result};
use healthdash_core::Sample;

/// Source of point-in-time host readings.
#[async_trait]
pub trait HostSampler: Send + Sync {
    async fn sample(&self) -> Result<Sample>;
}

/// Reads host statistics through `sysinfo`.
#[derive(Debug, Clone)]
pub struct SysinfoSampler {
    cpu_interval: Duration,
}

impl SysinfoSampler {
    /// `cpu_interval` is raised to sysinfo's minimum refresh interval if shorter.
    pub fn new(cpu_interval: Duration) -> Self {
        let min = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;
        if cpu_interval < min {
            tracing::debug!(
                requested_ms = cpu_interval.as_millis() as u64,
                min_ms = min.as_millis() as u64,
                "cpu sampling interval raised to sysinfo minimum"
            );
        }
        Self {
            cpu_interval: cpu_interval.max(min),
        }
    }

    pub fn cpu_interval(&self) -> Duration {
        self.cpu_interval
    }
}

#[async_trait]
impl HostSampler for SysinfoSampler {
    async fn sample(&self) -> Result<Sample> {
        let interval = self.cpu_interval;
        tokio::task::spawn_blocking(move || sample_blocking(interval))
            .await
            .map_err(|e| HealthDashError::Internal(format!("sampler task failed: {e}")))?
    }
}

fn sample_blocking(interval: Duration) -> Result<Sample> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return Err(HealthDashError::OsMetricsUnavailable(
            "platform not supported by sysinfo".into(),
        ));
    }

    let mut sys = System::new();

    // CPU usage is the delta between two refreshes.
    sys.refresh_cpu_usage();
    std::thread::sleep(interval);
    sys.refresh_cpu_usage();

    if sys.cpus().is_empty() {
        return Err(HealthDashError::OsMetricsUnavailable("no cpus reported".into()));
    }
    let cpu = sys.global_cpu_info().cpu_usage();

    sys.refresh_memory();
    if sys.total_memory() == 0 {
        return Err(HealthDashError::OsMetricsUnavailable("total memory is zero".into()));
    }

    Ok(Sample::from_raw(cpu, sys.used_memory()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_never_below_sysinfo_minimum() {
        let s = SysinfoSampler::new(Duration::from_millis(1));
        assert!(s.cpu_interval() >= sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

        let long = Duration::from_secs(2);
        assert_eq!(
            SysinfoSampler::new(long).cpu_interval(),
            long.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)
        );
    }

    #[tokio::test]
    async fn samples_this_host() {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return;
        }
        let s = SysinfoSampler::new(Duration::from_millis(100));
        let sample = s.sample().await.unwrap();
        assert!((0.0..=100.0).contains(&sample.cpu_percent));
        assert!(sample.memory_used_mb >= 0.0);
        assert_eq!((sample.memory_used_mb * 100.0).round() / 100.0, sample.memory_used_mb);
    }
}
