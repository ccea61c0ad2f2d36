//! Point-in-time host readings.

use serde::Serialize;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One CPU/memory reading. Computed per dashboard request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// Utilization over the sampling window, 0..=100.
    pub cpu_percent: f64,
    /// System-wide used memory in MB, rounded to 2 decimals.
    pub memory_used_mb: f64,
}

impl Sample {
    /// Build a sample from raw readings, clamping and rounding as displayed.
    pub fn from_raw(cpu_percent: f32, memory_used_bytes: u64) -> Self {
        let cpu = if cpu_percent.is_finite() {
            f64::from(cpu_percent).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            cpu_percent: round_to(cpu, 1),
            memory_used_mb: bytes_to_mb(memory_used_bytes),
        }
    }
}

/// Bytes to megabytes (1 MB = 1024 * 1024 bytes), rounded to 2 decimals.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    round_to(bytes as f64 / BYTES_PER_MB, 2)
}

fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round() / scale
}
