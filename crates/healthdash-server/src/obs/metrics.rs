//! Per-endpoint request counters and their text exposition.
//!
//! The label set is fixed to the counted routes, so counters live in a plain
//! array of atomics indexed by [`Endpoint`] and no key is ever created at
//! runtime. Snapshots and rendering walk [`Endpoint::ALL`], which keeps line
//! order deterministic across scrapes.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter metric name.
pub const REQUESTS_TOTAL: &str = "http_requests_total";

/// Routes that carry a request counter. `/metrics` is not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Dashboard,
}

impl Endpoint {
    pub const ALL: [Endpoint; 2] = [Endpoint::Health, Endpoint::Dashboard];

    /// The `endpoint` label value.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::Dashboard => "/",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.label() == label)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

#[derive(Default)]
pub struct RequestCounter {
    counts: [AtomicU64; 2],
}

impl RequestCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment by 1.
    pub fn increment(&self, endpoint: Endpoint) {
        self.counts[endpoint.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// Increment by label. Unknown labels are ignored and return `false`.
    pub fn increment_label(&self, label: &str) -> bool {
        match Endpoint::from_label(label) {
            Some(e) => {
                self.increment(e);
                true
            }
            None => false,
        }
    }

    fn get(&self, endpoint: Endpoint) -> u64 {
        self.counts[endpoint.index()].load(Ordering::Relaxed)
    }

    /// Current counts in stable label order. Each value is read independently.
    pub fn snapshot(&self) -> Vec<(&'static str, u64)> {
        Endpoint::ALL
            .into_iter()
            .map(|e| (e.label(), self.get(e)))
            .collect()
    }

    /// Render the current counters plus any extra gauge lines.
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = format_counts(&self.snapshot());
        for (k, v) in extra {
            let _ = writeln!(out, "# TYPE {} gauge\n{} {}", k, k, v);
        }
        out
    }
}

/// Render a counts snapshot in Prometheus text exposition format.
pub fn format_counts(counts: &[(&str, u64)]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "# HELP {} Total HTTP requests handled, by endpoint.",
        REQUESTS_TOTAL
    );
    let _ = writeln!(out, "# TYPE {} counter", REQUESTS_TOTAL);
    for (label, val) in counts {
        let _ = writeln!(
            out,
            "{}{{endpoint=\"{}\"}} {}",
            REQUESTS_TOTAL,
            escape_label(label),
            val
        );
    }
    out
}
