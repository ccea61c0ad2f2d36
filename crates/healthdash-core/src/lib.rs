//! healthdash core: transport-agnostic host readings, uptime clock, and errors.
//!
//! This crate defines the value types and error surface shared by the server
//! and its tests. It carries no HTTP or OS-metrics dependencies so the pure
//! pieces (uptime formatting, memory rounding) can be tested in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `HealthDashError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod sample;
pub mod uptime;

/// Shared result type.
pub use error::{HealthDashError, Result};
pub use sample::Sample;
pub use uptime::UptimeClock;
