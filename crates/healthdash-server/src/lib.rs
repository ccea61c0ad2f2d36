//! healthdash server library entry.
//!
//! This crate wires config, host sampling, request counters, and the
//! dashboard renderer into an axum service. It is consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod sampler;
