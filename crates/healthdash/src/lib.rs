//! Top-level facade crate for healthdash.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use healthdash_core::*;
}

pub mod server {
    pub use healthdash_server::*;
}
