//! Top-level facade crate for gctune.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use gctune_core::*;
}

pub mod gateway {
    pub use gctune_gateway::*;
}
