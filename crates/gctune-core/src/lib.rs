//! gctune core: runtime GC-tuning primitives, error types, and the
//! configuration service.
//!
//! This crate defines the tuning wire contract and the read/apply logic shared
//! by the gateway and by tooling. It intentionally carries no transport or
//! runtime dependencies so it can be tested without an HTTP stack or a live
//! process.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `GcTuneError`/`Result` so production
//! processes do not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod tuning;

/// Shared result type.
pub use error::{GcTuneError, Result};
