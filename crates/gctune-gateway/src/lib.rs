//! gctune gateway library entry.
//!
//! This crate wires the tuning service, the HTTP surface, the production
//! runtime adapters, and the mounted metrics-visualization page into a
//! cohesive stack. It is intended to be consumed by the binary (`main.rs`)
//! and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod router;
pub mod runtime;
pub mod viz;
