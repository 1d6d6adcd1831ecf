//! Mounted live-metrics visualization collaborator.
//!
//! Mounted under `/debug/<prefix>`; the tuning-service contract only
//! performs the two-way dispatch (page vs. `/ws` stream) at the router.

pub mod page;
pub mod ws;

pub use page::page;
pub use ws::ws_upgrade;
