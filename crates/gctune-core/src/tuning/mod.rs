//! Runtime GC-tuning contract and configuration service.
//!
//! This module hosts the two halves of the control surface:
//! - the wire contract: [`TuningConfig`], a flat two-field record transmitted
//!   under the fixed names `gomemlimit` / `gogc`, both always strings;
//! - the service: [`ConfigReader`] / [`ConfigUpdater`] operating through the
//!   injected [`RuntimeTuner`] and [`SettingsMirror`] capabilities.
//!
//! Both fields stay strings end to end: `"off"` is a valid non-numeric state
//! for the collector percentage, and memory limits use human-size notation
//! rather than raw bytes.

pub mod service;
pub mod size;
pub mod trigger;

use serde::{Deserialize, Serialize};

pub use service::{ConfigReader, ConfigUpdater, RuntimeTuner, SettingsMirror};
pub use service::{GC_PERCENT_KEY, MEMORY_LIMIT_KEY};
pub use size::parse_byte_size;
pub use trigger::{parse_gc_trigger, GcTrigger};

/// GC tuning parameters as they cross the wire.
///
/// Empty string means "unset" and is a valid value for either field, never a
/// missing-field error. Unknown fields in a request body are ignored, not
/// rejected; the only deserialization failure is malformed JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Soft memory ceiling in human-size notation (e.g. `"30MiB"`).
    #[serde(rename = "gomemlimit", default)]
    pub memory_limit: String,
    /// Collector growth-trigger percentage, or the token `"off"`.
    #[serde(rename = "gogc", default)]
    pub gc_percent: String,
}
