//! Configuration read/apply service over injected runtime capabilities.
//!
//! The live collector settings and their environment mirror are process-wide
//! singletons in production. They are abstracted here as [`RuntimeTuner`] and
//! [`SettingsMirror`] so the service can be exercised without mutating real
//! process state.

use std::sync::Arc;

use super::size::parse_byte_size;
use super::trigger::{parse_gc_trigger, GcTrigger};
use super::TuningConfig;

/// Mirror key for the memory-limit human-size string.
pub const MEMORY_LIMIT_KEY: &str = "GOMEMLIMIT";
/// Mirror key for the collector percentage (or `"off"`).
pub const GC_PERCENT_KEY: &str = "GOGC";

/// Live runtime tuning knobs.
///
/// Application calls are assumed never to fail once their input is validated
/// as a positive byte count / valid trigger token.
pub trait RuntimeTuner: Send + Sync {
    /// Set the soft memory ceiling in bytes (always strictly positive).
    fn set_memory_ceiling(&self, bytes: u64);
    /// Set or disable the collector growth trigger.
    fn set_collector_trigger(&self, trigger: GcTrigger);
}

/// Process-wide string key-value side-channel remembering the last-applied
/// human-readable settings for later read-back.
pub trait SettingsMirror: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Produces the current effective tuning configuration.
pub struct ConfigReader {
    mirror: Arc<dyn SettingsMirror>,
}

impl ConfigReader {
    pub fn new(mirror: Arc<dyn SettingsMirror>) -> Self {
        Self { mirror }
    }

    /// Read the current configuration from the mirror. Unset keys come back
    /// as empty strings; this never fails.
    pub fn read(&self) -> TuningConfig {
        TuningConfig {
            memory_limit: self.mirror.get(MEMORY_LIMIT_KEY).unwrap_or_default(),
            gc_percent: self.mirror.get(GC_PERCENT_KEY).unwrap_or_default(),
        }
    }
}

/// Validates and applies candidate configurations to the live runtime.
///
/// Fields are evaluated independently: a malformed value for one setting
/// never blocks a valid value for the other, and malformed values are
/// skipped silently rather than surfaced as errors. Every applied change is
/// immediately written back to the mirror so a subsequent read stays
/// consistent with the live runtime.
pub struct ConfigUpdater {
    tuner: Arc<dyn RuntimeTuner>,
    mirror: Arc<dyn SettingsMirror>,
}

impl ConfigUpdater {
    pub fn new(tuner: Arc<dyn RuntimeTuner>, mirror: Arc<dyn SettingsMirror>) -> Self {
        Self { tuner, mirror }
    }

    /// Apply a candidate configuration field by field.
    ///
    /// Returns the candidate verbatim as the accepted response; the true
    /// applied state is observed through a fresh [`ConfigReader::read`].
    /// Callers needing atomicity under concurrent updates must serialize
    /// calls to this method (the gateway holds it behind a mutex).
    pub fn apply(&self, candidate: &TuningConfig) -> TuningConfig {
        self.apply_memory_limit(&candidate.memory_limit);
        self.apply_gc_percent(&candidate.gc_percent);
        candidate.clone()
    }

    fn apply_memory_limit(&self, raw: &str) {
        // Unparsable sizes count as zero; a ceiling of zero is never applied.
        match parse_byte_size(raw) {
            Some(bytes) if bytes > 0 => {
                self.tuner.set_memory_ceiling(bytes);
                self.mirror.set(MEMORY_LIMIT_KEY, raw);
                tracing::info!(limit = %raw, bytes, "memory ceiling applied");
            }
            _ => {
                if !raw.is_empty() {
                    tracing::debug!(limit = %raw, "memory limit skipped (unparsable or zero)");
                }
            }
        }
    }

    fn apply_gc_percent(&self, raw: &str) {
        match parse_gc_trigger(raw) {
            Some(trigger @ GcTrigger::Percent(pct)) => {
                self.tuner.set_collector_trigger(trigger);
                self.mirror.set(GC_PERCENT_KEY, raw);
                tracing::info!(percent = pct, "collector trigger applied");
            }
            Some(GcTrigger::Disabled) => {
                self.tuner.set_collector_trigger(GcTrigger::Disabled);
                self.mirror.set(GC_PERCENT_KEY, raw);
                tracing::info!("collector trigger disabled");
            }
            None => {
                if !raw.is_empty() {
                    tracing::debug!(percent = %raw, "gc percent skipped (invalid)");
                }
            }
        }
    }
}
