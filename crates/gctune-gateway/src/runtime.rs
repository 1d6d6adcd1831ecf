//! Production adapters for the tuning capabilities.
//!
//! [`ProcessTuner`] holds the process-wide tuning registers the collector
//! consults; [`EnvMirror`] keeps the human-readable form of the last-applied
//! settings in environment variables for read-back.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Mutex;

use gctune_core::tuning::{GcTrigger, RuntimeTuner, SettingsMirror};

/// Trigger register value meaning "percentage-based triggering disabled".
pub const TRIGGER_DISABLED: i64 = -1;
/// Trigger register value meaning "never set".
pub const TRIGGER_UNSET: i64 = 0;

/// Live tuning registers. A ceiling of zero means no ceiling has been set.
#[derive(Default)]
pub struct ProcessTuner {
    ceiling_bytes: AtomicU64,
    trigger_percent: AtomicI64,
}

impl ProcessTuner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current soft memory ceiling in bytes (0 = unset).
    pub fn memory_ceiling(&self) -> u64 {
        self.ceiling_bytes.load(Ordering::Relaxed)
    }

    /// Current trigger percentage, [`TRIGGER_DISABLED`], or [`TRIGGER_UNSET`].
    pub fn collector_trigger(&self) -> i64 {
        self.trigger_percent.load(Ordering::Relaxed)
    }
}

impl RuntimeTuner for ProcessTuner {
    fn set_memory_ceiling(&self, bytes: u64) {
        self.ceiling_bytes.store(bytes, Ordering::Relaxed);
    }

    fn set_collector_trigger(&self, trigger: GcTrigger) {
        let value = match trigger {
            GcTrigger::Percent(pct) => i64::from(pct),
            GcTrigger::Disabled => TRIGGER_DISABLED,
        };
        self.trigger_percent.store(value, Ordering::Relaxed);
    }
}

/// Environment-variable mirror of the last-applied settings.
///
/// Process environment access is not thread-safe on its own: `setenv` racing
/// `getenv` is undefined behavior on glibc. A single internal lock covers
/// both directions; after startup nothing else touches these variables.
#[derive(Default)]
pub struct EnvMirror {
    lock: Mutex<()>,
}

impl SettingsMirror for EnvMirror {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::var(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _guard = self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        std::env::set_var(key, value);
    }
}
