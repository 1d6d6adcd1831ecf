//! Shared application state for the gctune gateway.

use std::sync::{Arc, Mutex, MutexGuard};

use gctune_core::tuning::{ConfigReader, ConfigUpdater, SettingsMirror};

use crate::config::GatewayConfig;
use crate::runtime::{EnvMirror, ProcessTuner};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    tuner: Arc<ProcessTuner>,
    reader: ConfigReader,
    // Serializes the combined apply+mirror sequence so concurrent updates
    // cannot interleave non-atomically. Reads take no lock.
    updater: Mutex<ConfigUpdater>,
}

impl AppState {
    /// Build application state with the production adapters.
    pub fn new(cfg: GatewayConfig) -> Self {
        Self::with_mirror(cfg, Arc::new(EnvMirror::default()))
    }

    /// Build application state with an injected mirror (tests use an
    /// in-memory one to avoid touching real process environment).
    pub fn with_mirror(cfg: GatewayConfig, mirror: Arc<dyn SettingsMirror>) -> Self {
        let tuner = Arc::new(ProcessTuner::new());
        let reader = ConfigReader::new(Arc::clone(&mirror));
        let updater = Mutex::new(ConfigUpdater::new(tuner.clone(), mirror));

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                tuner,
                reader,
                updater,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn tuner(&self) -> &ProcessTuner {
        &self.inner.tuner
    }

    pub fn reader(&self) -> &ConfigReader {
        &self.inner.reader
    }

    /// Exclusive access to the updater. Apply never panics, so the lock
    /// cannot actually be poisoned; recover anyway instead of unwrapping.
    pub fn updater(&self) -> MutexGuard<'_, ConfigUpdater> {
        self.inner
            .updater
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
