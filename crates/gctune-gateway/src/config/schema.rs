use serde::Deserialize;

use gctune_core::error::{GcTuneError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GcTuneError::UnsupportedVersion);
        }

        self.gateway.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path segment under `/debug/` where the metrics page is mounted.
    #[serde(default = "default_metrics_prefix")]
    pub metrics_prefix: String,

    /// Tick interval of the metrics sample stream.
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            metrics_prefix: default_metrics_prefix(),
            sample_interval_ms: default_sample_interval_ms(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if self.metrics_prefix.is_empty() || self.metrics_prefix.contains('/') {
            return Err(GcTuneError::BadRequest(
                "gateway.metrics_prefix must be a single non-empty path segment".into(),
            ));
        }
        if !(100..=60000).contains(&self.sample_interval_ms) {
            return Err(GcTuneError::BadRequest(
                "gateway.sample_interval_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_metrics_prefix() -> String {
    "statsviz".into()
}
fn default_sample_interval_ms() -> u64 {
    1000
}
