//! Engine configuration, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields a
//! fully-populated config and partial documents only override what they name.

pub mod classification_config;
pub mod defaults;
pub mod matrix_config;
pub mod observability_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use classification_config::ClassificationConfig;
pub use matrix_config::{JitterSource, MatrixConfig};
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{RasError, RasResult};

/// Top-level configuration for the risk register engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RasConfig {
    pub storage: StorageConfig,
    pub matrix: MatrixConfig,
    pub classification: ClassificationConfig,
    pub observability: ObservabilityConfig,
}

impl RasConfig {
    /// Parse a config from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml(source: &str) -> RasResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> RasResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RasError::ConfigError {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }

    fn check(&self) -> RasResult<()> {
        let threshold = self.classification.quick_win_cost_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(RasError::ConfigError {
                reason: format!("quick_win_cost_threshold must be a non-negative number, got {threshold}"),
            });
        }
        if self.storage.slot_name.trim().is_empty() {
            return Err(RasError::ConfigError {
                reason: "storage.slot_name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
