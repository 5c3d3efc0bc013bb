pub mod correction_config;

pub use correction_config::CorrectionConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{TrifoldError, TrifoldResult};

/// Top-level configuration for the Trifold system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrifoldConfig {
    pub correction: CorrectionConfig,
}

impl TrifoldConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> TrifoldResult<Self> {
        toml::from_str(text).map_err(|e| TrifoldError::Config {
            reason: e.to_string(),
        })
    }
}
