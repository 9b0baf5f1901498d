//! Runtime configuration.
//!
//! Configuration is read from TOML. Every key is optional:
//!
//! ```toml
//! use_fixture_data = false
//! input_policy = "strict"
//!
//! [factors]
//! grid_electricity = 0.82
//! ```
//!
//! Omitted factors keep their standard values. The factor table is validated
//! as part of loading, so a loaded config always yields a usable calculator.

use crate::calculator::{EmissionCalculator, InputPolicy};
use crate::errors::FootprintResult;
use crate::factors::EmissionFactors;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootprintConfig {
    /// Substitute the sample household for blank submissions
    pub use_fixture_data: bool,
    pub input_policy: InputPolicy,
    pub factors: EmissionFactors,
}

impl FootprintConfig {
    pub fn from_toml_str(text: &str) -> FootprintResult<Self> {
        let config: FootprintConfig = toml::from_str(text)?;
        config.factors.validate()?;
        debug!(
            "Resolved configuration: policy={:?}, fixture data={}",
            config.input_policy, config.use_fixture_data
        );
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> FootprintResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build the calculator described by this configuration.
    pub fn calculator(&self) -> FootprintResult<EmissionCalculator> {
        EmissionCalculator::from_factors(self.factors, self.input_policy)
    }
}
