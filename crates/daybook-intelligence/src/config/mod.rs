// ABOUTME: Engine configuration aggregate and its section modules
// ABOUTME: Submodules stay private; sections and errors re-export flat from here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Daybook Contributors

//! Engine configuration.
//!
//! [`EngineConfig`] bundles every tunable of the engine: quality weights
//! and curves, daily-minimum gates, nutrition bands and planner limits,
//! shots windows, and the owner's home time zone. `Default` reproduces the
//! tracker's historical behavior exactly; [`EngineConfig::validate`] checks
//! a customized configuration before use.

use serde::{Deserialize, Serialize};

use daybook_core::time::zone_is_known;

mod error;
mod nutrition;
mod quality;
mod shots;

pub use error::ConfigError;
pub use nutrition::{BandLimits, DeficitWeights, NutritionBands, NutritionConfig};
pub use quality::{GatesConfig, QualityConfig, QualityCurves, QualityWeights};
pub use shots::{ShotsConfig, ShotsThresholds};

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Quality score weights, curves, and bonus
    pub quality: QualityConfig,
    /// Daily-minimum gate thresholds
    pub gates: GatesConfig,
    /// Nutrition bands and planner limits
    pub nutrition: NutritionConfig,
    /// Shots windows and label thresholds
    pub shots: ShotsConfig,
    /// IANA name of the tracker owner's home zone
    pub time_zone: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            quality: QualityConfig::default(),
            gates: GatesConfig::default(),
            nutrition: NutritionConfig::default(),
            shots: ShotsConfig::default(),
            time_zone: "UTC".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Validate every section and the time zone.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.quality.validate()?;
        self.gates.validate()?;
        self.nutrition.validate()?;
        self.shots.validate()?;
        if !zone_is_known(&self.time_zone) {
            return Err(ConfigError::InvalidRange(
                "time_zone must be a known IANA zone name",
            ));
        }
        Ok(())
    }
}
