//! Simulation configuration
//!
//! `SimulationConfig` holds the per-request knobs (trial count, horizon,
//! noise, base rate, seed). Defaults differ by variant, so configs are
//! normally created with [`SimulationConfig::for_variant`] and adjusted with
//! the `with_*` methods:
//!
//! ```ignore
//! use creditsim_core::config::{SimulationConfig, Variant};
//!
//! let config = SimulationConfig::for_variant(Variant::Macroeconomic)
//!     .with_trials(5_000)
//!     .with_seed(42);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};
use crate::model::MacroScenario;

pub mod descriptors;
pub mod tables;

pub use descriptors::{
    AGE_DEMOGRAPHICS, Aggregation, CombinationRule, DEFAULT_PROBABILITY, EMPLOYMENT_STATUS,
    FINANCIAL_BEHAVIOR, GEOGRAPHIC, HEALTH_INSURANCE, MACROECONOMIC, OutputDomain, Variant,
    VariantDefaults, VariantDescriptor, YearMode,
};
pub use tables::{
    AGE_GROUP_TABLE, EDUCATION_TABLE, EMPLOYMENT_INCOME_TABLE, EMPLOYMENT_RISK_TABLE,
    FactorTable, FactorTables, INSURANCE_TYPE_TABLE, MARITAL_STATUS_TABLE, REGION_TABLE,
};

/// Upper bound on `noise_std`; larger values swamp every factor
pub const MAX_NOISE_STD: f64 = 1.0;
/// Longest simulated horizon, in years
pub const MAX_YEARS: usize = 100;

fn default_num_trials() -> usize {
    100
}

fn default_num_years() -> usize {
    1
}

fn default_noise_std() -> f64 {
    0.01
}

fn default_base_rate() -> f64 {
    0.05
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_num_trials")]
    pub num_trials: usize,
    /// Simulated years; ignored by single-year variants
    #[serde(default = "default_num_years")]
    pub num_years: usize,
    /// Standard deviation of the per-trial Gaussian noise
    #[serde(default = "default_noise_std")]
    pub noise_std: f64,
    /// Base default rate, or base growth rate for the income trajectory
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
    /// Seed for the trial RNG streams
    #[serde(default)]
    pub seed: u64,
    /// Indicator distributions for the macroeconomic variant
    #[serde(default)]
    pub macro_scenario: MacroScenario,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_trials: default_num_trials(),
            num_years: default_num_years(),
            noise_std: default_noise_std(),
            base_rate: default_base_rate(),
            seed: 0,
            macro_scenario: MacroScenario::default(),
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn for_variant(variant: Variant) -> Self {
        Self::from_defaults(&variant.descriptor().defaults)
    }

    #[must_use]
    pub fn from_defaults(defaults: &VariantDefaults) -> Self {
        Self {
            num_trials: defaults.num_trials,
            num_years: defaults.num_years,
            noise_std: defaults.noise_std,
            base_rate: defaults.base_rate,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_trials(mut self, num_trials: usize) -> Self {
        self.num_trials = num_trials;
        self
    }

    #[must_use]
    pub fn with_years(mut self, num_years: usize) -> Self {
        self.num_years = num_years;
        self
    }

    #[must_use]
    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    #[must_use]
    pub fn with_base_rate(mut self, base_rate: f64) -> Self {
        self.base_rate = base_rate;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_macro_scenario(mut self, scenario: MacroScenario) -> Self {
        self.macro_scenario = scenario;
        self
    }

    /// Check the simulation knobs. Profile attributes are checked separately
    /// by the factor model.
    pub fn validate(&self) -> Result<()> {
        if self.num_trials == 0 {
            return Err(SimulationError::invalid_range(
                "num_trials",
                0.0,
                "must be greater than 0",
            ));
        }
        if self.num_years == 0 {
            return Err(SimulationError::invalid_range(
                "num_years",
                0.0,
                "must be greater than 0",
            ));
        }
        if self.num_years > MAX_YEARS {
            return Err(SimulationError::invalid_range(
                "num_years",
                self.num_years as f64,
                "must be at most 100",
            ));
        }
        if !self.noise_std.is_finite() || !(0.0..=MAX_NOISE_STD).contains(&self.noise_std) {
            return Err(SimulationError::invalid_range(
                "noise_std",
                self.noise_std,
                "must be between 0 and 1",
            ));
        }
        if !self.base_rate.is_finite() || !(0.0..=1.0).contains(&self.base_rate) {
            return Err(SimulationError::invalid_range(
                "base_rate",
                self.base_rate,
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }
}
