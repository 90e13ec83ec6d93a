//! Macroeconomic indicator distributions
//!
//! The macroeconomic variant draws three yearly indicators per trial. Each
//! indicator is described by a `MacroProfile`; the three together form a
//! `MacroScenario`. `UNIFORM_RANGES` is the default and `NORMAL` is a
//! Gaussian alternative.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MacroProfile {
    Fixed { value: f64 },
    Uniform { low: f64, high: f64 },
    Normal { mean: f64, std_dev: f64 },
}

impl MacroProfile {
    /// Expected value of the indicator
    #[must_use]
    pub fn mean(&self) -> f64 {
        match self {
            MacroProfile::Fixed { value } => *value,
            MacroProfile::Uniform { low, high } => (low + high) / 2.0,
            MacroProfile::Normal { mean, .. } => *mean,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroScenario {
    pub unemployment: MacroProfile,
    pub inflation: MacroProfile,
    pub gdp_growth: MacroProfile,
}

impl MacroScenario {
    pub const UNIFORM_RANGES: MacroScenario = MacroScenario {
        unemployment: MacroProfile::Uniform {
            low: 0.03,
            high: 0.10,
        },
        inflation: MacroProfile::Uniform {
            low: 0.01,
            high: 0.04,
        },
        gdp_growth: MacroProfile::Uniform {
            low: 0.01,
            high: 0.05,
        },
    };

    pub const NORMAL: MacroScenario = MacroScenario {
        unemployment: MacroProfile::Normal {
            mean: 0.05,
            std_dev: 0.01,
        },
        inflation: MacroProfile::Normal {
            mean: 0.025,
            std_dev: 0.01,
        },
        gdp_growth: MacroProfile::Normal {
            mean: 0.03,
            std_dev: 0.01,
        },
    };

    /// Net macro pressure at the indicators' expected values
    #[must_use]
    pub fn expected_pressure(&self) -> f64 {
        self.unemployment.mean() + self.inflation.mean() - self.gdp_growth.mean()
    }
}

impl Default for MacroScenario {
    fn default() -> Self {
        Self::UNIFORM_RANGES
    }
}

/// One year's macro indicators for one trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroDraw {
    pub unemployment: f64,
    pub inflation: f64,
    pub gdp_growth: f64,
}

impl MacroDraw {
    /// Multiplicative score adjustment: `1 - (unemployment + inflation - gdp_growth)`
    #[must_use]
    pub fn adjustment(&self) -> f64 {
        1.0 - (self.unemployment + self.inflation - self.gdp_growth)
    }
}
