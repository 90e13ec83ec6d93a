//! Per-trial random draws
//!
//! A `Sampler` is built once per request, which validates every
//! distribution up front, and is then shared read-only by all trials. It
//! never owns an RNG: each call to [`Sampler::draw`] takes the trial's own
//! generator, so a given seed always reproduces the same draws.

use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use crate::error::{Result, SimulationError};
use crate::model::{MacroDraw, MacroProfile, MacroScenario};

#[derive(Debug, Clone, Copy)]
enum IndicatorDistribution {
    Fixed(f64),
    Uniform(Uniform<f64>),
    Normal(Normal<f64>),
}

/// Macro indicators are rates; parameters outside `[-1, 1]` are rejected
pub const MAX_INDICATOR_MAGNITUDE: f64 = 1.0;

fn is_indicator_rate(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_INDICATOR_MAGNITUDE
}

impl IndicatorDistribution {
    fn from_profile(profile: &MacroProfile, indicator: &'static str) -> Result<Self> {
        let invalid = |reason| SimulationError::InvalidDistribution {
            profile_type: indicator,
            reason,
        };

        match *profile {
            MacroProfile::Fixed { value } => {
                if !is_indicator_rate(value) {
                    return Err(invalid("fixed value must be a finite rate between -1 and 1"));
                }
                Ok(IndicatorDistribution::Fixed(value))
            }
            MacroProfile::Uniform { low, high } => {
                if !is_indicator_rate(low) || !is_indicator_rate(high) {
                    return Err(invalid("uniform bounds must be finite rates between -1 and 1"));
                }
                Uniform::new(low, high)
                    .map(IndicatorDistribution::Uniform)
                    .map_err(|_| invalid("uniform low must be below high"))
            }
            MacroProfile::Normal { mean, std_dev } => {
                if !is_indicator_rate(mean) {
                    return Err(invalid("normal mean must be a finite rate between -1 and 1"));
                }
                // Normal::new accepts a negative std_dev, so check it here
                if !std_dev.is_finite() || !(0.0..=MAX_INDICATOR_MAGNITUDE).contains(&std_dev) {
                    return Err(invalid("std_dev must be between 0 and 1"));
                }
                Normal::new(mean, std_dev)
                    .map(IndicatorDistribution::Normal)
                    .map_err(|_| invalid("std_dev must be between 0 and 1"))
            }
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            IndicatorDistribution::Fixed(value) => *value,
            IndicatorDistribution::Uniform(dist) => dist.sample(rng),
            IndicatorDistribution::Normal(dist) => dist.sample(rng),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct MacroSampler {
    unemployment: IndicatorDistribution,
    inflation: IndicatorDistribution,
    gdp_growth: IndicatorDistribution,
}

impl MacroSampler {
    fn new(scenario: &MacroScenario) -> Result<Self> {
        Ok(Self {
            unemployment: IndicatorDistribution::from_profile(
                &scenario.unemployment,
                "unemployment",
            )?,
            inflation: IndicatorDistribution::from_profile(&scenario.inflation, "inflation")?,
            gdp_growth: IndicatorDistribution::from_profile(&scenario.gdp_growth, "gdp_growth")?,
        })
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MacroDraw {
        MacroDraw {
            unemployment: self.unemployment.sample(rng),
            inflation: self.inflation.sample(rng),
            gdp_growth: self.gdp_growth.sample(rng),
        }
    }
}

/// Random component of one trial (or one year of a trial)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialDraw {
    pub noise: f64,
    pub macro_draw: Option<MacroDraw>,
}

#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    noise: Normal<f64>,
    macro_sampler: Option<MacroSampler>,
}

impl Sampler {
    /// Noise-only sampler
    pub fn new(noise_std: f64) -> Result<Self> {
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(SimulationError::invalid_range(
                "noise_std",
                noise_std,
                "must be non-negative and finite",
            ));
        }
        let noise =
            Normal::new(0.0, noise_std).map_err(|_| SimulationError::InvalidDistribution {
                profile_type: "noise",
                reason: "std_dev must be non-negative and finite",
            })?;

        Ok(Self {
            noise,
            macro_sampler: None,
        })
    }

    /// Sampler that also draws yearly macro indicators
    pub fn with_macro(noise_std: f64, scenario: &MacroScenario) -> Result<Self> {
        let mut sampler = Self::new(noise_std)?;
        sampler.macro_sampler = Some(MacroSampler::new(scenario)?);
        Ok(sampler)
    }

    #[must_use]
    pub fn draws_macro(&self) -> bool {
        self.macro_sampler.is_some()
    }

    /// Draw macro indicators (if configured) and then the noise term
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> TrialDraw {
        let macro_draw = self.macro_sampler.as_ref().map(|m| m.sample(rng));
        TrialDraw {
            noise: self.noise.sample(rng),
            macro_draw,
        }
    }
}
