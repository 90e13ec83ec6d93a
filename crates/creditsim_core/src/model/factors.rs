//! Resolved numeric factors for one request

use serde::{Deserialize, Serialize};

/// One named adjustment derived from a profile attribute.
///
/// Multiplicative variants use `value` only; additive variants contribute
/// `weight * value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Factor {
    pub name: &'static str,
    pub value: f64,
    pub weight: f64,
}

/// Factor name/value pair as echoed back in scalar results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFactor {
    pub name: String,
    pub value: f64,
}

/// The factors of one variant, computed once per request and then shared
/// read-only by every trial.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorSet {
    base: f64,
    factors: Vec<Factor>,
}

impl FactorSet {
    #[must_use]
    pub fn new(base: f64) -> Self {
        Self {
            base,
            factors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_factor(mut self, name: &'static str, value: f64, weight: f64) -> Self {
        self.factors.push(Factor {
            name,
            value,
            weight,
        });
        self
    }

    /// Un-adjusted starting value (rate, score, income or additive intercept)
    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value)
    }

    /// Product of all factor values; 1.0 when there are none
    #[must_use]
    pub fn product(&self) -> f64 {
        self.factors.iter().map(|f| f.value).product()
    }

    /// Sum of `weight * value` over all factors
    #[must_use]
    pub fn weighted_sum(&self) -> f64 {
        self.factors.iter().map(|f| f.weight * f.value).sum()
    }

    #[must_use]
    pub fn resolved(&self) -> Vec<ResolvedFactor> {
        self.factors
            .iter()
            .map(|f| ResolvedFactor {
                name: f.name.to_string(),
                value: f.value,
            })
            .collect()
    }
}
