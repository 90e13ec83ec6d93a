//! Variant descriptors
//!
//! A `VariantDescriptor` tells the generic engine how one simulation type
//! combines factors, which domain its outputs are clamped to, how it steps
//! through years, and how trials are reduced. The seven request types of the
//! service are the constants below.

use serde::{Deserialize, Serialize};

use super::tables::{FactorTable, FactorTables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    DefaultProbability,
    Macroeconomic,
    FinancialBehavior,
    EmploymentStatus,
    Geographic,
    AgeDemographics,
    HealthInsurance,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::DefaultProbability,
        Variant::Macroeconomic,
        Variant::FinancialBehavior,
        Variant::EmploymentStatus,
        Variant::Geographic,
        Variant::AgeDemographics,
        Variant::HealthInsurance,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Variant::DefaultProbability => "default_probability",
            Variant::Macroeconomic => "macroeconomic",
            Variant::FinancialBehavior => "financial_behavior",
            Variant::EmploymentStatus => "employment_status",
            Variant::Geographic => "geographic",
            Variant::AgeDemographics => "age_demographics",
            Variant::HealthInsurance => "health_insurance",
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> VariantDescriptor {
        match self {
            Variant::DefaultProbability => DEFAULT_PROBABILITY,
            Variant::Macroeconomic => MACROECONOMIC,
            Variant::FinancialBehavior => FINANCIAL_BEHAVIOR,
            Variant::EmploymentStatus => EMPLOYMENT_STATUS,
            Variant::Geographic => GEOGRAPHIC,
            Variant::AgeDemographics => AGE_DEMOGRAPHICS,
            Variant::HealthInsurance => HEALTH_INSURANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombinationRule {
    /// `base * Π(factor values) [* macro adjustment] + noise`
    Multiplicative,
    /// `base + Σ(weight * value) + noise`
    Additive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDomain {
    Probability,
    CreditScore,
    /// Raw index or amount, reported without clamping
    Unbounded,
}

impl OutputDomain {
    #[must_use]
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            OutputDomain::Probability => Some((0.0, 1.0)),
            OutputDomain::CreditScore => Some((300.0, 850.0)),
            OutputDomain::Unbounded => None,
        }
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        match self.bounds() {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearMode {
    /// One value per trial
    Single,
    /// Fresh macro draws every year, each year evaluated from the same base
    Independent,
    /// Each year's value becomes the next year's base
    Compounding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Mean,
    Buckets,
    YearlyMoments,
    Trajectory,
}

/// Per-variant defaults for `SimulationConfig`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantDefaults {
    pub num_trials: usize,
    pub num_years: usize,
    pub noise_std: f64,
    pub base_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantDescriptor {
    pub variant: Variant,
    pub combination_rule: CombinationRule,
    pub output_domain: OutputDomain,
    pub year_mode: YearMode,
    pub aggregation: Aggregation,
    /// Multiplier applied to each noise draw before it is combined
    pub noise_scale: f64,
    pub tables: FactorTables,
    pub defaults: VariantDefaults,
}

impl VariantDescriptor {
    /// Replace the table used to resolve `employment_type`
    #[must_use]
    pub fn with_employment_table(mut self, table: &'static FactorTable) -> Self {
        self.tables.employment_type = table;
        self
    }

    #[must_use]
    pub fn is_multi_year(&self) -> bool {
        self.year_mode != YearMode::Single
    }
}

const fn single_year_defaults(num_trials: usize, noise_std: f64) -> VariantDefaults {
    VariantDefaults {
        num_trials,
        num_years: 1,
        noise_std,
        base_rate: 0.05,
    }
}

pub const DEFAULT_PROBABILITY: VariantDescriptor = VariantDescriptor {
    variant: Variant::DefaultProbability,
    combination_rule: CombinationRule::Multiplicative,
    output_domain: OutputDomain::Probability,
    year_mode: YearMode::Single,
    aggregation: Aggregation::Mean,
    noise_scale: 1.0,
    tables: FactorTables::STANDARD,
    defaults: single_year_defaults(100, 0.01),
};

pub const MACROECONOMIC: VariantDescriptor = VariantDescriptor {
    variant: Variant::Macroeconomic,
    combination_rule: CombinationRule::Multiplicative,
    output_domain: OutputDomain::CreditScore,
    year_mode: YearMode::Independent,
    aggregation: Aggregation::YearlyMoments,
    // Noise is drawn on the rate scale and applied to a score
    noise_scale: 100.0,
    tables: FactorTables::STANDARD,
    defaults: VariantDefaults {
        num_trials: 1000,
        num_years: 5,
        noise_std: 0.01,
        base_rate: 0.05,
    },
};

pub const FINANCIAL_BEHAVIOR: VariantDescriptor = VariantDescriptor {
    variant: Variant::FinancialBehavior,
    combination_rule: CombinationRule::Additive,
    output_domain: OutputDomain::Unbounded,
    year_mode: YearMode::Single,
    aggregation: Aggregation::Buckets,
    noise_scale: 1.0,
    tables: FactorTables::STANDARD,
    defaults: single_year_defaults(100, 0.05),
};

pub const EMPLOYMENT_STATUS: VariantDescriptor = VariantDescriptor {
    variant: Variant::EmploymentStatus,
    combination_rule: CombinationRule::Multiplicative,
    output_domain: OutputDomain::Unbounded,
    year_mode: YearMode::Compounding,
    aggregation: Aggregation::Trajectory,
    noise_scale: 1.0,
    tables: FactorTables::STANDARD,
    defaults: VariantDefaults {
        num_trials: 100,
        num_years: 5,
        noise_std: 0.01,
        // Yearly income growth before stability and employment adjustments
        base_rate: 0.02,
    },
};

pub const GEOGRAPHIC: VariantDescriptor = VariantDescriptor {
    variant: Variant::Geographic,
    combination_rule: CombinationRule::Additive,
    output_domain: OutputDomain::Unbounded,
    year_mode: YearMode::Single,
    aggregation: Aggregation::Mean,
    noise_scale: 1.0,
    tables: FactorTables::STANDARD,
    defaults: single_year_defaults(100, 0.01),
};

pub const AGE_DEMOGRAPHICS: VariantDescriptor = VariantDescriptor {
    variant: Variant::AgeDemographics,
    combination_rule: CombinationRule::Additive,
    output_domain: OutputDomain::Unbounded,
    year_mode: YearMode::Single,
    aggregation: Aggregation::Mean,
    noise_scale: 1.0,
    tables: FactorTables::STANDARD,
    defaults: single_year_defaults(100, 0.01),
};

pub const HEALTH_INSURANCE: VariantDescriptor = VariantDescriptor {
    variant: Variant::HealthInsurance,
    combination_rule: CombinationRule::Additive,
    output_domain: OutputDomain::Unbounded,
    year_mode: YearMode::Single,
    aggregation: Aggregation::Mean,
    noise_scale: 1.0,
    tables: FactorTables::STANDARD,
    defaults: single_year_defaults(100, 0.01),
};
