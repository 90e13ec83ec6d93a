//! Factor model
//!
//! Turns a `RiskProfile` into the `FactorSet` of one variant. This is where
//! every input precondition is enforced: required attributes must be present,
//! numeric attributes must be finite and inside their documented domain, and
//! categorical attributes must appear in the variant's table. Inputs are
//! never clamped here.

use crate::config::{SimulationConfig, Variant, VariantDescriptor};
use crate::error::{Result, SimulationError};
use crate::model::{FactorSet, RiskProfile};

/// Reference score of the default-rate template (`650 / credit_score`)
pub const REFERENCE_CREDIT_SCORE: f64 = 650.0;
/// Score ceiling used to normalize credit scores into [0, 1]
pub const MAX_CREDIT_SCORE: f64 = 850.0;
/// Incomes above this are rejected so compounding cannot overflow
pub const MAX_INCOME_LEVEL: f64 = 1.0e12;

fn require(value: Option<f64>, field: &'static str) -> Result<f64> {
    let value = value.ok_or(SimulationError::MissingField { field })?;
    if !value.is_finite() {
        return Err(SimulationError::invalid_range(
            field,
            value,
            "must be a finite number",
        ));
    }
    Ok(value)
}

fn require_category<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str> {
    value.ok_or(SimulationError::MissingField { field })
}

/// Closed numeric domain of a scaled attribute
struct Domain {
    min: f64,
    max: f64,
    reason: &'static str,
}

const ONE_TO_TEN: Domain = Domain {
    min: 1.0,
    max: 10.0,
    reason: "must be between 1 and 10",
};

const ZERO_TO_TEN: Domain = Domain {
    min: 0.0,
    max: 10.0,
    reason: "must be between 0 and 10",
};

const PERCENTAGE: Domain = Domain {
    min: 0.0,
    max: 100.0,
    reason: "must be between 0 and 100",
};

fn require_in(value: Option<f64>, field: &'static str, domain: &Domain) -> Result<f64> {
    let value = require(value, field)?;
    if value < domain.min || value > domain.max {
        return Err(SimulationError::invalid_range(field, value, domain.reason));
    }
    Ok(value)
}

/// Credit score must be strictly positive (it is a divisor) and no higher
/// than the scale maximum.
fn require_credit_score(profile: &RiskProfile) -> Result<f64> {
    let score = require(profile.credit_score, "credit_score")?;
    if score <= 0.0 {
        return Err(SimulationError::invalid_range(
            "credit_score",
            score,
            "must be greater than 0",
        ));
    }
    if score > MAX_CREDIT_SCORE {
        return Err(SimulationError::invalid_range(
            "credit_score",
            score,
            "must not exceed 850",
        ));
    }
    Ok(score)
}

fn require_income(profile: &RiskProfile) -> Result<f64> {
    let income = require(profile.income_level, "income_level")?;
    if income <= 0.0 {
        return Err(SimulationError::invalid_range(
            "income_level",
            income,
            "must be greater than 0",
        ));
    }
    if income > MAX_INCOME_LEVEL {
        return Err(SimulationError::invalid_range(
            "income_level",
            income,
            "exceeds the supported maximum",
        ));
    }
    Ok(income)
}

/// Noise draws beyond this many standard deviations are treated as
/// impossible when bounding an income projection
const PROJECTION_NOISE_SIGMAS: f64 = 10.0;

/// Reject horizons whose worst-case compounded income would leave the
/// finite range of `f64`.
fn require_finite_projection(income: f64, growth: f64, config: &SimulationConfig) -> Result<()> {
    let worst_rate = growth.abs() + PROJECTION_NOISE_SIGMAS * config.noise_std.abs();
    let log_peak = income.ln() + config.num_years as f64 * worst_rate.ln_1p();
    if !log_peak.is_finite() || log_peak >= f64::MAX.ln() {
        return Err(SimulationError::invalid_range(
            "num_years",
            config.num_years as f64,
            "compounded income would overflow",
        ));
    }
    Ok(())
}

/// Resolve the factors of `descriptor`'s variant from `profile`.
///
/// `config.base_rate` feeds the variants that start from a rate (default
/// probability and income growth).
pub fn resolve_factors(
    descriptor: &VariantDescriptor,
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<FactorSet> {
    let tables = &descriptor.tables;

    match descriptor.variant {
        Variant::DefaultProbability => {
            let score = require_credit_score(profile)?;
            Ok(FactorSet::new(config.base_rate).with_factor(
                "credit_factor",
                REFERENCE_CREDIT_SCORE / score,
                1.0,
            ))
        }
        Variant::Macroeconomic => {
            // Macro adjustments are drawn per year by the sampler
            let score = require_credit_score(profile)?;
            Ok(FactorSet::new(score))
        }
        Variant::FinancialBehavior => {
            let score = require_credit_score(profile)?;
            let spending = require_in(profile.spending_habits, "spending_habits", &ONE_TO_TEN)?;
            let payment = require_in(profile.payment_history, "payment_history", &PERCENTAGE)?;
            let dti = require_in(
                profile.debt_to_income_ratio,
                "debt_to_income_ratio",
                &PERCENTAGE,
            )?;

            Ok(FactorSet::new(0.0)
                .with_factor("credit_factor", score / MAX_CREDIT_SCORE, 0.4)
                .with_factor("payment_factor", payment / 100.0, 0.3)
                .with_factor("debt_factor", dti / 100.0, -0.2)
                .with_factor("spending_factor", spending / 10.0, 0.1))
        }
        Variant::EmploymentStatus => {
            require_credit_score(profile)?;
            let stability = require_in(profile.job_stability, "job_stability", &ONE_TO_TEN)?;
            let income = require_income(profile)?;
            let employment_type =
                require_category(profile.employment_type.as_deref(), "employment_type")?;
            let type_factor = tables.employment_type.lookup(employment_type)?;

            // Product of the factors is the deterministic yearly growth rate
            let growth = config.base_rate * (stability / 10.0) * type_factor;
            require_finite_projection(income, growth, config)?;
            Ok(FactorSet::new(income)
                .with_factor("base_growth_rate", config.base_rate, 1.0)
                .with_factor("stability_factor", stability / 10.0, 1.0)
                .with_factor("type_factor", type_factor, 1.0))
        }
        Variant::Geographic => {
            let score = require_credit_score(profile)?;
            let region = require_category(profile.region.as_deref(), "region")?;
            let region_factor = tables.region.lookup(region)?;
            let market = require_in(
                profile.housing_market_trends,
                "housing_market_trends",
                &ONE_TO_TEN,
            )?;
            let unemployment = require_in(
                profile.regional_unemployment_rate,
                "regional_unemployment_rate",
                &PERCENTAGE,
            )?;

            Ok(FactorSet::new(0.0)
                .with_factor("credit_factor", score / MAX_CREDIT_SCORE, 0.4)
                .with_factor("region_factor", region_factor, 0.3)
                .with_factor("market_factor", market / 10.0, 0.2)
                .with_factor("unemployment_factor", unemployment / 10.0, -0.1))
        }
        Variant::AgeDemographics => {
            let score = require_credit_score(profile)?;
            let age = require_category(profile.age_group.as_deref(), "age_group")?;
            let education =
                require_category(profile.education_level.as_deref(), "education_level")?;
            let marital = require_category(profile.marital_status.as_deref(), "marital_status")?;

            let weight = score / MAX_CREDIT_SCORE;
            Ok(FactorSet::new(0.0)
                .with_factor("age_factor", tables.age_group.lookup(age)?, weight)
                .with_factor(
                    "education_factor",
                    tables.education_level.lookup(education)?,
                    weight,
                )
                .with_factor(
                    "marital_factor",
                    tables.marital_status.lookup(marital)?,
                    weight,
                ))
        }
        Variant::HealthInsurance => {
            let score = require_credit_score(profile)?;
            let conditions =
                require_in(profile.health_conditions, "health_conditions", &ZERO_TO_TEN)?;
            let insurance = require_category(
                profile.health_insurance_type.as_deref(),
                "health_insurance_type",
            )?;
            let coverage = require_in(
                profile.insurance_coverage_level,
                "insurance_coverage_level",
                &PERCENTAGE,
            )?;

            let weight = score / MAX_CREDIT_SCORE;
            Ok(FactorSet::new(0.0)
                .with_factor("condition_factor", (10.0 - conditions) / 10.0, weight)
                .with_factor(
                    "insurance_factor",
                    tables.health_insurance_type.lookup(insurance)?,
                    weight,
                )
                .with_factor("coverage_factor", coverage / 100.0, weight))
        }
    }
}
