use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::aggregate::{aggregate, bucket_histogram, summarize_scalar, trajectory, yearly_moments};
use crate::config::{
    AGE_DEMOGRAPHICS, DEFAULT_PROBABILITY, EMPLOYMENT_STATUS, FINANCIAL_BEHAVIOR, GEOGRAPHIC,
    HEALTH_INSURANCE, MACROECONOMIC, SimulationConfig, VariantDescriptor, YearMode,
};
use crate::error::Result;
use crate::evaluate::evaluate_trial;
use crate::factors::resolve_factors;
use crate::model::{
    AggregateResult, FactorSet, RiskHistogram, RiskProfile, ScalarSummary, TrajectoryPoint,
    TrialOutcome, YearlyMoments,
};
use crate::sampler::Sampler;

/// Trials per RNG batch. Each batch owns one generator, seeded from the
/// request's root generator, so results are the same however batches are
/// scheduled.
pub const MAX_BATCH_SIZE: usize = 100;

fn batch_len(batch: usize, num_batches: usize, num_trials: usize) -> usize {
    if batch == num_batches - 1 {
        num_trials - batch * MAX_BATCH_SIZE
    } else {
        MAX_BATCH_SIZE
    }
}

fn run_batch(
    descriptor: &VariantDescriptor,
    factors: &FactorSet,
    sampler: &Sampler,
    num_years: usize,
    batch_seed: u64,
    batch_size: usize,
) -> impl Iterator<Item = TrialOutcome> {
    let mut batch_rng = SmallRng::seed_from_u64(batch_seed);
    (0..batch_size).map(move |_| {
        let mut rng = SmallRng::seed_from_u64(batch_rng.next_u64());
        evaluate_trial(descriptor, factors, sampler, num_years, &mut rng)
    })
}

/// Run `config.num_trials` trials and return their outcomes in trial order.
pub fn run_trials(
    descriptor: &VariantDescriptor,
    factors: &FactorSet,
    sampler: &Sampler,
    config: &SimulationConfig,
) -> Vec<TrialOutcome> {
    let num_trials = config.num_trials;
    if num_trials == 0 {
        return Vec::new();
    }
    let num_batches = num_trials.div_ceil(MAX_BATCH_SIZE);

    let mut root = SmallRng::seed_from_u64(config.seed);
    let batch_seeds: Vec<u64> = (0..num_batches).map(|_| root.next_u64()).collect();

    #[cfg(feature = "parallel")]
    let outcomes = batch_seeds
        .into_par_iter()
        .enumerate()
        .flat_map_iter(|(i, seed)| {
            run_batch(
                descriptor,
                factors,
                sampler,
                config.num_years,
                seed,
                batch_len(i, num_batches, num_trials),
            )
        })
        .collect();

    #[cfg(not(feature = "parallel"))]
    let outcomes = batch_seeds
        .into_iter()
        .enumerate()
        .flat_map(|(i, seed)| {
            run_batch(
                descriptor,
                factors,
                sampler,
                config.num_years,
                seed,
                batch_len(i, num_batches, num_trials),
            )
        })
        .collect();

    outcomes
}

fn build_sampler(descriptor: &VariantDescriptor, config: &SimulationConfig) -> Result<Sampler> {
    match descriptor.year_mode {
        YearMode::Independent => Sampler::with_macro(config.noise_std, &config.macro_scenario),
        YearMode::Single | YearMode::Compounding => Sampler::new(config.noise_std),
    }
}

/// Validate inputs, resolve factors and run all trials
fn prepare_and_run(
    descriptor: &VariantDescriptor,
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<(FactorSet, Vec<TrialOutcome>)> {
    config.validate()?;
    let factors = resolve_factors(descriptor, profile, config)?;
    let sampler = build_sampler(descriptor, config)?;

    let num_years = if descriptor.is_multi_year() {
        config.num_years
    } else {
        1
    };
    tracing::debug!(
        variant = descriptor.variant.name(),
        num_trials = config.num_trials,
        num_years,
        seed = config.seed,
        "running simulation"
    );
    if sampler.draws_macro() {
        tracing::debug!(
            expected_pressure = config.macro_scenario.expected_pressure(),
            "sampling macro indicators"
        );
    }

    let outcomes = run_trials(descriptor, &factors, &sampler, config);
    tracing::debug!(
        variant = descriptor.variant.name(),
        trials = outcomes.len(),
        "simulation finished"
    );
    Ok((factors, outcomes))
}

/// Run any variant through the generic engine.
///
/// Nothing is sampled until the profile and config have been validated; the
/// first invalid input is returned as an error.
pub fn run_simulation(
    descriptor: &VariantDescriptor,
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<AggregateResult> {
    let (factors, outcomes) = prepare_and_run(descriptor, profile, config)?;
    Ok(aggregate(descriptor, &factors, &outcomes, config.num_years))
}

fn run_scalar(
    descriptor: &VariantDescriptor,
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<ScalarSummary> {
    let (factors, outcomes) = prepare_and_run(descriptor, profile, config)?;
    Ok(summarize_scalar(&outcomes, &factors))
}

/// Mean probability of default
pub fn simulate_default_probability(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<ScalarSummary> {
    run_scalar(&DEFAULT_PROBABILITY, profile, config)
}

/// Projected credit score per year under random macro conditions
pub fn simulate_macroeconomic(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<Vec<YearlyMoments>> {
    let (_, outcomes) = prepare_and_run(&MACROECONOMIC, profile, config)?;
    Ok(yearly_moments(&outcomes, config.num_years))
}

pub fn simulate_financial_behavior(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<RiskHistogram> {
    let (_, outcomes) = prepare_and_run(&FINANCIAL_BEHAVIOR, profile, config)?;
    Ok(bucket_histogram(&outcomes))
}

/// Mean income per year, compounding from `income_level`
pub fn simulate_employment_status(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<Vec<TrajectoryPoint>> {
    let (_, outcomes) = prepare_and_run(&EMPLOYMENT_STATUS, profile, config)?;
    Ok(trajectory(&outcomes, config.num_years))
}

pub fn simulate_geographic(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<ScalarSummary> {
    run_scalar(&GEOGRAPHIC, profile, config)
}

pub fn simulate_age_demographics(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<ScalarSummary> {
    run_scalar(&AGE_DEMOGRAPHICS, profile, config)
}

pub fn simulate_health_insurance(
    profile: &RiskProfile,
    config: &SimulationConfig,
) -> Result<ScalarSummary> {
    run_scalar(&HEALTH_INSURANCE, profile, config)
}
