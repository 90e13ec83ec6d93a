//! Trial evaluator
//!
//! Combines a variant's `FactorSet` with fresh sampler draws into one
//! `TrialOutcome`, clamped to the variant's output domain.

use rand::Rng;

use crate::config::{CombinationRule, VariantDescriptor, YearMode};
use crate::model::{FactorSet, TrialOutcome};
use crate::sampler::{Sampler, TrialDraw};

/// Apply the variant's combination rule to one draw, before clamping.
#[must_use]
pub fn combine(
    descriptor: &VariantDescriptor,
    base: f64,
    factors: &FactorSet,
    draw: &TrialDraw,
) -> f64 {
    let noise = draw.noise * descriptor.noise_scale;
    match descriptor.combination_rule {
        CombinationRule::Multiplicative => {
            let macro_adjustment = draw.macro_draw.map_or(1.0, |m| m.adjustment());
            base * factors.product() * macro_adjustment + noise
        }
        CombinationRule::Additive => base + factors.weighted_sum() + noise,
    }
}

/// Run one trial. `num_years` is ignored by single-year variants.
pub fn evaluate_trial<R: Rng + ?Sized>(
    descriptor: &VariantDescriptor,
    factors: &FactorSet,
    sampler: &Sampler,
    num_years: usize,
    rng: &mut R,
) -> TrialOutcome {
    let domain = descriptor.output_domain;

    match descriptor.year_mode {
        YearMode::Single => {
            let draw = sampler.draw(rng);
            TrialOutcome::Scalar(domain.clamp(combine(descriptor, factors.base(), factors, &draw)))
        }
        YearMode::Independent => {
            let yearly = (0..num_years)
                .map(|_| {
                    let draw = sampler.draw(rng);
                    domain.clamp(combine(descriptor, factors.base(), factors, &draw))
                })
                .collect();
            TrialOutcome::Yearly(yearly)
        }
        YearMode::Compounding => {
            // The factor product is the deterministic growth rate; noise
            // perturbs the rate, not the level.
            let growth = factors.product();
            let mut value = factors.base();
            let yearly = (0..num_years)
                .map(|_| {
                    let draw = sampler.draw(rng);
                    let rate = growth + draw.noise * descriptor.noise_scale;
                    value = domain.clamp(value * (1.0 + rate));
                    value
                })
                .collect();
            TrialOutcome::Yearly(yearly)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DEFAULT_PROBABILITY, EMPLOYMENT_STATUS, FINANCIAL_BEHAVIOR, MACROECONOMIC,
    };
    use crate::model::{MacroDraw, MacroProfile, MacroScenario};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_multiplicative_default_rate() {
        let factors = FactorSet::new(0.05).with_factor("credit_factor", 650.0 / 650.0, 1.0);
        let draw = TrialDraw {
            noise: 0.0,
            macro_draw: None,
        };
        assert_eq!(combine(&DEFAULT_PROBABILITY, 0.05, &factors, &draw), 0.05);

        let draw = TrialDraw {
            noise: 0.01,
            macro_draw: None,
        };
        let value = combine(&DEFAULT_PROBABILITY, 0.05, &factors, &draw);
        assert!((value - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_multiplicative_macro_score() {
        let factors = FactorSet::new(700.0);
        let draw = TrialDraw {
            noise: 0.01,
            macro_draw: Some(MacroDraw {
                unemployment: 0.05,
                inflation: 0.02,
                gdp_growth: 0.03,
            }),
        };
        // 700 * 0.96 + 0.01 * 100
        let value = combine(&MACROECONOMIC, 700.0, &factors, &draw);
        assert!((value - 673.0).abs() < 1e-9);
    }

    #[test]
    fn test_additive_weighted_score() {
        let factors = FactorSet::new(0.0)
            .with_factor("a", 1.0, 0.4)
            .with_factor("b", 0.5, -0.2);
        let draw = TrialDraw {
            noise: 0.05,
            macro_draw: None,
        };
        let value = combine(&FINANCIAL_BEHAVIOR, 0.0, &factors, &draw);
        assert!((value - 0.35).abs() < 1e-12);
    }

    #[test]
    fn test_single_year_output_is_clamped() {
        // 0.05 * 650 / 1 is far above 1
        let factors = FactorSet::new(0.05).with_factor("credit_factor", 650.0, 1.0);
        let sampler = Sampler::new(0.01).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);

        let outcome = evaluate_trial(&DEFAULT_PROBABILITY, &factors, &sampler, 1, &mut rng);
        assert_eq!(outcome, TrialOutcome::Scalar(1.0));
    }

    #[test]
    fn test_independent_years_clamped_to_score_range() {
        let factors = FactorSet::new(250.0);
        let sampler = Sampler::with_macro(0.01, &MacroScenario::UNIFORM_RANGES).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);

        let outcome = evaluate_trial(&MACROECONOMIC, &factors, &sampler, 5, &mut rng);
        let values = outcome.values();
        assert_eq!(values.len(), 5);
        // 250 * (1 - pressure) stays far below the score floor
        assert!(values.iter().all(|v| *v == 300.0));
    }

    #[test]
    fn test_compounding_feeds_previous_year() {
        let factors = FactorSet::new(1000.0)
            .with_factor("base_growth_rate", 0.02, 1.0)
            .with_factor("stability_factor", 1.0, 1.0)
            .with_factor("type_factor", 1.0, 1.0);
        let sampler = Sampler::new(0.0).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);

        let outcome = evaluate_trial(&EMPLOYMENT_STATUS, &factors, &sampler, 3, &mut rng);
        let values = outcome.values();
        assert!((values[0] - 1020.0).abs() < 1e-9);
        assert!((values[1] - 1040.4).abs() < 1e-9);
        assert!((values[2] - 1061.208).abs() < 1e-9);
    }

    #[test]
    fn test_fixed_macro_matches_formula() {
        let scenario = MacroScenario {
            unemployment: MacroProfile::Fixed { value: 0.05 },
            inflation: MacroProfile::Fixed { value: 0.02 },
            gdp_growth: MacroProfile::Fixed { value: 0.03 },
        };
        let factors = FactorSet::new(700.0);
        let sampler = Sampler::with_macro(0.0, &scenario).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);

        let outcome = evaluate_trial(&MACROECONOMIC, &factors, &sampler, 2, &mut rng);
        for value in outcome.values() {
            assert!((value - 672.0).abs() < 1e-9);
        }
    }
}
