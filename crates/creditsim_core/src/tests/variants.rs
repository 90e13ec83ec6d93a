//! End-to-end tests for the seven simulation variants
//!
//! These tests verify:
//! - Zero-noise runs reproduce the deterministic formula exactly
//! - Noisy runs land near the formula value
//! - Each variant reports its own output shape

use crate::config::{
    EMPLOYMENT_RISK_TABLE, EMPLOYMENT_STATUS, SimulationConfig, Variant,
};
use crate::error::SimulationError;
use crate::model::RiskProfile;
use crate::simulation::{
    run_simulation, simulate_age_demographics, simulate_default_probability,
    simulate_employment_status, simulate_financial_behavior, simulate_geographic,
    simulate_health_insurance, simulate_macroeconomic,
};

fn config(variant: Variant) -> SimulationConfig {
    SimulationConfig::for_variant(variant).with_seed(42)
}

/// A reference credit score with no noise gives exactly the base rate
#[test]
fn test_default_probability_zero_noise() {
    let profile = RiskProfile::new(650.0);
    let cfg = config(Variant::DefaultProbability)
        .with_trials(1)
        .with_noise_std(0.0);

    let summary = simulate_default_probability(&profile, &cfg).unwrap();
    assert_eq!(summary.mean, 0.05);
    assert_eq!(summary.num_trials, 1);

    let summary = simulate_default_probability(&profile, &cfg.with_trials(1_000)).unwrap();
    assert!((summary.mean - 0.05).abs() < 1e-12);
    assert!(summary.variance < 1e-12);
}

#[test]
fn test_default_probability_lower_score_is_riskier() {
    let cfg = config(Variant::DefaultProbability).with_trials(2_000);
    let good = simulate_default_probability(&RiskProfile::new(800.0), &cfg).unwrap();
    let poor = simulate_default_probability(&RiskProfile::new(500.0), &cfg).unwrap();

    assert!(poor.mean > good.mean);
    assert!((0.0..=1.0).contains(&good.mean));
    assert!((0.0..=1.0).contains(&poor.mean));
}

#[test]
fn test_geographic_near_formula() {
    let profile = RiskProfile::new(700.0)
        .region("urban")
        .housing_market_trends(5.0)
        .regional_unemployment_rate(5.0);

    let summary = simulate_geographic(&profile, &config(Variant::Geographic)).unwrap();

    let expected = 0.4 * 700.0 / 850.0 + 0.3 * 1.2 + 0.2 * 0.5 - 0.1 * 0.5;
    assert!(
        (summary.mean - expected).abs() < 0.02,
        "Expected {:.4}, got {:.4}",
        expected,
        summary.mean
    );
    assert_eq!(summary.factor("region_factor"), Some(1.2));
    assert_eq!(summary.factor("market_factor"), Some(0.5));
    assert_eq!(summary.factor("unemployment_factor"), Some(0.5));
}

#[test]
fn test_macroeconomic_yearly_scores() {
    let profile = RiskProfile::new(700.0);
    let years = simulate_macroeconomic(&profile, &config(Variant::Macroeconomic)).unwrap();

    assert_eq!(years.len(), 5);
    for (i, year) in years.iter().enumerate() {
        assert_eq!(year.year, i + 1);
        assert!((300.0..=850.0).contains(&year.mean));
        assert!(year.variance >= 0.0);
        // Expected pressure under the default ranges is 0.065 + 0.025 - 0.03
        assert!(
            (year.mean - 700.0 * 0.94).abs() < 5.0,
            "year {} mean {:.2}",
            year.year,
            year.mean
        );
    }
}

#[test]
fn test_financial_behavior_buckets() {
    // 0.4 * 800/850 + 0.3 * 0.95 - 0.2 * 0.2 + 0.1 * 0.8 is about 0.70, close
    // to the low-risk threshold, so both sides should be populated
    let profile = RiskProfile::new(800.0)
        .payment_history(95.0)
        .debt_to_income_ratio(20.0)
        .spending_habits(8.0);
    let cfg = config(Variant::FinancialBehavior).with_trials(1_000);

    let histogram = simulate_financial_behavior(&profile, &cfg).unwrap();
    assert_eq!(histogram.total(), 1_000);
    assert!(histogram.low > 0);
    assert!(histogram.medium > 0);
    assert_eq!(histogram.high, 0);
}

#[test]
fn test_employment_trajectory_compounds() {
    let profile = RiskProfile::new(700.0)
        .employment_type("full-time")
        .job_stability(10.0)
        .income_level(50_000.0);
    let cfg = config(Variant::EmploymentStatus).with_noise_std(0.0);

    let points = simulate_employment_status(&profile, &cfg).unwrap();
    assert_eq!(points.len(), 5);
    // Growth rate 0.02 * 1.0 * 1.0
    for point in &points {
        let expected = 50_000.0 * 1.02_f64.powi(point.year as i32);
        assert!((point.value - expected).abs() < 1e-6);
    }
}

#[test]
fn test_employment_risk_table_is_selectable() {
    let profile = RiskProfile::new(700.0)
        .employment_type("unemployed")
        .job_stability(5.0)
        .income_level(10_000.0);
    let cfg = config(Variant::EmploymentStatus).with_noise_std(0.0).with_years(1);

    let income = run_simulation(&EMPLOYMENT_STATUS, &profile, &cfg).unwrap();
    let risk = run_simulation(
        &EMPLOYMENT_STATUS.with_employment_table(&EMPLOYMENT_RISK_TABLE),
        &profile,
        &cfg,
    )
    .unwrap();

    // 0.02 * 0.5 * 0.5 versus 0.02 * 0.5 * 2.0
    let income = income.as_trajectory().unwrap()[0].value;
    let risk = risk.as_trajectory().unwrap()[0].value;
    assert!((income - 10_050.0).abs() < 1e-6);
    assert!((risk - 10_200.0).abs() < 1e-6);
}

#[test]
fn test_age_demographics_impact() {
    let profile = RiskProfile::new(850.0)
        .age_group("26-35")
        .education_level("master")
        .marital_status("married");
    let cfg = config(Variant::AgeDemographics).with_noise_std(0.0);

    let summary = simulate_age_demographics(&profile, &cfg).unwrap();
    assert!((summary.mean - (1.0 + 1.2 + 1.1)).abs() < 1e-9);
    assert_eq!(summary.factor("education_factor"), Some(1.2));
}

#[test]
fn test_health_insurance_risk() {
    let profile = RiskProfile::new(425.0)
        .health_conditions(2.0)
        .health_insurance_type("private")
        .insurance_coverage_level(80.0);
    let cfg = config(Variant::HealthInsurance).with_noise_std(0.0);

    let summary = simulate_health_insurance(&profile, &cfg).unwrap();
    // 0.5 * (0.8 + 1.2 + 0.8)
    assert!((summary.mean - 1.4).abs() < 1e-9);
    assert_eq!(summary.factor("condition_factor"), Some(0.8));
}

#[test]
fn test_unknown_category_rejected() {
    let profile = RiskProfile::new(700.0)
        .employment_type("contractor")
        .job_stability(5.0)
        .income_level(50_000.0);

    let err = simulate_employment_status(&profile, &config(Variant::EmploymentStatus)).unwrap_err();
    assert_eq!(
        err,
        SimulationError::UnknownCategory {
            attribute: "employment_type",
            value: "contractor".to_string(),
        }
    );
}

#[test]
fn test_missing_field_rejected() {
    let profile = RiskProfile::new(700.0).region("urban");
    let err = simulate_geographic(&profile, &config(Variant::Geographic)).unwrap_err();
    assert!(matches!(err, SimulationError::MissingField { .. }));
}

#[test]
fn test_every_variant_runs_through_generic_engine() {
    let profile = RiskProfile::new(700.0)
        .employment_type("part-time")
        .region("rural")
        .age_group("46-55")
        .education_level("phd")
        .marital_status("single")
        .health_insurance_type("public")
        .job_stability(6.0)
        .spending_habits(4.0)
        .housing_market_trends(7.0)
        .health_conditions(3.0)
        .payment_history(90.0)
        .debt_to_income_ratio(35.0)
        .regional_unemployment_rate(6.5)
        .insurance_coverage_level(70.0)
        .income_level(42_000.0);

    for variant in Variant::ALL {
        let result = run_simulation(&variant.descriptor(), &profile, &config(variant));
        assert!(result.is_ok(), "{} failed: {:?}", variant.name(), result);
    }
}
