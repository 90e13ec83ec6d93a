//! Request and response bodies of the HTTP API
//!
//! Field names follow the service's public JSON contract. Profile attributes
//! are sent flat in the request body next to the simulation overrides.

use creditsim_core::model::RiskProfile;
use serde::{Deserialize, Serialize};

/// Body of every simulation route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(flatten)]
    pub profile: RiskProfile,

    // === Overrides of the variant defaults ===
    #[serde(default, alias = "num_trials", skip_serializing_if = "Option::is_none")]
    pub num_simulations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_years: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_std: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultProbabilityResponse {
    pub default_probability: f64,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroeconomicResponse {
    /// Mean projected score, one entry per year
    pub projected_credit_scores: Vec<f64>,
    pub yearly_variance: Vec<f64>,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCategoryDistribution {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialBehaviorResponse {
    pub risk_category_distribution: RiskCategoryDistribution,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomePoint {
    pub year: usize,
    pub income: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmploymentStatusResponse {
    pub income_projection: Vec<IncomePoint>,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalRisk {
    pub risk_score: f64,
    pub region_factor: f64,
    pub market_factor: f64,
    pub unemployment_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicResponse {
    pub regional_risk: RegionalRisk,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicImpact {
    pub impact_score: f64,
    pub age_factor: f64,
    pub education_factor: f64,
    pub marital_factor: f64,
    pub age_group: String,
    pub education_level: String,
    pub marital_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeDemographicsResponse {
    pub demographic_impact: DemographicImpact,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthRisk {
    pub health_risk_score: f64,
    pub condition_factor: f64,
    pub insurance_factor: f64,
    pub coverage_factor: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInsuranceResponse {
    pub health_risk: HealthRisk,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
