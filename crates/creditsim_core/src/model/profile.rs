//! Borrower risk profile
//!
//! A `RiskProfile` carries every attribute any variant may read. Each variant
//! requires only a subset; absent attributes are reported as `MissingField`
//! by the factor model, not by deserialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Credit score, nominally in [300, 850]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<f64>,

    // === Categorical attributes ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_insurance_type: Option<String>,

    // === 1-10 scale attributes ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_stability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_habits: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_market_trends: Option<f64>,
    /// 0 = no conditions, 10 = severe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_conditions: Option<f64>,

    // === Percentage attributes ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_history: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debt_to_income_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regional_unemployment_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_coverage_level: Option<f64>,

    /// Current annual income, must be positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_level: Option<f64>,
}

impl RiskProfile {
    /// Profile with only a credit score set
    #[must_use]
    pub fn new(credit_score: f64) -> Self {
        Self {
            credit_score: Some(credit_score),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn employment_type(mut self, value: impl Into<String>) -> Self {
        self.employment_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn region(mut self, value: impl Into<String>) -> Self {
        self.region = Some(value.into());
        self
    }

    #[must_use]
    pub fn age_group(mut self, value: impl Into<String>) -> Self {
        self.age_group = Some(value.into());
        self
    }

    #[must_use]
    pub fn education_level(mut self, value: impl Into<String>) -> Self {
        self.education_level = Some(value.into());
        self
    }

    #[must_use]
    pub fn marital_status(mut self, value: impl Into<String>) -> Self {
        self.marital_status = Some(value.into());
        self
    }

    #[must_use]
    pub fn health_insurance_type(mut self, value: impl Into<String>) -> Self {
        self.health_insurance_type = Some(value.into());
        self
    }

    #[must_use]
    pub fn job_stability(mut self, value: f64) -> Self {
        self.job_stability = Some(value);
        self
    }

    #[must_use]
    pub fn spending_habits(mut self, value: f64) -> Self {
        self.spending_habits = Some(value);
        self
    }

    #[must_use]
    pub fn housing_market_trends(mut self, value: f64) -> Self {
        self.housing_market_trends = Some(value);
        self
    }

    #[must_use]
    pub fn health_conditions(mut self, value: f64) -> Self {
        self.health_conditions = Some(value);
        self
    }

    #[must_use]
    pub fn payment_history(mut self, value: f64) -> Self {
        self.payment_history = Some(value);
        self
    }

    #[must_use]
    pub fn debt_to_income_ratio(mut self, value: f64) -> Self {
        self.debt_to_income_ratio = Some(value);
        self
    }

    #[must_use]
    pub fn regional_unemployment_rate(mut self, value: f64) -> Self {
        self.regional_unemployment_rate = Some(value);
        self
    }

    #[must_use]
    pub fn insurance_coverage_level(mut self, value: f64) -> Self {
        self.insurance_coverage_level = Some(value);
        self
    }

    #[must_use]
    pub fn income_level(mut self, value: f64) -> Self {
        self.income_level = Some(value);
        self
    }
}
