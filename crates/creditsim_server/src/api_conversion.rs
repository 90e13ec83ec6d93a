//! Convert core simulation results into API response bodies

use creditsim_core::model::{
    RiskBucket, RiskHistogram, RiskProfile, ScalarSummary, TrajectoryPoint, YearlyMoments,
};

use crate::api_types::*;
use crate::error::{ApiError, ApiResult};

fn factor(summary: &ScalarSummary, name: &'static str) -> ApiResult<f64> {
    summary.factor(name).ok_or_else(|| {
        tracing::error!("resolved factors are missing {name}");
        ApiError::InternalError
    })
}

impl DefaultProbabilityResponse {
    pub fn from_summary(summary: &ScalarSummary, seed: u64) -> Self {
        Self {
            default_probability: summary.mean,
            seed,
        }
    }
}

impl MacroeconomicResponse {
    pub fn from_moments(years: &[YearlyMoments], seed: u64) -> Self {
        Self {
            projected_credit_scores: years.iter().map(|y| y.mean).collect(),
            yearly_variance: years.iter().map(|y| y.variance).collect(),
            seed,
        }
    }
}

impl From<&RiskHistogram> for RiskCategoryDistribution {
    fn from(histogram: &RiskHistogram) -> Self {
        Self {
            low: histogram.count(RiskBucket::Low),
            medium: histogram.count(RiskBucket::Medium),
            high: histogram.count(RiskBucket::High),
        }
    }
}

impl FinancialBehaviorResponse {
    pub fn from_histogram(histogram: &RiskHistogram, seed: u64) -> Self {
        Self {
            risk_category_distribution: histogram.into(),
            seed,
        }
    }
}

impl EmploymentStatusResponse {
    pub fn from_trajectory(points: &[TrajectoryPoint], seed: u64) -> Self {
        Self {
            income_projection: points
                .iter()
                .map(|p| IncomePoint {
                    year: p.year,
                    income: p.value,
                })
                .collect(),
            seed,
        }
    }
}

impl GeographicResponse {
    pub fn from_summary(summary: &ScalarSummary, seed: u64) -> ApiResult<Self> {
        Ok(Self {
            regional_risk: RegionalRisk {
                risk_score: summary.mean,
                region_factor: factor(summary, "region_factor")?,
                market_factor: factor(summary, "market_factor")?,
                unemployment_factor: factor(summary, "unemployment_factor")?,
            },
            seed,
        })
    }
}

impl AgeDemographicsResponse {
    /// The category labels are echoed back from the validated profile
    pub fn from_summary(summary: &ScalarSummary, profile: &RiskProfile, seed: u64) -> ApiResult<Self> {
        Ok(Self {
            demographic_impact: DemographicImpact {
                impact_score: summary.mean,
                age_factor: factor(summary, "age_factor")?,
                education_factor: factor(summary, "education_factor")?,
                marital_factor: factor(summary, "marital_factor")?,
                age_group: profile.age_group.clone().unwrap_or_default(),
                education_level: profile.education_level.clone().unwrap_or_default(),
                marital_status: profile.marital_status.clone().unwrap_or_default(),
            },
            seed,
        })
    }
}

impl HealthInsuranceResponse {
    pub fn from_summary(summary: &ScalarSummary, seed: u64) -> ApiResult<Self> {
        Ok(Self {
            health_risk: HealthRisk {
                health_risk_score: summary.mean,
                condition_factor: factor(summary, "condition_factor")?,
                insurance_factor: factor(summary, "insurance_factor")?,
                coverage_factor: factor(summary, "coverage_factor")?,
            },
            seed,
        })
    }
}
