//! Simulation results
//!
//! Contains the per-trial outcome type and the aggregated results reported
//! back to callers.

use serde::{Deserialize, Serialize};

use super::factors::ResolvedFactor;

/// Score above which a trial is classified as low risk
pub const LOW_RISK_THRESHOLD: f64 = 0.7;
/// Score above which (and up to `LOW_RISK_THRESHOLD`) a trial is medium risk
pub const MEDIUM_RISK_THRESHOLD: f64 = 0.4;

/// Result of one trial: a single value, or one value per simulated year
#[derive(Debug, Clone, PartialEq)]
pub enum TrialOutcome {
    Scalar(f64),
    Yearly(Vec<f64>),
}

impl TrialOutcome {
    /// Outcome values in year order; a scalar outcome counts as one year
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            TrialOutcome::Scalar(v) => std::slice::from_ref(v),
            TrialOutcome::Yearly(values) => values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    Low,
    Medium,
    High,
}

impl RiskBucket {
    /// Classify a weighted behavior score. Higher scores mean lower risk.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score > LOW_RISK_THRESHOLD {
            RiskBucket::Low
        } else if score > MEDIUM_RISK_THRESHOLD {
            RiskBucket::Medium
        } else {
            RiskBucket::High
        }
    }
}

/// Trial counts per risk bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskHistogram {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl RiskHistogram {
    pub fn record(&mut self, bucket: RiskBucket) {
        match bucket {
            RiskBucket::Low => self.low += 1,
            RiskBucket::Medium => self.medium += 1,
            RiskBucket::High => self.high += 1,
        }
    }

    #[must_use]
    pub fn count(&self, bucket: RiskBucket) -> usize {
        match bucket {
            RiskBucket::Low => self.low,
            RiskBucket::Medium => self.medium,
            RiskBucket::High => self.high,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.low + self.medium + self.high
    }
}

/// Mean of a scalar variant, with its dispersion and the factors that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarSummary {
    pub mean: f64,
    /// Population variance of the trial outcomes
    pub variance: f64,
    /// Standard error of the mean, `sqrt(variance / num_trials)`
    pub std_error: f64,
    pub num_trials: usize,
    pub factors: Vec<ResolvedFactor>,
}

impl ScalarSummary {
    #[must_use]
    pub fn factor(&self, name: &str) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyMoments {
    /// 1-based year index
    pub year: usize,
    pub mean: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// 1-based year index
    pub year: usize,
    pub value: f64,
}

/// Aggregated output of one simulation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AggregateResult {
    Scalar(ScalarSummary),
    YearlyMoments { years: Vec<YearlyMoments> },
    Histogram(RiskHistogram),
    Trajectory { points: Vec<TrajectoryPoint> },
}

impl AggregateResult {
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarSummary> {
        match self {
            AggregateResult::Scalar(summary) => Some(summary),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_yearly_moments(&self) -> Option<&[YearlyMoments]> {
        match self {
            AggregateResult::YearlyMoments { years } => Some(years),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_histogram(&self) -> Option<&RiskHistogram> {
        match self {
            AggregateResult::Histogram(histogram) => Some(histogram),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_trajectory(&self) -> Option<&[TrajectoryPoint]> {
        match self {
            AggregateResult::Trajectory { points } => Some(points),
            _ => None,
        }
    }
}
