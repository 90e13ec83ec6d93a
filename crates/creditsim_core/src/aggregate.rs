//! Trial aggregation
//!
//! Reduces the ordered outcomes of one request into its reported statistic.
//! All reductions walk the outcomes sequentially in trial order, so the
//! result does not depend on how the trials were scheduled.

use crate::config::{Aggregation, VariantDescriptor};
use crate::model::{
    AggregateResult, FactorSet, RiskBucket, RiskHistogram, ScalarSummary, TrajectoryPoint,
    TrialOutcome, YearlyMoments,
};

/// Running sum and sum of squares for mean/variance
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAccumulator {
    count: usize,
    sum: f64,
    sum_sq: f64,
}

impl MeanAccumulator {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }

    /// Population variance, `E[X²] − (E[X])²`.
    ///
    /// Cancellation can push this slightly below zero when the spread is
    /// tiny; negative results are floored at 0. NaN is passed through.
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self.sum_sq / self.count as f64 - mean * mean;
        if variance < 0.0 { 0.0 } else { variance }
    }

    #[must_use]
    pub fn std_error(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.variance() / self.count as f64).sqrt()
        }
    }
}

fn final_value(outcome: &TrialOutcome) -> f64 {
    outcome.values().last().copied().unwrap_or(0.0)
}

pub fn summarize_scalar(outcomes: &[TrialOutcome], factors: &FactorSet) -> ScalarSummary {
    let mut acc = MeanAccumulator::default();
    for outcome in outcomes {
        acc.push(final_value(outcome));
    }

    ScalarSummary {
        mean: acc.mean(),
        variance: acc.variance(),
        std_error: acc.std_error(),
        num_trials: acc.count(),
        factors: factors.resolved(),
    }
}

pub fn bucket_histogram(outcomes: &[TrialOutcome]) -> RiskHistogram {
    let mut histogram = RiskHistogram::default();
    for outcome in outcomes {
        histogram.record(RiskBucket::classify(final_value(outcome)));
    }
    histogram
}

fn per_year(outcomes: &[TrialOutcome], num_years: usize) -> Vec<MeanAccumulator> {
    let mut years = vec![MeanAccumulator::default(); num_years];
    for outcome in outcomes {
        for (acc, value) in years.iter_mut().zip(outcome.values()) {
            acc.push(*value);
        }
    }
    years
}

pub fn yearly_moments(outcomes: &[TrialOutcome], num_years: usize) -> Vec<YearlyMoments> {
    per_year(outcomes, num_years)
        .iter()
        .enumerate()
        .map(|(i, acc)| YearlyMoments {
            year: i + 1,
            mean: acc.mean(),
            variance: acc.variance(),
        })
        .collect()
}

pub fn trajectory(outcomes: &[TrialOutcome], num_years: usize) -> Vec<TrajectoryPoint> {
    per_year(outcomes, num_years)
        .iter()
        .enumerate()
        .map(|(i, acc)| TrajectoryPoint {
            year: i + 1,
            value: acc.mean(),
        })
        .collect()
}

/// Reduce outcomes according to the descriptor's aggregation mode
pub fn aggregate(
    descriptor: &VariantDescriptor,
    factors: &FactorSet,
    outcomes: &[TrialOutcome],
    num_years: usize,
) -> AggregateResult {
    match descriptor.aggregation {
        Aggregation::Mean => AggregateResult::Scalar(summarize_scalar(outcomes, factors)),
        Aggregation::Buckets => AggregateResult::Histogram(bucket_histogram(outcomes)),
        Aggregation::YearlyMoments => AggregateResult::YearlyMoments {
            years: yearly_moments(outcomes, num_years),
        },
        Aggregation::Trajectory => AggregateResult::Trajectory {
            points: trajectory(outcomes, num_years),
        },
    }
}
