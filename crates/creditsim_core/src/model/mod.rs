mod factors;
mod macro_profile;
mod profile;
mod results;

pub use factors::{Factor, FactorSet, ResolvedFactor};
pub use macro_profile::{MacroDraw, MacroProfile, MacroScenario};
pub use profile::RiskProfile;
pub use results::{
    AggregateResult, LOW_RISK_THRESHOLD, MEDIUM_RISK_THRESHOLD, RiskBucket, RiskHistogram,
    ScalarSummary, TrajectoryPoint, TrialOutcome, YearlyMoments,
};
