//! Monte Carlo credit-risk simulation library
//!
//! This crate estimates borrower risk measures by repeated random trials.
//! Seven simulation variants share one engine:
//! - Default probability from a credit score
//! - Credit score projection under random macroeconomic conditions
//! - Risk-category distribution from financial behavior
//! - Income trajectory by employment status
//! - Regional risk from geographic and market factors
//! - Demographic impact from age, education and marital status
//! - Health risk from conditions and insurance
//!
//! Each variant is described by a [`config::VariantDescriptor`]; the engine
//! resolves factors from a [`model::RiskProfile`], draws noise per trial and
//! aggregates the outcomes.
//!
//! ```ignore
//! use creditsim_core::config::{SimulationConfig, Variant};
//! use creditsim_core::model::RiskProfile;
//! use creditsim_core::simulation::simulate_geographic;
//!
//! let profile = RiskProfile::new(700.0)
//!     .region("urban")
//!     .housing_market_trends(5.0)
//!     .regional_unemployment_rate(5.0);
//! let config = SimulationConfig::for_variant(Variant::Geographic).with_seed(42);
//! let summary = simulate_geographic(&profile, &config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod error;
pub mod evaluate;
pub mod factors;
pub mod sampler;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SimulationConfig, Variant, VariantDescriptor};
pub use error::{Result, SimulationError};
pub use model::{AggregateResult, RiskProfile};
pub use simulation::run_simulation;
