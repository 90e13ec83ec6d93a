//! Integration tests for the creditsim simulation engine
//!
//! Tests are organized by topic:
//! - `variants` - End-to-end results for each simulation variant
//! - `determinism` - Seeding, reproducibility and convergence
//! - `properties` - Property-based checks of output domains and validation

mod variants;
