use std::fmt;

/// Errors raised while validating a request or resolving its factors.
///
/// Every variant is detected before the first trial runs; a simulation either
/// completes in full or fails with one of these and produces no result.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A required profile attribute is absent
    MissingField { field: &'static str },
    /// A categorical value has no entry in the attribute's factor table
    UnknownCategory {
        attribute: &'static str,
        value: String,
    },
    /// A numeric value is outside its documented domain or is not finite
    InvalidRange {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// Distribution parameters rejected by the sampler
    InvalidDistribution {
        profile_type: &'static str,
        reason: &'static str,
    },
}

impl SimulationError {
    pub(crate) fn invalid_range(field: &'static str, value: f64, reason: &'static str) -> Self {
        SimulationError::InvalidRange {
            field,
            value,
            reason,
        }
    }

    /// Name of the input field the error refers to, if any
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SimulationError::MissingField { field } => Some(field),
            SimulationError::UnknownCategory { attribute, .. } => Some(attribute),
            SimulationError::InvalidRange { field, .. } => Some(field),
            SimulationError::InvalidDistribution { .. } => None,
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::MissingField { field } => {
                write!(f, "missing required field `{field}`")
            }
            SimulationError::UnknownCategory { attribute, value } => {
                write!(f, "unknown {attribute} category {value:?}")
            }
            SimulationError::InvalidRange {
                field,
                value,
                reason,
            } => write!(f, "invalid value {value} for `{field}`: {reason}"),
            SimulationError::InvalidDistribution {
                profile_type,
                reason,
            } => write!(f, "invalid {profile_type} parameters: {reason}"),
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;
