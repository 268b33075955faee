//! Error types for probe construction.
//!
//! All probe validation is fail-fast and synchronous: construction
//! either returns a fully initialised descriptor or one of these
//! errors, never a partially built object.

use std::error::Error;
use std::fmt;

/// Smallest accepted sampling period, in seconds (exclusive bound).
pub const MIN_SAMPLE_EVERY: f64 = 1e-10;

/// Errors raised while constructing a probe descriptor.
#[derive(Clone, Debug, PartialEq)]
pub enum ProbeError {
    /// The target instance declares no probeable attributes.
    NotProbeable {
        /// Display form of the rejected target.
        target: String,
    },
    /// The requested attribute is not in the target's probeable set.
    InvalidAttribute {
        /// The attribute that was requested.
        attribute: String,
        /// Display form of the target it was requested on.
        target: String,
    },
    /// The sampling period is NaN or not strictly greater than
    /// [`MIN_SAMPLE_EVERY`].
    InvalidSamplePeriod {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotProbeable { target } => {
                write!(f, "'{target}' has no probeable attributes")
            }
            Self::InvalidAttribute { attribute, target } => {
                write!(f, "'{attribute}' is not probeable for '{target}'")
            }
            Self::InvalidSamplePeriod { value } => {
                write!(
                    f,
                    "sample_every must be greater than {MIN_SAMPLE_EVERY}, got {value}"
                )
            }
        }
    }
}

impl Error for ProbeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_probeable() {
        let err = ProbeError::NotProbeable {
            target: "Node3".to_string(),
        };
        assert_eq!(err.to_string(), "'Node3' has no probeable attributes");
    }

    #[test]
    fn display_invalid_attribute() {
        let err = ProbeError::InvalidAttribute {
            attribute: "voltage".to_string(),
            target: "Ensemble1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'voltage' is not probeable for 'Ensemble1'"
        );
    }

    #[test]
    fn display_invalid_sample_period() {
        let err = ProbeError::InvalidSamplePeriod { value: 0.0 };
        let msg = err.to_string();
        assert!(msg.contains("sample_every"), "unexpected message: {msg}");
        assert!(msg.contains("0"), "unexpected message: {msg}");
    }
}
