//! Connection options attached to a probe.
//!
//! [`ConnOptions`] parameterises the connection the framework builds
//! from the probed target to the probe's runtime sink. The options are
//! pass-through configuration: this crate validates nothing beyond
//! carrying them, and the connection builder interprets them.

use std::fmt;

/// Synaptic filter applied to the probed signal.
///
/// `Synapse::None` means the raw signal is delivered unfiltered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Synapse {
    /// No filtering; deliver raw values.
    None,
    /// First-order lowpass filter with time constant `tau` (seconds).
    Lowpass {
        /// Filter time constant in seconds.
        tau: f64,
    },
    /// Alpha (second-order lowpass) filter with time constant `tau` (seconds).
    Alpha {
        /// Filter time constant in seconds.
        tau: f64,
    },
}

impl fmt::Display for Synapse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Lowpass { tau } => write!(f, "lowpass(tau={tau})"),
            Self::Alpha { tau } => write!(f, "alpha(tau={tau})"),
        }
    }
}

/// Options for the implicit target → probe connection.
///
/// Every field has a documented default, so `ConnOptions::default()`
/// is the common case ("record raw values every step, no fixed seed").
///
/// # Examples
///
/// ```
/// use axon_model::{ConnOptions, Synapse};
///
/// let opts = ConnOptions {
///     synapse: Synapse::Lowpass { tau: 0.01 },
///     ..Default::default()
/// };
/// assert_eq!(opts.seed, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnOptions {
    /// Synaptic filter for the probed signal. Default: [`Synapse::None`].
    pub synapse: Synapse,
    /// Seed for any randomness in the built connection. Default: unset.
    pub seed: Option<u64>,
}

impl Default for ConnOptions {
    fn default() -> Self {
        Self {
            synapse: Synapse::None,
            seed: None,
        }
    }
}
