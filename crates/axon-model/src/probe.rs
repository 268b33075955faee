//! The [`Probe`] descriptor: a validated declaration of intent to
//! observe one quantity on a model object.
//!
//! A probe receives data from the simulation without affecting it.
//! This type covers only the descriptor side: validating the
//! target/attribute pair, resolving defaults, and reporting the
//! declared output width. Sampling, buffering, and storage happen in
//! the simulator's runtime probing subsystem.

use std::fmt;

use axon_core::error::MIN_SAMPLE_EVERY;
use axon_core::{ProbeError, Probeable};

use crate::config::ConnOptions;
use crate::ensemble::DECODED_OUTPUT;
use crate::target::ProbeTarget;

/// Declaration of intent to observe one attribute of a model object.
///
/// Constructed with [`Probe::new`], which validates the target and
/// attribute and resolves defaults; a `Probe` value therefore always
/// satisfies `attr ∈ target.probeable()` as of construction time. The
/// membership check is not repeated afterwards, so a target whose
/// probeable set is mutated later can leave a stale descriptor behind;
/// this crate does not guarantee target immutability.
///
/// Identity fields (`target`, `attr`) are immutable after construction
/// and there is no mutable API at all: the descriptor is a value object.
///
/// # Examples
///
/// ```
/// use axon_model::{Ensemble, Probe, ProbeTarget, ConnOptions};
///
/// let ens = Ensemble::new("Ensemble1", 40, 5);
/// let probe = Probe::new(ProbeTarget::from(&ens), None, None, ConnOptions::default())?;
///
/// // Defaults: first probeable attribute, sampled every step.
/// assert_eq!(probe.attr(), "decoded_output");
/// assert_eq!(probe.sample_every(), None);
/// assert_eq!(probe.size_in(), 5);
/// assert_eq!(probe.label(), "Probe(Ensemble1.decoded_output)");
/// # Ok::<(), axon_core::ProbeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Probe<'net> {
    target: ProbeTarget<'net>,
    attr: &'static str,
    sample_every: Option<f64>,
    conn_options: ConnOptions,
    seed: Option<u64>,
}

impl<'net> Probe<'net> {
    /// Build a probe on `target`.
    ///
    /// `attr` of `None` selects the first entry of the target's
    /// probeable set (the set's order defines default priority).
    /// `sample_every` of `None` means "record every simulation step";
    /// explicit periods must be strictly greater than
    /// [`MIN_SAMPLE_EVERY`] seconds. The probe's seed is taken from
    /// `conn_options.seed`.
    ///
    /// # Errors
    ///
    /// - [`ProbeError::NotProbeable`] if the target instance declares
    ///   no probeable attributes.
    /// - [`ProbeError::InvalidAttribute`] if `attr` is given and is not
    ///   in the target's probeable set.
    /// - [`ProbeError::InvalidSamplePeriod`] if `sample_every` is given
    ///   and is NaN or not strictly greater than [`MIN_SAMPLE_EVERY`].
    pub fn new(
        target: ProbeTarget<'net>,
        attr: Option<&str>,
        sample_every: Option<f64>,
        conn_options: ConnOptions,
    ) -> Result<Self, ProbeError> {
        let probeable = target.probeable();
        let default_attr = match probeable.first() {
            Some(name) => *name,
            None => {
                return Err(ProbeError::NotProbeable {
                    target: target.label().to_string(),
                })
            }
        };

        let attr = match attr {
            Some(name) => match probeable.get(name) {
                Some(canonical) => *canonical,
                None => {
                    return Err(ProbeError::InvalidAttribute {
                        attribute: name.to_string(),
                        target: target.label().to_string(),
                    })
                }
            },
            None => default_attr,
        };

        if let Some(period) = sample_every {
            if period.is_nan() || period <= MIN_SAMPLE_EVERY {
                return Err(ProbeError::InvalidSamplePeriod { value: period });
            }
        }

        let seed = conn_options.seed;
        Ok(Self {
            target,
            attr,
            sample_every,
            conn_options,
            seed,
        })
    }

    /// The observed model object.
    pub fn target(&self) -> ProbeTarget<'net> {
        self.target
    }

    /// The observed attribute (canonical name from the probeable set).
    pub fn attr(&self) -> &'static str {
        self.attr
    }

    /// Sampling period in seconds, or `None` for every step.
    pub fn sample_every(&self) -> Option<f64> {
        self.sample_every
    }

    /// Options for the implicit target → probe connection.
    pub fn conn_options(&self) -> &ConnOptions {
        &self.conn_options
    }

    /// Seed for randomness in the built connection, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of scalar channels flowing into the probe per sample.
    ///
    /// Ensembles expose two independent widths: the decoded output
    /// (`dimensions` channels) and the raw per-neuron state. Probing
    /// any ensemble attribute other than the decoded output reports
    /// the per-neuron width; every other target reports its
    /// [`size_out`](Probeable::size_out) directly.
    pub fn size_in(&self) -> usize {
        match self.target {
            ProbeTarget::Ensemble(ens) => {
                if self.attr == DECODED_OUTPUT {
                    ens.size_out()
                } else {
                    ens.neurons().size_out()
                }
            }
            ProbeTarget::Node(node) => node.size_out(),
            ProbeTarget::Connection(conn) => conn.size_out(),
        }
    }

    /// Overall size of the probe. A probe produces no onward output,
    /// so its only size is the input width: `len() == size_in()`.
    pub fn len(&self) -> usize {
        self.size_in()
    }

    /// Whether the probe would record zero channels per sample.
    pub fn is_empty(&self) -> bool {
        self.size_in() == 0
    }

    /// Diagnostic label of the form `Probe(<target>.<attr>)`.
    ///
    /// For logging only; the format carries no parsing guarantees.
    pub fn label(&self) -> String {
        format!("Probe({}.{})", self.target.label(), self.attr)
    }
}

impl fmt::Display for Probe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe({}.{})", self.target.label(), self.attr)
    }
}
