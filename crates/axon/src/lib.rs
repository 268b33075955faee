//! Axon: probe descriptors and observable model objects for neural
//! simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Axon sub-crates. A probe declares intent to observe a
//! named, read-only quantity on a model object without influencing it;
//! construction validates the target/attribute pair, resolves
//! defaults, and fixes the probe's output width and diagnostic label.
//! The actual sampling is performed by the simulator consuming these
//! descriptors.
//!
//! # Quick start
//!
//! ```rust
//! use axon::prelude::*;
//!
//! // A population of 40 neurons representing a 5-dimensional vector.
//! let ens = Ensemble::new("Ensemble1", 40, 5);
//!
//! // Probe its decoded output (the default attribute), unfiltered.
//! let probe = Probe::new(
//!     ProbeTarget::from(&ens),
//!     None,
//!     None,
//!     ConnOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(probe.attr(), "decoded_output");
//! assert_eq!(probe.size_in(), 5);
//!
//! // Probing raw neuron state reports the per-neuron width instead.
//! let raw = Probe::new(
//!     ProbeTarget::from(&ens),
//!     Some("input"),
//!     Some(0.001),
//!     ConnOptions {
//!         synapse: Synapse::Lowpass { tau: 0.01 },
//!         seed: Some(7),
//!     },
//! )
//! .unwrap();
//! assert_eq!(raw.size_in(), 40);
//! assert_eq!(raw.label(), "Probe(Ensemble1.input)");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `axon-core` | The `Probeable` trait and error types |
//! | [`model`] | `axon-model` | Model objects, probe targets, and the `Probe` descriptor |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits and error types (`axon-core`).
///
/// Contains the [`types::Probeable`] capability trait and the
/// [`types::ProbeError`] taxonomy.
pub use axon_core as types;

/// Model objects and probe descriptors (`axon-model`).
///
/// Contains [`model::Ensemble`], [`model::Node`], [`model::Connection`],
/// the [`model::ProbeTarget`] reference enum, and [`model::Probe`].
pub use axon_model as model;

/// Common imports for typical Axon usage.
///
/// ```rust
/// use axon::prelude::*;
/// ```
pub mod prelude {
    // Core trait and errors
    pub use axon_core::{ProbeError, Probeable};

    // Model objects and the probe descriptor
    pub use axon_model::{
        ConnOptions, Connection, Ensemble, Node, Probe, ProbeTarget, Synapse,
    };
}
