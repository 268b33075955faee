//! Model objects and probe descriptors for Axon simulations.
//!
//! Defines the observable model objects ([`Ensemble`], [`Node`],
//! [`Connection`]), the [`ProbeTarget`] reference enum that ties them
//! together, and the [`Probe`] descriptor that declares intent to
//! observe one of their quantities. The descriptor is validated at
//! construction; the actual sampling is performed by the simulator's
//! runtime probing subsystem, not by this crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod connection;
mod ensemble;
mod node;
mod probe;
mod target;

pub use config::{ConnOptions, Synapse};
pub use connection::Connection;
pub use ensemble::{Ensemble, Neurons, DECODED_OUTPUT};
pub use node::Node;
pub use probe::Probe;
pub use target::ProbeTarget;
