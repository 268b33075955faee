//! Core traits and error types for the Axon modelling framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Probeable`] capability trait that observable model objects
//! implement, and the [`ProbeError`] taxonomy raised when a probe
//! descriptor cannot be constructed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
mod traits;

pub use error::{ProbeError, MIN_SAMPLE_EVERY};
pub use traits::{AttrSet, Probeable};
