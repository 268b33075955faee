//! Directed links carrying signals between model objects.

use std::fmt;

use axon_core::{AttrSet, Probeable};

/// A directed connection between two model objects.
///
/// Connections expose their transmitted signal and their decoding
/// weights for observation. The output width equals the width of the
/// post-object input the connection feeds.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    label: String,
    size_out: usize,
    pub(crate) probeable: AttrSet,
}

impl Connection {
    /// Create a connection whose transmitted signal is `size_out` wide.
    pub fn new(label: impl Into<String>, size_out: usize) -> Self {
        Self {
            label: label.into(),
            size_out,
            probeable: ["output", "weights"].into_iter().collect(),
        }
    }
}

impl Probeable for Connection {
    fn probeable(&self) -> &AttrSet {
        &self.probeable
    }

    fn size_out(&self) -> usize {
        self.size_out
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
