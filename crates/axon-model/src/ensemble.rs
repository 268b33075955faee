//! Populations of neurons representing a vector value.

use std::fmt;

use axon_core::{AttrSet, Probeable};

/// Attribute name for an ensemble's population-decoded output.
///
/// Probing this attribute yields one channel per represented dimension;
/// probing any other ensemble attribute yields one channel per neuron.
pub const DECODED_OUTPUT: &str = "decoded_output";

/// The raw neuron population nested inside an [`Ensemble`].
///
/// Exposes the per-neuron output width, which differs from the
/// ensemble's decoded width whenever `n_neurons != dimensions`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neurons {
    n_neurons: usize,
}

impl Neurons {
    /// Number of neurons in the population.
    pub fn count(&self) -> usize {
        self.n_neurons
    }

    /// Number of scalar channels produced per step (one per neuron).
    pub fn size_out(&self) -> usize {
        self.n_neurons
    }
}

/// A population of neurons collectively representing a vector.
///
/// An ensemble has two independent output widths: the decoded
/// representation (`dimensions` channels) and the raw per-neuron
/// state (`n_neurons` channels, via [`neurons`](Self::neurons)).
///
/// # Examples
///
/// ```
/// use axon_model::Ensemble;
/// use axon_core::Probeable;
///
/// let ens = Ensemble::new("Ensemble1", 40, 5);
/// assert_eq!(ens.size_out(), 5);
/// assert_eq!(ens.neurons().size_out(), 40);
/// assert_eq!(ens.probeable().first(), Some(&"decoded_output"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Ensemble {
    label: String,
    dimensions: usize,
    neurons: Neurons,
    pub(crate) probeable: AttrSet,
}

impl Ensemble {
    /// Create an ensemble of `n_neurons` neurons representing a
    /// `dimensions`-dimensional vector.
    pub fn new(label: impl Into<String>, n_neurons: usize, dimensions: usize) -> Self {
        Self {
            label: label.into(),
            dimensions,
            neurons: Neurons { n_neurons },
            probeable: [DECODED_OUTPUT, "input"].into_iter().collect(),
        }
    }

    /// Number of represented dimensions (decoded output width).
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The nested raw neuron population.
    pub fn neurons(&self) -> &Neurons {
        &self.neurons
    }
}

impl Probeable for Ensemble {
    fn probeable(&self) -> &AttrSet {
        &self.probeable
    }

    fn size_out(&self) -> usize {
        self.dimensions
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Ensemble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoded_output_is_default_attribute() {
        let ens = Ensemble::new("a", 100, 2);
        assert_eq!(ens.probeable().first(), Some(&DECODED_OUTPUT));
    }

    #[test]
    fn widths_are_independent() {
        let ens = Ensemble::new("a", 100, 2);
        assert_eq!(ens.size_out(), 2);
        assert_eq!(ens.neurons().size_out(), 100);
        assert_eq!(ens.neurons().count(), 100);
    }

    #[test]
    fn display_is_label() {
        let ens = Ensemble::new("Ensemble1", 10, 1);
        assert_eq!(ens.to_string(), "Ensemble1");
    }
}
