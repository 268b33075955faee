//! Non-neural nodes providing input to or processing within a model.

use std::fmt;

use axon_core::{AttrSet, Probeable};

/// A non-neural model object with arbitrary input/output widths.
///
/// Nodes stand in for external stimuli or host-side functions; the
/// only quantity they expose for observation is their output.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    label: String,
    size_in: usize,
    size_out: usize,
    pub(crate) probeable: AttrSet,
}

impl Node {
    /// Create a node consuming `size_in` and producing `size_out` channels.
    pub fn new(label: impl Into<String>, size_in: usize, size_out: usize) -> Self {
        Self {
            label: label.into(),
            size_in,
            size_out,
            probeable: ["output"].into_iter().collect(),
        }
    }

    /// Number of scalar channels this node consumes per step.
    pub fn size_in(&self) -> usize {
        self.size_in
    }
}

impl Probeable for Node {
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

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_only_probeable_attribute() {
        let node = Node::new("stim", 0, 3);
        assert_eq!(node.probeable().len(), 1);
        assert!(node.probeable().contains("output"));
    }

    #[test]
    fn widths() {
        let node = Node::new("stim", 2, 3);
        assert_eq!(node.size_in(), 2);
        assert_eq!(node.size_out(), 3);
    }
}
