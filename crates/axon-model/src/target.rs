//! The [`ProbeTarget`] reference enum over observable model objects.

use std::fmt;

use axon_core::{AttrSet, Probeable};

use crate::connection::Connection;
use crate::ensemble::Ensemble;
use crate::node::Node;

/// Non-owning reference to an observable model object.
///
/// Probes hold one of these rather than owning their target; the
/// referenced object lives in the enclosing model for at least as long
/// as the probe (`'net`). The tagged variants make size resolution an
/// exhaustive match rather than a downcast: see
/// [`Probe::size_in`](crate::Probe::size_in).
#[derive(Clone, Copy, Debug)]
pub enum ProbeTarget<'net> {
    /// A neuron population with decoded and raw output widths.
    Ensemble(&'net Ensemble),
    /// A non-neural node.
    Node(&'net Node),
    /// A connection between two model objects.
    Connection(&'net Connection),
}

impl Probeable for ProbeTarget<'_> {
    fn probeable(&self) -> &AttrSet {
        match self {
            Self::Ensemble(e) => e.probeable(),
            Self::Node(n) => n.probeable(),
            Self::Connection(c) => c.probeable(),
        }
    }

    fn size_out(&self) -> usize {
        match self {
            Self::Ensemble(e) => e.size_out(),
            Self::Node(n) => n.size_out(),
            Self::Connection(c) => c.size_out(),
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::Ensemble(e) => e.label(),
            Self::Node(n) => n.label(),
            Self::Connection(c) => c.label(),
        }
    }
}

impl fmt::Display for ProbeTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'net> From<&'net Ensemble> for ProbeTarget<'net> {
    fn from(ens: &'net Ensemble) -> Self {
        Self::Ensemble(ens)
    }
}

impl<'net> From<&'net Node> for ProbeTarget<'net> {
    fn from(node: &'net Node) -> Self {
        Self::Node(node)
    }
}

impl<'net> From<&'net Connection> for ProbeTarget<'net> {
    fn from(conn: &'net Connection) -> Self {
        Self::Connection(conn)
    }
}
