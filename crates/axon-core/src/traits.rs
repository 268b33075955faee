//! The [`Probeable`] capability trait for observable model objects.

use indexmap::IndexSet;

/// Ordered set of probeable attribute names.
///
/// Insertion order is significant: the first entry is the default
/// attribute chosen when a probe is built without an explicit one.
/// Membership lookups are O(1). Names are `&'static str` because each
/// object type declares its observable quantities statically.
pub type AttrSet = IndexSet<&'static str>;

/// Capability of being observed by a probe.
///
/// Implemented by every model object that exposes read-only quantities
/// to the simulation's probing subsystem. Whether a type can be probed
/// at all is decided here at the type level; the only remaining runtime
/// question is whether a *particular instance* declares any attributes
/// (see [`ProbeError::NotProbeable`](crate::ProbeError::NotProbeable)).
pub trait Probeable {
    /// The attribute names this object exposes for observation,
    /// in default-priority order.
    fn probeable(&self) -> &AttrSet;

    /// Number of scalar channels this object produces per step.
    fn size_out(&self) -> usize;

    /// Display form used in diagnostics and probe labels.
    fn label(&self) -> &str;
}
