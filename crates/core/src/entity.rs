//! Entity trait: identity that survives state changes.
//!
//! Books, sites, copies, accounts and loans are all entities. None of them
//! holds a reference to another; they correlate through these ids only.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
