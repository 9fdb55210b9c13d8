//! Navigation-position recalculation for ordered sibling lists.
//!
//! Siblings in a navigation list are ranked by a sparse floating-point sort
//! key. When an item is inserted into, or moved within, such a list, this
//! crate decides which items need new keys so that the apparent order matches
//! the caller's intent, while disturbing as few existing items as possible
//! and leaving gaps usable as future insertion points.
//!
//! The whole computation is one synchronous, pure call:
//! [`reposition`] takes a snapshot of the sibling list, the moved item's
//! identity, and the requested insertion index, and returns the set of
//! rewritten keys plus the index the moved item ends up at. Reading the list
//! and persisting the returned changes are the caller's concern.

pub mod model;
pub mod ops;

pub use model::*;
pub use ops::reposition::reposition;
