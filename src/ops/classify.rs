use crate::model::{NavItem, is_unbounded};

/// Classification of a working-list slot, as seen from a block boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionClass {
    /// Index outside `[0, len)`
    OutOfBounds,
    /// Slot holds the "no position assigned yet" sentinel
    Unbounded,
    /// Slot holds a real rank
    Normal(f32),
}

/// Classify the slot at `index`, which may be negative or past the end.
/// Pure lookup; used symmetrically for the slots just outside a block.
pub fn classify(items: &[NavItem], index: isize) -> PositionClass {
    if index < 0 || index as usize >= items.len() {
        return PositionClass::OutOfBounds;
    }
    let pos = items[index as usize].nav_pos;
    if is_unbounded(pos) {
        PositionClass::Unbounded
    } else {
        PositionClass::Normal(pos)
    }
}
