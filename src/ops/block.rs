use std::ops::Range;

use crate::model::{NavItem, is_unbounded};
use crate::ops::classify::{PositionClass, classify};

/// Determine the contiguous run of slots that must receive new positions.
///
/// Normally just the placeholder's own slot. Widened in two situations:
/// the left neighbor carries the "no position yet" sentinel (the item
/// landed in a run with no assigned ordering, so the whole run needs real
/// keys), or both neighbors carry the same rank (the item landed inside a
/// tie, and the whole tied cluster is renumbered rather than handed a
/// duplicate key).
pub fn extend_block(items: &[NavItem], placeholder: usize) -> Range<usize> {
    let left = classify(items, placeholder as isize - 1);
    let right = classify(items, placeholder as isize + 1);

    match (left, right) {
        (PositionClass::Unbounded, _) => absorb_run(items, placeholder, is_unbounded),
        (PositionClass::Normal(l), PositionClass::Normal(r)) if l == r => {
            absorb_run(items, placeholder, |pos| pos == l)
        }
        _ => placeholder..placeholder + 1,
    }
}

/// Grow the block outward from the placeholder while the neighboring slots
/// match the run value. The rightward scan starts at the slot immediately
/// after the placeholder.
fn absorb_run(
    items: &[NavItem],
    placeholder: usize,
    matches: impl Fn(f32) -> bool,
) -> Range<usize> {
    let mut start = placeholder;
    while start > 0 && matches(items[start - 1].nav_pos) {
        start -= 1;
    }
    let mut end = placeholder + 1;
    while end < items.len() && matches(items[end].nav_pos) {
        end += 1;
    }
    start..end
}
