use crate::model::{NavItem, PositionChange, Reposition};
use crate::ops::block::extend_block;
use crate::ops::classify::classify;
use crate::ops::interpolate::interpolate;
use crate::ops::prepare::prepare_list;

/// Recalculate navigation positions for inserting or moving one item.
///
/// `items` is the caller's snapshot of the sibling list in display order,
/// `moved_id` the identity of the item being inserted or relocated, and
/// `requested_index` where it should land (stale values are clamped).
///
/// The result lists, in display order, every item whose key must be
/// rewritten for the list's apparent order to match the request, plus the
/// index the moved item ends up at in the visible list. Items outside the
/// recomputed block keep their keys; inside it, an item is only reported
/// when its key actually changed. The moved item is always reported — a
/// move is a modification even when the number comes out equal.
pub fn reposition(items: &[NavItem], moved_id: &str, requested_index: isize) -> Reposition {
    let (working, final_index) = prepare_list(items, moved_id, requested_index);
    let block = extend_block(&working, final_index);

    let left = classify(&working, block.start as isize - 1);
    let right = classify(&working, block.end as isize);
    let values = interpolate(left, right, block.len());

    let mut changes = Vec::new();
    for (slot, new_pos) in block.zip(values) {
        let item = &working[slot];
        if item.id == moved_id || item.nav_pos != new_pos {
            changes.push(PositionChange {
                id: item.id.clone(),
                new_pos,
            });
        }
    }

    Reposition {
        changes,
        final_index,
    }
}
