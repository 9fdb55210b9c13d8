use crate::model::{NavItem, PLACEHOLDER_POS};

/// Build the working sequence for one insertion/move event.
///
/// Runs the input through three pure stages: drop any pre-existing
/// occurrence of the moved item, insert a placeholder for it at the
/// (clamped) requested index, then drop every entry that is not part of the
/// visible ordered list. The placeholder is tracked by identity across the
/// stages and its index in the filtered sequence is recomputed once at the
/// end — that index is the `final_index` of the overall result.
///
/// A requested index outside `[0, len]` is clamped rather than rejected:
/// the caller's index may be stale after a concurrent change elsewhere, and
/// "insert at the nearest valid position" is the intended reading.
pub fn prepare_list(
    items: &[NavItem],
    moved_id: &str,
    requested_index: isize,
) -> (Vec<NavItem>, usize) {
    // The moved item may already sit elsewhere in the list; the working
    // sequence must contain it exactly once.
    let mut working: Vec<NavItem> = items
        .iter()
        .filter(|item| item.id != moved_id)
        .cloned()
        .collect();

    let index = requested_index.clamp(0, working.len() as isize) as usize;
    working.insert(index, NavItem::new(moved_id, PLACEHOLDER_POS));

    // The placeholder survives the view filter no matter what: it stands
    // for the operation being performed.
    let working: Vec<NavItem> = working
        .into_iter()
        .filter(|item| item.in_navigation || item.id == moved_id)
        .collect();

    let final_index = working
        .iter()
        .position(|item| item.id == moved_id)
        .expect("placeholder survives the view filter");

    (working, final_index)
}
