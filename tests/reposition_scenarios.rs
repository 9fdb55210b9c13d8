use navpos::{NavItem, PositionChange, Reposition, UNBOUNDED_POS, reposition};
use pretty_assertions::assert_eq;

fn item(id: &str, pos: f32) -> NavItem {
    NavItem::new(id, pos)
}

fn change(id: &str, new_pos: f32) -> PositionChange {
    PositionChange {
        id: id.to_string(),
        new_pos,
    }
}

#[test]
fn insert_into_empty_list() {
    let result = reposition(&[], "m", 0);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 1.0)],
            final_index: 0,
        }
    );
}

#[test]
fn insert_between_distinct_ranks_touches_only_the_new_item() {
    let items = vec![item("a", 10.0), item("b", 20.0), item("c", 30.0)];
    let result = reposition(&items, "m", 1);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 15.0)],
            final_index: 1,
        }
    );
}

#[test]
fn insert_into_a_tie_renumbers_the_whole_cluster() {
    let items = vec![item("a", 10.0), item("b", 10.0), item("c", 10.0)];
    let result = reposition(&items, "m", 1);
    assert_eq!(
        result,
        Reposition {
            changes: vec![
                change("a", 1.0),
                change("m", 2.0),
                change("b", 3.0),
                change("c", 4.0),
            ],
            final_index: 1,
        }
    );
}

#[test]
fn insert_before_the_first_item_stays_positive() {
    let items = vec![item("a", 5.0)];
    let result = reposition(&items, "m", 0);
    assert_eq!(result.final_index, 0);
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].id, "m");
    let pos = result.changes[0].new_pos;
    assert!(pos >= 0.0 && pos < 5.0, "unexpected position {}", pos);
    // with a rank of 5 the step search settles on whole numbers
    assert_eq!(pos, 4.0);
}

#[test]
fn insert_into_an_unpositioned_run_assigns_fresh_ranks() {
    let items = vec![item("a", UNBOUNDED_POS), item("b", UNBOUNDED_POS)];
    let result = reposition(&items, "m", 1);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("a", 1.0), change("m", 2.0), change("b", 3.0)],
            final_index: 1,
        }
    );
}

#[test]
fn stale_over_length_index_appends() {
    let items = vec![item("a", 10.0), item("b", 20.0), item("c", 30.0)];
    let result = reposition(&items, "m", 99);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 31.0)],
            final_index: 3,
        }
    );
}

#[test]
fn tie_run_at_list_start_before_an_unpositioned_tail() {
    // The renumbered cluster reaches the head of the list while the
    // unpositioned tail sits just outside the block; the tail keeps its
    // sentinel ranks and still sorts last.
    let items = vec![
        item("a", 10.0),
        item("b", 10.0),
        item("c", UNBOUNDED_POS),
    ];
    let result = reposition(&items, "m", 1);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("a", 1.0), change("m", 2.0), change("b", 3.0)],
            final_index: 1,
        }
    );
}

#[test]
fn insert_at_top_of_a_fully_unpositioned_list() {
    let items = vec![item("a", UNBOUNDED_POS)];
    let result = reposition(&items, "m", 0);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 1.0)],
            final_index: 0,
        }
    );
}

#[test]
fn append_just_before_an_unpositioned_tail() {
    let items = vec![item("a", 10.0), item("b", UNBOUNDED_POS)];
    let result = reposition(&items, "m", 1);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 11.0)],
            final_index: 1,
        }
    );
}

#[test]
fn hidden_siblings_are_ignored_by_the_result() {
    let items = vec![
        item("a", 10.0),
        NavItem::hidden("h", 15.0),
        item("b", 20.0),
    ];
    let result = reposition(&items, "m", 2);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 15.0)],
            final_index: 1,
        }
    );
}

#[test]
fn moving_an_item_up_reuses_the_gap() {
    let items = vec![
        item("a", 10.0),
        item("b", 20.0),
        item("c", 30.0),
        item("m", 40.0),
    ];
    let result = reposition(&items, "m", 1);
    assert_eq!(
        result,
        Reposition {
            changes: vec![change("m", 15.0)],
            final_index: 1,
        }
    );
}
