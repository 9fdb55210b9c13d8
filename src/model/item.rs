use serde::{Deserialize, Serialize};

/// Reserved maximal rank meaning "no navigation position assigned yet".
///
/// Items carrying this value sort after every positioned sibling. The check
/// is exact equality against this constant, never a range test.
pub const UNBOUNDED_POS: f32 = f32::MAX;

/// Dummy rank carried by the moved item's placeholder while the working
/// list is being prepared. Never survives into a result: the placeholder is
/// always assigned a computed position.
pub const PLACEHOLDER_POS: f32 = -1.0;

/// Whether a rank is the "no position assigned yet" sentinel.
pub fn is_unbounded(pos: f32) -> bool {
    pos == UNBOUNDED_POS
}

/// One sibling in the ordered list handed to the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Opaque identity, used to tell the moved item apart from the rest
    pub id: String,
    /// Current navigation position (may be [`UNBOUNDED_POS`])
    pub nav_pos: f32,
    /// Whether the item participates in the visible ordered list
    pub in_navigation: bool,
}

impl NavItem {
    /// Create a visible item with the given id and position
    pub fn new(id: &str, nav_pos: f32) -> Self {
        NavItem {
            id: id.to_string(),
            nav_pos,
            in_navigation: true,
        }
    }

    /// Create an item that is excluded from the visible ordered list
    pub fn hidden(id: &str, nav_pos: f32) -> Self {
        NavItem {
            id: id.to_string(),
            nav_pos,
            in_navigation: false,
        }
    }
}

/// A single rewritten navigation position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionChange {
    /// Identity of the item whose key must be rewritten
    pub id: String,
    /// The key to persist for it
    pub new_pos: f32,
}

/// Outcome of one insertion/move event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reposition {
    /// Items whose position must be persisted, in list order
    pub changes: Vec<PositionChange>,
    /// Index of the moved item in the visible working list
    pub final_index: usize,
}
