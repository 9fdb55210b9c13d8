use crate::ops::classify::PositionClass;

/// Produce `n` strictly increasing replacement positions for a block whose
/// boundary slots classify as `left` and `right`.
///
/// An unbounded left boundary cannot be produced by the block extender (an
/// unbounded run is always absorbed into the block, leaving a real rank or
/// the list edge before it); hitting it is a bug, not an input condition.
///
/// When both boundaries carry real ranks, the new keys land strictly inside
/// the gap as far as `f32` resolution allows; once the gap shrinks to an
/// ulp or below, subdivision rounds back onto a boundary value.
pub fn interpolate(left: PositionClass, right: PositionClass, n: usize) -> Vec<f32> {
    use PositionClass::*;

    match (left, right) {
        // No real rank on either side — empty list, the block covers the
        // whole list, or only an unpositioned tail follows it: start a
        // clean integer sequence, which also stays below the tail's
        // sentinel ranks.
        (OutOfBounds, OutOfBounds | Unbounded) => (1..=n).map(|i| i as f32).collect(),
        // Insert at the very start, below a known rank.
        (OutOfBounds, Normal(r)) => before_first(r, n),
        // Append at the end, or just before an unpositioned tail.
        (Normal(l), OutOfBounds | Unbounded) => (1..=n).map(|i| l + i as f32).collect(),
        // Insert strictly between two known ranks.
        (Normal(l), Normal(r)) => {
            let step = (r - l) / (n + 1) as f32;
            (1..=n).map(|i| l + i as f32 * step).collect()
        }
        (Unbounded, _) => {
            unreachable!("unbounded left block boundary: right={right:?}")
        }
    }
}

/// Positions for inserting ahead of the first real rank `r`.
///
/// Values stay non-negative and strictly below `r`, and keep a "round
/// number" feel where headroom allows: starting from the largest whole
/// number at or below `r`, the step size is reduced (by tens above 1, by
/// halving below) until all `n` values fit above `r / 10`.
fn before_first(r: f32, n: usize) -> Vec<f32> {
    if r <= 0.0 {
        // Negative first rank is a data anomaly; stay below it regardless.
        return (1..=n).map(|i| r - (n + 1 - i) as f32).collect();
    }
    let base = if r > 1.0 { r.floor() } else { r };
    let mut step = 1000.0_f32;
    while base - n as f32 * step < r / 10.0 {
        step = if step > 1.0 { step / 10.0 } else { step / 2.0 };
    }
    (1..=n).map(|i| base - (n + 1 - i) as f32 * step).collect()
}
