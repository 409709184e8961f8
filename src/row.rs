//! Single-line resolution: everything a move does to one row, shifted left.
//!
//! A move is `tighten`, then `merge`, then `tighten` again. Keeping the three
//! steps apart means a merged tile can never merge a second time in the same
//! move, and tiles keep their relative order.

use crate::grid::Tile;

/// Points earned from merges.
pub type Score = u64;

/// Slide every non-zero value to the front, keeping order, and pad with zeros.
pub fn tighten(row: &[Tile]) -> Vec<Tile> {
    let mut out: Vec<Tile> = row.iter().copied().filter(|&v| v != 0).collect();
    out.resize(row.len(), 0);
    out
}

/// Merge equal adjacent non-zero pairs of an already tightened row.
///
/// The first member of a pair becomes `0` and the second holds the doubled
/// value, so both are consumed before the next cell is looked at. Returns the
/// merged row and the points it earned.
pub fn merge(row: &[Tile]) -> (Vec<Tile>, Score) {
    let mut out = Vec::with_capacity(row.len());
    let mut gained: Score = 0;
    let mut pair = false;
    for (i, &val) in row.iter().enumerate() {
        if pair {
            let merged = val * 2;
            out.push(merged);
            gained += Score::from(merged);
            pair = false;
        } else if row.get(i + 1).is_some_and(|&next| can_merge(val, next)) {
            out.push(0);
            pair = true;
        } else {
            out.push(val);
        }
    }
    debug_assert_eq!(out.len(), row.len());
    (out, gained)
}

/// Resolve one row moving left: `tighten(merge(tighten(row)))`.
///
/// ```
/// use term_2048::row::move_row_left;
/// assert_eq!(move_row_left(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
/// assert_eq!(move_row_left(&[0, 2, 0, 2]), (vec![4, 0, 0, 0], 4));
/// ```
pub fn move_row_left(row: &[Tile]) -> (Vec<Tile>, Score) {
    let (merged, gained) = merge(&tighten(row));
    (tighten(&merged), gained)
}

/// True if moving this row left would change it: an empty cell followed by a
/// tile, or two equal tiles side by side.
pub fn row_is_left_movable(row: &[Tile]) -> bool {
    row.windows(2).any(|w| (w[0] == 0 && w[1] != 0) || can_merge(w[0], w[1]))
}

// equal, non-empty, and the sum still fits in a tile
fn can_merge(a: Tile, b: Tile) -> bool {
    a != 0 && a == b && a.checked_mul(2).is_some()
}
