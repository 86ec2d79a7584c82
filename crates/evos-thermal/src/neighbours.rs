//! 4-connected neighbour lookup on a bounded row-major grid.
//!
//! Out-of-bounds neighbours are dropped, not clamped or wrapped: corner
//! cells have 2 neighbours, edge cells 3, interior cells 4.

use smallvec::SmallVec;

/// Up, down, left, right as `(dx, dy)`.
const OFFSETS: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Row-major flat index of `(x, y)`, or `None` if outside `[0,width)×[0,height)`.
#[inline]
pub(crate) fn flat_index(x: i64, y: i64, width: u32, height: u32) -> Option<usize> {
    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
        return None;
    }
    Some(y as usize * width as usize + x as usize)
}

/// Flat indices of the in-bounds axis neighbours of `(x, y)`.
pub(crate) fn neighbours_flat(x: u32, y: u32, width: u32, height: u32) -> SmallVec<[usize; 4]> {
    let mut result = SmallVec::new();
    for (dx, dy) in OFFSETS {
        if let Some(i) = flat_index(i64::from(x) + dx, i64::from(y) + dy, width, height) {
            result.push(i);
        }
    }
    result
}
