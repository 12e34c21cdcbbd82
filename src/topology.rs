//! Neighbor arithmetic on a flat, row-major square torus.
//!
//! Every function takes a flat `index` (`row * xbase + col`) and the side length
//! `xbase`, and wraps across edges: the left edge is stitched to the right one and
//! the top edge to the bottom one. `index` must be below `xbase * xbase`; this is
//! only checked in debug builds, release builds return an unspecified index.
//! Use [`World::get`](crate::World::get) to validate indices from outside.

/// Smallest side length on which the eight neighbors of a cell are all distinct.
///
/// Sides 1 and 2 are valid but degenerate: on `1 x 1` every neighbor is the cell
/// itself, on `2 x 2` neighbors coincide pairwise.
pub const MIN_DISTINCT_SIDE: usize = 3;

/// `(d_row, d_col)` of the neighbors in `[NW, N, NE, W, E, SW, S, SE]` order.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[inline]
pub fn is_left_edge(index: usize, xbase: usize) -> bool {
    index % xbase == 0
}

#[inline]
pub fn is_right_edge(index: usize, xbase: usize) -> bool {
    index % xbase == xbase - 1
}

#[inline]
pub fn is_top_edge(index: usize, xbase: usize) -> bool {
    index < xbase
}

#[inline]
pub fn is_bottom_edge(index: usize, xbase: usize) -> bool {
    xbase * xbase - index <= xbase
}

#[inline]
pub fn left(index: usize, xbase: usize) -> usize {
    debug_assert!(index < xbase * xbase);
    if is_left_edge(index, xbase) {
        index + xbase - 1
    } else {
        index - 1
    }
}

#[inline]
pub fn right(index: usize, xbase: usize) -> usize {
    debug_assert!(index < xbase * xbase);
    if is_right_edge(index, xbase) {
        index + 1 - xbase
    } else {
        index + 1
    }
}

#[inline]
pub fn top(index: usize, xbase: usize) -> usize {
    debug_assert!(index < xbase * xbase);
    if is_top_edge(index, xbase) {
        index + xbase * xbase - xbase
    } else {
        index - xbase
    }
}

#[inline]
pub fn bottom(index: usize, xbase: usize) -> usize {
    debug_assert!(index < xbase * xbase);
    if is_bottom_edge(index, xbase) {
        index + xbase - xbase * xbase
    } else {
        index + xbase
    }
}

/// Flat indices of the eight neighbors in `[NW, N, NE, W, E, SW, S, SE]` order.
pub fn neighbors(index: usize, xbase: usize) -> [usize; 8] {
    let (l, r) = (left(index, xbase), right(index, xbase));
    [
        top(l, xbase),
        top(index, xbase),
        top(r, xbase),
        l,
        r,
        bottom(l, xbase),
        bottom(index, xbase),
        bottom(r, xbase),
    ]
}

/// Moves `index` by `d_row` rows and `d_col` columns with wraparound.
///
/// For unit offsets this agrees with [`left`], [`right`], [`top`] and [`bottom`].
pub fn wrap_offset(index: usize, xbase: usize, d_row: isize, d_col: isize) -> usize {
    debug_assert!(index < xbase * xbase);
    let n = xbase as isize;
    let row = (index / xbase) as isize;
    let col = (index % xbase) as isize;
    let row = (row + d_row).rem_euclid(n) as usize;
    let col = (col + d_col).rem_euclid(n) as usize;
    row * xbase + col
}
