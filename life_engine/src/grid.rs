// grid.rs - Grid geometry for the toroidal Game of Life

// Compile-time canvas configuration
pub const CANVAS_SIZE: usize = 960;                         // Square canvas edge in pixels
pub const CELL_PIXEL_SIZE: usize = 8;                       // Each cell is drawn as an 8x8 block
pub const GRID_SIDE: usize = CANVAS_SIZE / CELL_PIXEL_SIZE; // 120x120 playing area

/// The eight `(row, col)` offsets around a cell.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Moves `index` by `offset` along one axis of a torus with `side` cells.
///
/// Stepping off the low edge lands on `side - 1`, stepping off the high edge
/// lands on `0`. Each axis is wrapped on its own.
#[inline]
pub fn wrap(index: usize, offset: isize, side: usize) -> usize {
    let shifted = index as isize + offset;
    if shifted < 0 {
        side - 1
    } else if shifted as usize >= side {
        0
    } else {
        shifted as usize
    }
}
