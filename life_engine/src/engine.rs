// engine.rs - Square toroidal grid and generation stepping

use log::trace;

use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::grid::{wrap, NEIGHBOR_OFFSETS};

/// Owns the cell grid and advances it one generation at a time.
///
/// Cells are stored row-major. The side length is fixed for the lifetime of
/// the engine.
#[derive(Debug, Clone)]
pub struct GridEngine {
    side: usize,
    cells: Vec<Cell>,
    next_cells: Vec<Cell>, // Scratch buffer, swapped in at the end of `step`
}

impl GridEngine {
    /// Creates an all-dead `side x side` grid.
    pub fn new(side: usize) -> Result<Self> {
        if side == 0 {
            return Err(LifeError::InvalidDimensions { side });
        }
        Ok(Self {
            side,
            cells: vec![Cell::Dead; side * side],
            next_cells: vec![Cell::Dead; side * side],
        })
    }

    pub fn side(&self) -> usize {
        self.side
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.side || col >= self.side {
            return Err(LifeError::OutOfRange { row, col, side: self.side });
        }
        Ok(row * self.side + col)
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Manual edit: `AliveNew` when `alive`, otherwise `Dead`.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Cell::from_edit(alive);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Live cells among the eight wrapped neighbors of `(row, col)`.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8> {
        self.index(row, col)?;
        Ok(self.live_neighbors(row, col))
    }

    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let nr = wrap(row, dr, self.side);
            let nc = wrap(col, dc, self.side);
            if self.cells[nr * self.side + nc].is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Advances one generation.
    ///
    /// Every next state is computed from the pre-step grid into the scratch
    /// buffer, which then replaces the grid in a single swap.
    pub fn step(&mut self) {
        for row in 0..self.side {
            for col in 0..self.side {
                let idx = row * self.side + col;
                let next = self.cells[idx].next(self.live_neighbors(row, col));
                self.next_cells[idx] = next;
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next_cells);
        trace!("stepped generation, {} live cells", self.population());
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom, each `side` cells wide.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(side: usize, live: &[(usize, usize)]) -> GridEngine {
        let mut engine = GridEngine::new(side).unwrap();
        for &(row, col) in live {
            engine.set_cell(row, col, true).unwrap();
        }
        engine
    }

    #[test]
    fn test_new_grid_is_dead() {
        let engine = GridEngine::new(12).unwrap();
        assert_eq!(engine.side(), 12);
        assert_eq!(engine.cells().len(), 144);
        assert!(engine.cells().iter().all(|&c| c == Cell::Dead));
    }

    #[test]
    fn test_zero_side_rejected() {
        let err = GridEngine::new(0).unwrap_err();
        assert_eq!(err, LifeError::InvalidDimensions { side: 0 });
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut engine = GridEngine::new(10).unwrap();
        engine.step();
        engine.step();
        assert_eq!(engine.population(), 0);
        assert!(engine.cells().iter().all(|&c| c == Cell::Dead));
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let mut engine = engine_with(10, &[(2, 2), (2, 3), (3, 2)]);
        assert_eq!(engine.neighbor_count(3, 3).unwrap(), 3);
        engine.step();
        assert_eq!(engine.get_cell(3, 3).unwrap(), Cell::AliveNew);
    }

    #[test]
    fn test_survivors_persist() {
        // 2x2 block: every cell has exactly three live neighbors
        let block = [(4, 4), (4, 5), (5, 4), (5, 5)];
        let mut engine = engine_with(10, &block);
        engine.step();
        for (row, col) in block {
            assert_eq!(engine.get_cell(row, col).unwrap(), Cell::AlivePersisted);
        }
        engine.step();
        for (row, col) in block {
            assert_eq!(engine.get_cell(row, col).unwrap(), Cell::AlivePersisted);
        }
        assert_eq!(engine.population(), 4);
    }

    #[test]
    fn test_two_neighbors_survive() {
        // Diagonal of three: the middle has two neighbors, the ends one each
        let mut engine = engine_with(10, &[(1, 1), (2, 2), (3, 3)]);
        engine.step();
        assert_eq!(engine.get_cell(2, 2).unwrap(), Cell::AlivePersisted);
        assert_eq!(engine.get_cell(1, 1).unwrap(), Cell::DeadFresh);
        assert_eq!(engine.get_cell(3, 3).unwrap(), Cell::DeadFresh);
    }

    #[test]
    fn test_underpopulation() {
        let mut engine = engine_with(10, &[(5, 5)]);
        engine.step();
        assert_eq!(engine.get_cell(5, 5).unwrap(), Cell::DeadFresh);
        engine.step();
        assert_eq!(engine.get_cell(5, 5).unwrap(), Cell::Dead);
    }

    #[test]
    fn test_overpopulation() {
        // Plus sign: the centre has four live neighbors
        let mut engine = engine_with(10, &[(5, 5), (4, 5), (6, 5), (5, 4), (5, 6)]);
        assert_eq!(engine.neighbor_count(5, 5).unwrap(), 4);
        engine.step();
        assert_eq!(engine.get_cell(5, 5).unwrap(), Cell::DeadFresh);
    }

    #[test]
    fn test_fresh_dead_do_not_count_as_neighbors() {
        let mut engine = engine_with(10, &[(5, 5)]);
        engine.step();
        assert_eq!(engine.get_cell(5, 5).unwrap(), Cell::DeadFresh);
        assert_eq!(engine.neighbor_count(5, 6).unwrap(), 0);
    }

    #[test]
    fn test_corner_wraps_to_all_corners() {
        let n = 10;
        let engine = engine_with(n, &[(0, 0)]);
        assert_eq!(engine.neighbor_count(n - 1, n - 1).unwrap(), 1);
        assert_eq!(engine.neighbor_count(n - 1, 0).unwrap(), 1);
        assert_eq!(engine.neighbor_count(0, n - 1).unwrap(), 1);
        assert_eq!(engine.neighbor_count(5, 5).unwrap(), 0);
    }

    #[test]
    fn test_wrap_is_per_axis() {
        // Only the row leaves the grid here, so the column must not be reset
        let n = 10;
        let engine = engine_with(n, &[(0, 5)]);
        assert_eq!(engine.neighbor_count(n - 1, 4).unwrap(), 1);
        assert_eq!(engine.neighbor_count(n - 1, 5).unwrap(), 1);
        assert_eq!(engine.neighbor_count(n - 1, 6).unwrap(), 1);
        assert_eq!(engine.neighbor_count(n - 1, 0).unwrap(), 0);
    }

    #[test]
    fn test_blinker_across_seam() {
        // Vertical blinker straddling the top/bottom edge
        let n = 8;
        let mut engine = engine_with(n, &[(n - 1, 3), (0, 3), (1, 3)]);
        engine.step();
        assert_eq!(engine.get_cell(0, 2).unwrap(), Cell::AliveNew);
        assert_eq!(engine.get_cell(0, 3).unwrap(), Cell::AlivePersisted);
        assert_eq!(engine.get_cell(0, 4).unwrap(), Cell::AliveNew);
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_step_reads_pre_step_grid() {
        // An in-place scan would let later cells see tips already killed this step
        let mut engine = engine_with(10, &[(5, 4), (5, 5), (5, 6)]);
        engine.step();
        let live: Vec<usize> = engine
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(live, vec![4 * 10 + 5, 5 * 10 + 5, 6 * 10 + 5]);
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut engine = engine_with(10, &[(0, 0), (3, 7), (9, 9)]);
        engine.step();
        engine.clear();
        for row in 0..10 {
            for col in 0..10 {
                assert_eq!(engine.get_cell(row, col).unwrap(), Cell::Dead);
            }
        }
    }

    #[test]
    fn test_out_of_range_edit_is_rejected() {
        let mut engine = engine_with(10, &[(2, 2)]);
        let before = engine.cells().to_vec();

        let err = engine.set_cell(10, 0, true).unwrap_err();
        assert_eq!(err, LifeError::OutOfRange { row: 10, col: 0, side: 10 });
        assert!(engine.set_cell(0, 10, true).is_err());
        assert!(engine.get_cell(0, 10).is_err());
        assert!(engine.neighbor_count(11, 11).is_err());

        assert_eq!(engine.cells(), &before[..]);
    }

    #[test]
    fn test_rows_are_side_wide() {
        let engine = engine_with(6, &[(2, 4)]);
        let rows: Vec<&[Cell]> = engine.rows().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| r.len() == 6));
        assert_eq!(rows[2][4], Cell::AliveNew);
    }
}
