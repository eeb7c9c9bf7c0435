// input.rs - Pointer edits on the grid

use log::debug;

use crate::cell::Cell;
use crate::error::{LifeError, Result};
use crate::shared::SharedEngine;

/// Translates pointer positions on the canvas into cell edits.
///
/// Decisions are made from the cell's state, never from what is on screen.
#[derive(Debug, Clone)]
pub struct InputController {
    engine: SharedEngine,
    cell_pixel_size: usize,
}

impl InputController {
    pub fn new(engine: SharedEngine, cell_pixel_size: usize) -> Self {
        Self { engine, cell_pixel_size: cell_pixel_size.max(1) }
    }

    /// Grid `(row, col)` under canvas pixel `(px, py)`.
    pub fn locate(&self, px: i32, py: i32) -> Result<(usize, usize)> {
        if px < 0 || py < 0 {
            return Err(LifeError::OutsideCanvas { x: px, y: py });
        }
        let row = py as usize / self.cell_pixel_size;
        let col = px as usize / self.cell_pixel_size;
        let side = self.engine.side()?;
        if row >= side || col >= side {
            return Err(LifeError::OutOfRange { row, col, side });
        }
        Ok((row, col))
    }

    /// Pointer press: any dead cell comes alive as new, any live cell dies.
    pub fn press(&self, px: i32, py: i32) -> Result<Cell> {
        let (row, col) = self.locate(px, py)?;
        let cell = self.engine.write(|engine| {
            let alive = !engine.get_cell(row, col)?.is_alive();
            engine.set_cell(row, col, alive)?;
            engine.get_cell(row, col)
        })??;
        debug!("toggled ({row}, {col}) to {cell:?}");
        Ok(cell)
    }

    /// Pointer drag: paints dead cells alive and leaves live ones alone.
    pub fn drag(&self, px: i32, py: i32) -> Result<Cell> {
        let (row, col) = self.locate(px, py)?;
        self.engine.write(|engine| {
            if !engine.get_cell(row, col)?.is_alive() {
                engine.set_cell(row, col, true)?;
            }
            engine.get_cell(row, col)
        })?
    }

    /// State under the pointer, for hover feedback.
    pub fn hover(&self, px: i32, py: i32) -> Result<Cell> {
        let (row, col) = self.locate(px, py)?;
        self.engine.get_cell(row, col)
    }
}
