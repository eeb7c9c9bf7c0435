// shared.rs - One engine, many collaborators

use std::sync::{Arc, RwLock};

use crate::cell::Cell;
use crate::engine::GridEngine;
use crate::error::{LifeError, Result};

/// Cloneable handle to a single [`GridEngine`].
///
/// The whole grid sits behind one lock: `step` holds the write side for the
/// full generation, so readers see either the old grid or the new one.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<RwLock<GridEngine>>,
}

impl SharedEngine {
    pub fn new(engine: GridEngine) -> Self {
        Self { inner: Arc::new(RwLock::new(engine)) }
    }

    /// Runs `f` with shared access to the grid.
    pub fn read<T>(&self, f: impl FnOnce(&GridEngine) -> T) -> Result<T> {
        let guard = self.inner.read().map_err(|_| LifeError::LockPoisoned)?;
        Ok(f(&*guard))
    }

    /// Runs `f` with exclusive access to the grid.
    pub fn write<T>(&self, f: impl FnOnce(&mut GridEngine) -> T) -> Result<T> {
        let mut guard = self.inner.write().map_err(|_| LifeError::LockPoisoned)?;
        Ok(f(&mut *guard))
    }

    pub fn step(&self) -> Result<()> {
        self.write(GridEngine::step)
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Result<Cell> {
        self.read(|engine| engine.get_cell(row, col))?
    }

    pub fn set_cell(&self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.write(|engine| engine.set_cell(row, col, alive))?
    }

    pub fn clear(&self) -> Result<()> {
        self.write(GridEngine::clear)
    }

    pub fn side(&self) -> Result<usize> {
        self.read(GridEngine::side)
    }

    pub fn population(&self) -> Result<usize> {
        self.read(GridEngine::population)
    }
}
