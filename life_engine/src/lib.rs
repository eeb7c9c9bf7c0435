//! Conway's Game of Life on a fixed toroidal grid.
//!
//! [`GridEngine`] holds the cells and applies B3/S23 with wrap-around
//! neighbors. [`SharedEngine`] lets a [`Scheduler`] and the front end's
//! renderer and [`InputController`] work on the same grid from different
//! threads.

pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod scheduler;
pub mod shared;

pub use cell::Cell;
pub use engine::GridEngine;
pub use error::{LifeError, Result};
pub use grid::{CANVAS_SIZE, CELL_PIXEL_SIZE, GRID_SIDE};
pub use input::InputController;
pub use scheduler::{speed_to_interval, Scheduler, SPEED_DEFAULT, SPEED_MAX, SPEED_MIN};
pub use shared::SharedEngine;
