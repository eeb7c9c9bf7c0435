// cell.rs - Cell lifecycle and the B3/S23 transition rule

/// State of one grid cell.
///
/// The two dead and two live variants behave identically under the rule;
/// the split only records how the cell got there so it can be drawn apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    /// Died in the most recent step
    DeadFresh,
    /// Born in the most recent step, or drawn by hand
    AliveNew,
    /// Alive before the most recent step and still alive
    AlivePersisted,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Cell::AliveNew | Cell::AlivePersisted)
    }

    /// The state a manual edit writes. Hand-drawn cells always start as new.
    #[inline]
    pub fn from_edit(alive: bool) -> Self {
        if alive { Cell::AliveNew } else { Cell::Dead }
    }

    /// Next state given the number of live neighbors.
    pub fn next(self, live_neighbors: u8) -> Self {
        match (self.is_alive(), live_neighbors) {
            (true, 2) | (true, 3) => Cell::AlivePersisted, // Survival
            (true, _)             => Cell::DeadFresh,      // Under- or overpopulation
            (false, 3)            => Cell::AliveNew,       // Birth
            _                     => Cell::Dead,           // Stays dead
        }
    }
}
