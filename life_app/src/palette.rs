// palette.rs - One fixed color per cell state

use egui::Color32;
use life_engine::Cell;

use crate::config::PaletteConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    dead: Color32,
    dead_fresh: Color32,
    alive_new: Color32,
    alive_persisted: Color32,
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl From<&PaletteConfig> for Palette {
    fn from(config: &PaletteConfig) -> Self {
        Self {
            dead: rgb(config.dead),
            dead_fresh: rgb(config.dead_fresh),
            alive_new: rgb(config.alive_new),
            alive_persisted: rgb(config.alive_persisted),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(&PaletteConfig::default())
    }
}

impl Palette {
    pub fn color(&self, cell: Cell) -> Color32 {
        match cell {
            Cell::Dead           => self.dead,
            Cell::DeadFresh      => self.dead_fresh,
            Cell::AliveNew       => self.alive_new,
            Cell::AlivePersisted => self.alive_persisted,
        }
    }

    pub fn background(&self) -> Color32 {
        self.dead
    }
}
