// ui.rs - Controls, grid rendering and pointer handling

use eframe::egui;
use egui::{CursorIcon, Pos2, Rect, Response, Sense, Vec2};
use life_engine::{Cell, CANVAS_SIZE, CELL_PIXEL_SIZE, SPEED_MAX, SPEED_MIN};
use log::{error, warn};

use crate::GameOfLife;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.scheduler.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.scheduler.toggle();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_world();
                }

                ui.separator();

                ui.label("Speed:");
                if ui.add(egui::Slider::new(&mut self.speed, SPEED_MIN..=SPEED_MAX)).changed() {
                    self.apply_speed();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.scheduler.generation()));
                match self.engine.population() {
                    Ok(live) => ui.label(format!("Live cells: {live}")),
                    Err(e) => ui.label(format!("Grid unavailable: {e}")),
                };
            });

            ui.separator();

            let (response, painter) = ui.allocate_painter(
                Vec2::splat(CANVAS_SIZE as f32),
                Sense::click_and_drag(),
            );
            let origin = response.rect.min;
            painter.rect_filled(response.rect, 0.0, self.palette.background());

            // Dead cells are the background; only paint the others
            let block = CELL_PIXEL_SIZE as f32;
            let drawn = self.engine.read(|grid| {
                for (row, cells) in grid.rows().enumerate() {
                    for (col, &cell) in cells.iter().enumerate() {
                        if cell == Cell::Dead {
                            continue;
                        }
                        let rect = Rect::from_min_size(
                            egui::pos2(origin.x + col as f32 * block, origin.y + row as f32 * block),
                            Vec2::splat(block),
                        );
                        painter.rect_filled(rect, 0.0, self.palette.color(cell));
                    }
                }
            });
            if let Err(e) = drawn {
                error!("cannot draw grid: {e}");
            }

            self.handle_pointer(ui, &response, origin);
        });
    }
}

impl GameOfLife {
    fn handle_pointer(&self, ui: &egui::Ui, response: &Response, origin: Pos2) {
        let to_pixel = |pos: Pos2| {
            let offset = pos - origin;
            (offset.x.floor() as i32, offset.y.floor() as i32)
        };

        // Press toggles; holding and moving only paints cells alive
        let pressed = response.hovered() && ui.input(|i| i.pointer.primary_pressed());
        let moved = response.dragged() && response.drag_delta() != Vec2::ZERO;
        if pressed || moved {
            if let Some(pos) = response.interact_pointer_pos().or(response.hover_pos()) {
                let (px, py) = to_pixel(pos);
                let edit = if pressed { self.input.press(px, py) } else { self.input.drag(px, py) };
                if let Err(e) = edit {
                    warn!("ignored pointer edit: {e}");
                }
            }
        }

        // Crosshair over anything that is not plain dead
        if let Some(pos) = response.hover_pos() {
            let (px, py) = to_pixel(pos);
            if matches!(self.input.hover(px, py), Ok(cell) if cell != Cell::Dead) {
                ui.ctx().output_mut(|o| o.cursor_icon = CursorIcon::Crosshair);
            }
        }
    }
}
