// main.rs - Conway's Game of Life on a 120x120 torus
// The grid steps on a tokio timer task; this thread only draws and edits

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use log::{error, info};
use std::path::PathBuf;

use life_engine::{
    speed_to_interval, GridEngine, InputController, Scheduler, SharedEngine, CANVAS_SIZE,
    CELL_PIXEL_SIZE, GRID_SIDE,
};

mod config;  // TOML settings
mod palette; // Cell state -> color
mod ui;      // eframe::App impl

use config::AppConfig;
use palette::Palette;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML file with speed, start state and palette
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial speed slider value (1-100), overrides the config file
    #[arg(short, long)]
    speed: Option<u8>,

    /// Start with the simulation running
    #[arg(long)]
    run: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    config.start_running |= args.run;
    config.validate()?;
    info!(
        "{GRID_SIDE}x{GRID_SIDE} grid, speed {} ({:?} per generation)",
        config.speed,
        speed_to_interval(config.speed)
    );

    let runtime = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;
    let engine = SharedEngine::new(GridEngine::new(GRID_SIDE)?);

    let canvas = CANVAS_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([canvas + 20.0, canvas + 110.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Box::new(GameOfLife::new(&cc.egui_ctx, runtime, engine, &config))),
    )
    .map_err(|e| {
        error!("window loop failed: {e}");
        anyhow::anyhow!("eframe error: {e}")
    })
}

/// Front end state. The grid itself lives in `engine`.
pub struct GameOfLife {
    engine: SharedEngine,
    input: InputController,
    scheduler: Scheduler,
    palette: Palette,
    speed: u8,
    _runtime: tokio::runtime::Runtime, // Declared last so the scheduler task is aborted first
}

impl GameOfLife {
    fn new(
        ctx: &egui::Context,
        runtime: tokio::runtime::Runtime,
        engine: SharedEngine,
        config: &AppConfig,
    ) -> Self {
        let repaint = ctx.clone();
        let scheduler = Scheduler::spawn(
            runtime.handle(),
            engine.clone(),
            speed_to_interval(config.speed),
            move || repaint.request_repaint(),
        );
        if config.start_running {
            scheduler.start();
        }

        Self {
            input: InputController::new(engine.clone(), CELL_PIXEL_SIZE),
            engine,
            scheduler,
            palette: Palette::from(&config.palette),
            speed: config.speed,
            _runtime: runtime,
        }
    }

    fn clear_world(&mut self) {
        if let Err(e) = self.engine.clear() {
            error!("clear failed: {e}");
        }
        self.scheduler.reset_generation();
        info!("world cleared");
    }

    fn apply_speed(&mut self) {
        self.scheduler.set_interval(speed_to_interval(self.speed));
    }
}
