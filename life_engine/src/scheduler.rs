// scheduler.rs - Timer that drives generations on a tokio task

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{debug, error, info};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use crate::shared::SharedEngine;

// Speed slider range; delay shrinks by 3 ms per notch
pub const SPEED_MIN: u8 = 1;
pub const SPEED_MAX: u8 = 100;
pub const SPEED_DEFAULT: u8 = 50;
const MS_PER_NOTCH: u64 = 3;
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Delay between generations for a speed slider value.
///
/// The default speed gives 150 ms. Values outside the slider range are
/// clamped, and the top speed is floored at 1 ms.
pub fn speed_to_interval(speed: u8) -> Duration {
    let speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    Duration::from_millis(u64::from(SPEED_MAX - speed) * MS_PER_NOTCH).max(MIN_INTERVAL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Control {
    running: bool,
    interval: Duration,
}

/// Steps a [`SharedEngine`] at a configurable interval.
///
/// Starts stopped. Each tick steps the engine, bumps the generation counter,
/// then calls the tick callback (typically a repaint request). Dropping the
/// scheduler aborts its task.
pub struct Scheduler {
    control: watch::Sender<Control>,
    generation: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl Scheduler {
    pub fn spawn<F>(handle: &Handle, engine: SharedEngine, interval: Duration, on_tick: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (control, rx) = watch::channel(Control { running: false, interval });
        let generation = Arc::new(AtomicU64::new(0));
        let task = handle.spawn(run(engine, rx, Arc::clone(&generation), on_tick));
        Self { control, generation, task }
    }

    pub fn start(&self) {
        if self.control.send_if_modified(|c| !std::mem::replace(&mut c.running, true)) {
            info!("scheduler started");
        }
    }

    pub fn stop(&self) {
        if self.control.send_if_modified(|c| std::mem::replace(&mut c.running, false)) {
            info!("scheduler stopped");
        }
    }

    /// Flips between running and stopped, returning the new state.
    pub fn toggle(&self) -> bool {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.is_running()
    }

    pub fn is_running(&self) -> bool {
        self.control.borrow().running
    }

    /// New delay between generations. A tick already pending keeps its old
    /// deadline; the new interval applies from the one after.
    pub fn set_interval(&self, interval: Duration) {
        let changed = self.control.send_if_modified(|c| {
            let changed = c.interval != interval;
            c.interval = interval;
            changed
        });
        if changed {
            debug!("tick interval set to {interval:?}");
        }
    }

    pub fn interval(&self) -> Duration {
        self.control.borrow().interval
    }

    /// Generations stepped since spawn or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    pub fn reset_generation(&self) {
        self.generation.store(0, Ordering::Relaxed);
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<F>(
    engine: SharedEngine,
    mut control: watch::Receiver<Control>,
    generation: Arc<AtomicU64>,
    on_tick: F,
) where
    F: Fn(),
{
    loop {
        let Control { running, interval } = *control.borrow_and_update();
        if !running {
            if control.changed().await.is_err() {
                return;
            }
            continue;
        }

        let tick = time::sleep(interval);
        tokio::pin!(tick);
        loop {
            let changed = tokio::select! {
                _ = &mut tick => None,
                res = control.changed() => Some(res.is_ok()),
            };
            match changed {
                None => break,
                Some(false) => return,
                // Only a stop cancels the pending tick
                Some(true) if !control.borrow_and_update().running => break,
                Some(true) => {}
            }
        }
        if !control.borrow().running {
            continue;
        }

        if let Err(err) = engine.step() {
            error!("stepping failed, scheduler exiting: {err}");
            return;
        }
        generation.fetch_add(1, Ordering::Relaxed);
        on_tick();
    }
}
