use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use intake_core::RunId;
use intake_logging::intake_debug;

use crate::EngineEvent;

/// Fixed-interval timer for the simulated progress bar. One run at a time:
/// starting a run stops the previous one.
pub struct ProgressTicker {
    events: mpsc::Sender<EngineEvent>,
    current: Option<(RunId, Arc<AtomicBool>)>,
}

impl ProgressTicker {
    pub fn new(events: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            events,
            current: None,
        }
    }

    pub fn start(&mut self, run: RunId, interval: Duration) {
        self.stop_all();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let events = self.events.clone();
        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Acquire) {
                break;
            }
            if events.send(EngineEvent::ProgressTick { run }).is_err() {
                break;
            }
        });
        intake_debug!("Progress timer started for run {} every {:?}", run, interval);
        self.current = Some((run, stop));
    }

    /// Stops `run` if it is the active one; a stop for an older run is a no-op.
    pub fn stop(&mut self, run: RunId) {
        if self.active_run() == Some(run) {
            self.stop_all();
        }
    }

    pub fn stop_all(&mut self) {
        if let Some((run, stop)) = self.current.take() {
            stop.store(true, Ordering::Release);
            intake_debug!("Progress timer stopped for run {}", run);
        }
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.current.as_ref().map(|(run, _)| *run)
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.stop_all();
    }
}
