/// Generation id of one simulated run. A restart bumps it, which turns every
/// tick still in flight for the old run into a stale tick.
pub type RunId = u64;

const COMPLETE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick belonged to a superseded or finished run.
    Stale,
    Advanced { percent: u32 },
    Completed,
}

/// Process-wide synthetic progress counter. Latest batch wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSimulator {
    step: u32,
    percent: u32,
    run: RunId,
    running: bool,
}

impl ProgressSimulator {
    pub fn new(step: u32) -> Self {
        Self {
            step: step.max(1),
            percent: 0,
            run: 0,
            running: false,
        }
    }

    /// Resets the counter to 0 and abandons any run in progress.
    pub fn start(&mut self) -> RunId {
        self.run += 1;
        self.percent = 0;
        self.running = true;
        self.run
    }

    pub fn tick(&mut self, run: RunId) -> TickOutcome {
        if !self.running || run != self.run {
            return TickOutcome::Stale;
        }
        self.percent = (self.percent + self.step).min(COMPLETE);
        if self.percent >= COMPLETE {
            self.running = false;
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced {
                percent: self.percent,
            }
        }
    }

    /// Stops the current run where it is, e.g. on teardown.
    pub fn halt(&mut self) -> Option<RunId> {
        if self.running {
            self.running = false;
            Some(self.run)
        } else {
            None
        }
    }

    pub fn percent(&self) -> u32 {
        self.percent
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.running.then_some(self.run)
    }

    /// The bar is only shown strictly between empty and full.
    pub fn is_visible(&self) -> bool {
        self.percent > 0 && self.percent < COMPLETE
    }

    /// Ticks a run needs to reach completion: `ceil(100 / step)`.
    pub fn ticks_to_complete(&self) -> u32 {
        COMPLETE.div_ceil(self.step)
    }
}
