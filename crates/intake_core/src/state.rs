use intake_logging::{intake_debug, intake_info};

use crate::view_model::{AppViewModel, PreviewView, ProgressView, UploadRowView};
use crate::{
    estimate, ActivityLog, FileCandidate, IntakeSettings, PreviewController, PreviewHandle,
    ProgressSimulator, RunId, TickOutcome, UploadRegistry, UploadedFileEntry, REJECTION_MESSAGE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    settings: IntakeSettings,
    registry: UploadRegistry,
    activity: ActivityLog,
    progress: ProgressSimulator,
    preview: PreviewController,
    rejection: Option<String>,
    last_error: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(IntakeSettings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: IntakeSettings) -> Self {
        Self {
            progress: ProgressSimulator::new(settings.progress_step),
            settings,
            registry: UploadRegistry::new(),
            activity: ActivityLog::new(),
            preview: PreviewController::default(),
            rejection: None,
            last_error: None,
            dirty: false,
        }
    }

    pub fn settings(&self) -> &IntakeSettings {
        &self.settings
    }

    pub fn registry(&self) -> &UploadRegistry {
        &self.registry
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn progress(&self) -> &ProgressSimulator {
        &self.progress
    }

    pub fn preview(&self) -> PreviewController {
        self.preview
    }

    pub fn rejection(&self) -> Option<&str> {
        self.rejection.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn view(&self) -> AppViewModel {
        let uploads = self
            .registry
            .entries()
            .iter()
            .map(UploadRowView::from_entry)
            .collect();

        let preview = self
            .preview
            .selected()
            .and_then(|handle| self.registry.get(handle))
            .map(|entry| PreviewView {
                viewer: entry.kind.viewer(),
                source: entry.handle,
                caption: entry.file.name.clone(),
            });

        AppViewModel {
            uploads,
            rejection: self.rejection.clone(),
            progress: ProgressView {
                percent: self.progress.percent(),
                visible: self.progress.is_visible(),
            },
            activity: self.activity.records().to_vec(),
            storage: estimate(self.registry.len(), &self.settings),
            preview,
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Overwrites the rejection message from the outcome of the latest batch.
    pub(crate) fn set_rejection(&mut self, any_rejected: bool) {
        self.rejection = any_rejected.then(|| REJECTION_MESSAGE.to_string());
        self.mark_dirty();
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.mark_dirty();
    }

    /// Drops the error banner once a later operation succeeds.
    pub(crate) fn clear_error(&mut self) {
        if self.last_error.take().is_some() {
            self.mark_dirty();
        }
    }

    /// Registers and logs an accepted batch. Returns the fresh entries in batch order.
    pub(crate) fn accept_batch(
        &mut self,
        accepted: &[FileCandidate],
        accepted_at: &str,
    ) -> Vec<UploadedFileEntry> {
        let entries = self.registry.accept(accepted, accepted_at);
        let fresh = entries[..accepted.len()].to_vec();
        self.activity.record(accepted, accepted_at);
        intake_info!(
            "Accepted batch of {} file(s); registry now holds {}",
            accepted.len(),
            self.registry.len()
        );
        self.mark_dirty();
        fresh
    }

    /// Starts a new progress run; returns the superseded run if one was active.
    pub(crate) fn restart_progress(&mut self) -> (Option<RunId>, RunId) {
        let superseded = self.progress.current_run();
        let run = self.progress.start();
        if let Some(old) = superseded {
            intake_debug!("Progress run {} superseded by {}", old, run);
        }
        self.mark_dirty();
        (superseded, run)
    }

    pub(crate) fn tick_progress(&mut self, run: RunId) -> TickOutcome {
        let outcome = self.progress.tick(run);
        if outcome != TickOutcome::Stale {
            self.mark_dirty();
        }
        outcome
    }

    pub(crate) fn select(&mut self, handle: PreviewHandle) -> bool {
        if self.registry.get(handle).is_none() {
            return false;
        }
        self.preview.select(handle);
        self.mark_dirty();
        true
    }

    pub(crate) fn dismiss_preview(&mut self) {
        if self.preview.selected().is_some() {
            self.preview.dismiss();
            self.mark_dirty();
        }
    }

    pub(crate) fn remove_entry(
        &mut self,
        handle: PreviewHandle,
        at: &str,
    ) -> Option<UploadedFileEntry> {
        let entry = self.registry.remove(handle)?;
        self.preview.forget(handle);
        self.activity
            .record_text(format!("Removed {}", entry.file.name), at);
        self.mark_dirty();
        Some(entry)
    }

    /// Empties everything that holds resources. Returns the drained entries
    /// and the progress run that was still active, if any.
    pub(crate) fn teardown(&mut self) -> (Vec<UploadedFileEntry>, Option<RunId>) {
        let drained = self.registry.drain_all();
        self.preview.dismiss();
        let halted = self.progress.halt();
        self.mark_dirty();
        (drained, halted)
    }
}
