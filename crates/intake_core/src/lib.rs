//! Intake core: pure state machine and view-model helpers for the upload dashboard.
mod activity;
mod effect;
mod intake;
mod kind;
mod msg;
mod preview;
mod progress;
mod registry;
mod settings;
mod state;
mod storage;
mod update;
mod view_model;

pub use activity::{ActivityLog, ActivityRecord};
pub use effect::Effect;
pub use intake::{is_allowed_type, partition, FileCandidate, Partition, REJECTION_MESSAGE};
pub use kind::{FileKind, Viewer};
pub use msg::Msg;
pub use preview::PreviewController;
pub use progress::{ProgressSimulator, RunId, TickOutcome};
pub use registry::{PreviewHandle, UploadRegistry, UploadedFileEntry};
pub use settings::IntakeSettings;
pub use state::AppState;
pub use storage::{estimate, StorageUsage};
pub use update::update;
pub use view_model::{AppViewModel, PreviewView, ProgressView, UploadRowView};
