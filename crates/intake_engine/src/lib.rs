//! Intake engine: file IO behind the dashboard's effects.
mod candidate;
mod download;
mod engine;
mod error;
mod filename;
mod handles;
mod persist;
mod ticker;

pub use candidate::{declared_mime, read_batch, read_candidate};
pub use download::save_as;
pub use engine::{EngineEvent, EngineHandle};
pub use error::IntakeError;
pub use filename::sanitize_file_name;
pub use handles::HandleStore;
pub use persist::{DownloadWriter, PersistError};
pub use ticker::ProgressTicker;
