use std::path::PathBuf;

use crate::{FileCandidate, PreviewHandle, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A drop or a file-picker selection delivered one batch of candidates.
    FilesDropped {
        candidates: Vec<FileCandidate>,
        /// Local wall-clock time string stamped on accepted entries.
        accepted_at: String,
    },
    /// User clicked a file name in the recent uploads list.
    EntrySelected { handle: PreviewHandle },
    /// User closed the preview modal.
    PreviewDismissed,
    /// User removed an upload from the list.
    EntryRemoved { handle: PreviewHandle, at: String },
    /// User asked to save an upload under its original name.
    DownloadRequested { handle: PreviewHandle, dest_dir: PathBuf },
    /// Timer tick for a simulated progress run.
    ProgressTick { run: RunId },
    /// Engine could not read a candidate while building a batch.
    ReadFailed { path: PathBuf, reason: String },
    /// Engine could not back a freshly minted preview handle.
    HandleFailed { handle: PreviewHandle, reason: String },
    /// Engine finished a save-as request.
    DownloadFinished {
        handle: PreviewHandle,
        result: Result<PathBuf, String>,
    },
    /// Dashboard is being torn down; release everything.
    Shutdown,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
