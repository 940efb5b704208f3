use std::path::PathBuf;
use std::time::Duration;

use crate::{FileCandidate, PreviewHandle, RunId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartProgressTimer { run: RunId, interval: Duration },
    StopProgressTimer { run: RunId },
    /// Back `handle` with a resolvable local resource for `file`.
    RegisterHandle {
        handle: PreviewHandle,
        file: FileCandidate,
    },
    /// Invalidate `handle`. Emitted exactly once per minted handle.
    ReleaseHandle { handle: PreviewHandle },
    SaveAs {
        handle: PreviewHandle,
        file_name: String,
        dest_dir: PathBuf,
    },
}
