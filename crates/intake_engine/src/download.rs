use std::path::{Path, PathBuf};

use intake_core::PreviewHandle;
use intake_logging::intake_info;

use crate::{sanitize_file_name, DownloadWriter, IntakeError};

/// Saves the bytes read from `handle` into `dest_dir` under the upload's
/// original (sanitized) name. Files already in the folder are kept; the new
/// copy gets a numbered name instead.
pub fn save_as(
    handle: PreviewHandle,
    bytes: &[u8],
    file_name: &str,
    dest_dir: &Path,
) -> Result<PathBuf, IntakeError> {
    let target = DownloadWriter::new(dest_dir).save(&sanitize_file_name(file_name), bytes)?;
    intake_info!("Saved {} ({} bytes) to {:?}", handle, bytes.len(), target);
    Ok(target)
}
