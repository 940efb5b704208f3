use std::fs;
use std::path::{Path, PathBuf};

use intake_core::FileCandidate;
use intake_logging::intake_debug;

use crate::IntakeError;

/// Declared types the way a browser's file picker would report them.
/// Unknown extensions declare an empty type.
const EXTENSION_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("json", "application/json"),
    ("zip", "application/zip"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

pub fn declared_mime(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return "";
    };
    EXTENSION_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, mime)| *mime)
        .unwrap_or("")
}

/// Builds a candidate from a file on disk. Only metadata is read here; bytes
/// are copied later when the preview handle is backed.
pub fn read_candidate(path: &Path) -> Result<FileCandidate, IntakeError> {
    let meta = fs::metadata(path).map_err(|source| IntakeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        return Err(IntakeError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime = declared_mime(&name);
    intake_debug!("Candidate {:?} size={} mime={:?}", path, meta.len(), mime);
    Ok(FileCandidate::new(name, meta.len(), mime).with_source(path))
}

/// Reads a whole batch. Unreadable paths are reported separately and do not
/// stop the rest of the batch.
pub fn read_batch<P: AsRef<Path>>(
    paths: &[P],
) -> (Vec<FileCandidate>, Vec<(PathBuf, IntakeError)>) {
    let mut candidates = Vec::with_capacity(paths.len());
    let mut failures = Vec::new();
    for path in paths {
        let path = path.as_ref();
        match read_candidate(path) {
            Ok(candidate) => candidates.push(candidate),
            Err(err) => failures.push((path.to_path_buf(), err)),
        }
    }
    (candidates, failures)
}
