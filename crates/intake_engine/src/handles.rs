use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use intake_core::{FileCandidate, PreviewHandle};
use intake_logging::{intake_debug, intake_warn};
use sha2::{Digest, Sha256};
use tempfile::TempDir;

use crate::{sanitize_file_name, IntakeError};

const MAX_BACKING_EXT: usize = 16;

#[derive(Debug)]
struct Backing {
    path: PathBuf,
    uri: String,
}

/// Backs preview handles with private copies of the uploaded bytes.
///
/// Every copy lives in a temp directory owned by the store. A handle is valid
/// from `register` until `release`; dropping the store removes whatever is
/// left.
#[derive(Debug)]
pub struct HandleStore {
    root: TempDir,
    backed: HashMap<PreviewHandle, Backing>,
}

impl HandleStore {
    pub fn new() -> Result<Self, IntakeError> {
        let root = tempfile::Builder::new()
            .prefix("intake-previews-")
            .tempdir()
            .map_err(IntakeError::StoreInit)?;
        Ok(Self {
            root,
            backed: HashMap::new(),
        })
    }

    /// Copies the candidate's bytes into the store and returns the handle's URI.
    pub fn register(
        &mut self,
        handle: PreviewHandle,
        file: &FileCandidate,
    ) -> Result<String, IntakeError> {
        if let Some(existing) = self.backed.get(&handle) {
            return Ok(existing.uri.clone());
        }
        let source = file
            .source
            .as_deref()
            .ok_or(IntakeError::MissingSource { handle })?;
        let path = self.root.path().join(backing_name(handle, &file.name));
        fs::copy(source, &path).map_err(|source| IntakeError::HandleCreate { handle, source })?;

        let uri = format!("blob:intake/{}-{}", short_hash(&file.name), handle.0);
        intake_debug!("Backed {} at {:?} as {}", handle, path, uri);
        self.backed.insert(
            handle,
            Backing {
                path,
                uri: uri.clone(),
            },
        );
        Ok(uri)
    }

    pub fn resolve(&self, handle: PreviewHandle) -> Option<&Path> {
        self.backed.get(&handle).map(|b| b.path.as_path())
    }

    pub fn uri(&self, handle: PreviewHandle) -> Option<&str> {
        self.backed.get(&handle).map(|b| b.uri.as_str())
    }

    pub fn read(&self, handle: PreviewHandle) -> Result<Vec<u8>, IntakeError> {
        let path = self
            .resolve(handle)
            .ok_or(IntakeError::UnknownHandle(handle))?;
        fs::read(path).map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Invalidates a handle. Returns false if it was unknown or already released.
    pub fn release(&mut self, handle: PreviewHandle) -> bool {
        let Some(backing) = self.backed.remove(&handle) else {
            return false;
        };
        if let Err(err) = fs::remove_file(&backing.path) {
            intake_warn!("Could not remove {:?} for {}: {}", backing.path, handle, err);
        }
        true
    }

    pub fn release_all(&mut self) -> usize {
        let handles: Vec<_> = self.backed.keys().copied().collect();
        handles
            .into_iter()
            .filter(|handle| self.release(*handle))
            .count()
    }

    pub fn len(&self) -> usize {
        self.backed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backed.is_empty()
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Backing copies are named by handle id; the upload's name can already use
/// the whole length the filesystem allows. A short extension is kept.
fn backing_name(handle: PreviewHandle, file_name: &str) -> String {
    let ext = Path::new(file_name)
        .extension()
        .map(|ext| sanitize_file_name(&ext.to_string_lossy()))
        .filter(|ext| ext.len() <= MAX_BACKING_EXT);
    match ext {
        Some(ext) => format!("{}.{ext}", handle.0),
        None => handle.0.to_string(),
    }
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
