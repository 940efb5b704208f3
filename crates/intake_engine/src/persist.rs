use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

/// Highest `name (N).ext` suffix tried before a save gives up.
const MAX_DUPLICATES: u32 = 999;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("download folder unusable: {0}")]
    DestinationDir(String),
    #[error("no free name for {name} in the download folder")]
    NameExhausted { name: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Saves downloads into one folder without touching files already there.
///
/// The bytes are written to a temp file in the folder and then linked into
/// place with a no-clobber rename. When the name is taken the writer moves on
/// to `name (1).ext`, `name (2).ext` and so on.
pub struct DownloadWriter {
    dir: PathBuf,
}

impl DownloadWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path the bytes ended up at.
    pub fn save(&self, file_name: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
        let mut staged = self.stage()?;
        staged.write_all(content)?;
        staged.as_file_mut().sync_all()?;

        for copy in 0..=MAX_DUPLICATES {
            let target = self.dir.join(numbered_name(file_name, copy));
            match staged.persist_noclobber(&target) {
                Ok(_) => return Ok(target),
                Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => staged = err.file,
                Err(err) => return Err(PersistError::Io(err.error)),
            }
        }
        Err(PersistError::NameExhausted {
            name: file_name.to_string(),
        })
    }

    /// Creates the folder if needed and opens the temp file the save goes through.
    fn stage(&self) -> Result<NamedTempFile, PersistError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if !meta.is_dir() => {
                return Err(PersistError::DestinationDir(format!(
                    "{} is not a directory",
                    self.dir.display()
                )))
            }
            Ok(_) => {}
            Err(_) => fs::create_dir_all(&self.dir)
                .map_err(|e| PersistError::DestinationDir(e.to_string()))?,
        }
        tempfile::Builder::new()
            .prefix(".intake-download-")
            .tempfile_in(&self.dir)
            .map_err(|e| PersistError::DestinationDir(e.to_string()))
    }
}

/// `report.pdf` for the first copy, then `report (1).pdf`, `report (2).pdf`.
fn numbered_name(file_name: &str, copy: u32) -> String {
    if copy == 0 {
        return file_name.to_string();
    }
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    match path.extension() {
        Some(ext) => format!("{stem} ({copy}).{}", ext.to_string_lossy()),
        None => format!("{stem} ({copy})"),
    }
}
