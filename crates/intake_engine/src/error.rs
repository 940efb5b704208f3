use std::io;
use std::path::PathBuf;

use intake_core::PreviewHandle;
use thiserror::Error;

use crate::PersistError;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("could not create preview store: {0}")]
    StoreInit(#[source] io::Error),
    #[error("could not read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} is not a regular file")]
    NotAFile { path: PathBuf },
    #[error("{handle} has no readable source")]
    MissingSource { handle: PreviewHandle },
    #[error("could not create preview resource for {handle}: {source}")]
    HandleCreate {
        handle: PreviewHandle,
        #[source]
        source: io::Error,
    },
    #[error("unknown or released {0}")]
    UnknownHandle(PreviewHandle),
    #[error("could not save download: {0}")]
    Download(#[from] PersistError),
}
