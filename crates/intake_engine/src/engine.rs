use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use intake_core::{FileCandidate, PreviewHandle, RunId};
use intake_logging::{intake_info, intake_warn};

use crate::{save_as, HandleStore, IntakeError, ProgressTicker};

enum EngineCommand {
    Register {
        handle: PreviewHandle,
        file: FileCandidate,
    },
    Release {
        handle: PreviewHandle,
    },
    SaveAs {
        handle: PreviewHandle,
        file_name: String,
        dest_dir: PathBuf,
    },
}

#[derive(Debug)]
pub enum EngineEvent {
    ProgressTick {
        run: RunId,
    },
    HandleRegistered {
        handle: PreviewHandle,
        uri: String,
    },
    HandleFailed {
        handle: PreviewHandle,
        error: IntakeError,
    },
    DownloadFinished {
        handle: PreviewHandle,
        result: Result<PathBuf, IntakeError>,
    },
}

/// Runs file work on a worker thread and the progress timer on its own
/// thread. Results come back as [`EngineEvent`]s through `try_recv`.
pub struct EngineHandle {
    cmd_tx: Option<mpsc::Sender<EngineCommand>>,
    event_rx: mpsc::Receiver<EngineEvent>,
    store: Arc<Mutex<HandleStore>>,
    ticker: ProgressTicker,
    worker: Option<JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new() -> Result<Self, IntakeError> {
        let store = Arc::new(Mutex::new(HandleStore::new()?));
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let ticker = ProgressTicker::new(event_tx.clone());

        let worker_store = store.clone();
        let worker = thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let event = handle_command(&worker_store, command);
                if let Some(event) = event {
                    let _ = event_tx.send(event);
                }
            }
        });

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            event_rx,
            store,
            ticker,
            worker: Some(worker),
        })
    }

    pub fn register(&self, handle: PreviewHandle, file: FileCandidate) {
        self.send(EngineCommand::Register { handle, file });
    }

    pub fn release(&self, handle: PreviewHandle) {
        self.send(EngineCommand::Release { handle });
    }

    pub fn save_as(&self, handle: PreviewHandle, file_name: String, dest_dir: PathBuf) {
        self.send(EngineCommand::SaveAs {
            handle,
            file_name,
            dest_dir,
        });
    }

    pub fn start_progress(&mut self, run: RunId, interval: Duration) {
        self.ticker.start(run, interval);
    }

    pub fn stop_progress(&mut self, run: RunId) {
        self.ticker.stop(run);
    }

    /// URI a viewer can load for `handle`, once the worker has backed it.
    pub fn resolve_uri(&self, handle: PreviewHandle) -> Option<String> {
        lock(&self.store).uri(handle).map(ToOwned::to_owned)
    }

    pub fn resolve_path(&self, handle: PreviewHandle) -> Option<PathBuf> {
        lock(&self.store).resolve(handle).map(ToOwned::to_owned)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Stops the timer, lets the worker drain queued commands, then releases
    /// every handle that is still backed.
    pub fn shutdown(mut self) {
        self.ticker.stop_all();
        self.cmd_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                intake_warn!("Engine worker panicked during shutdown");
            }
        }
        let released = lock(&self.store).release_all();
        intake_info!("Engine shut down; released {} leftover handle(s)", released);
    }

    fn send(&self, command: EngineCommand) {
        if let Some(tx) = &self.cmd_tx {
            let _ = tx.send(command);
        }
    }
}

fn handle_command(store: &Mutex<HandleStore>, command: EngineCommand) -> Option<EngineEvent> {
    match command {
        EngineCommand::Register { handle, file } => {
            let event = match lock(store).register(handle, &file) {
                Ok(uri) => EngineEvent::HandleRegistered { handle, uri },
                Err(error) => EngineEvent::HandleFailed { handle, error },
            };
            Some(event)
        }
        EngineCommand::Release { handle } => {
            if !lock(store).release(handle) {
                intake_warn!("Release of {} ignored; not backed", handle);
            }
            None
        }
        EngineCommand::SaveAs {
            handle,
            file_name,
            dest_dir,
        } => {
            // The store stays unlocked while the bytes are written out.
            let bytes = lock(store).read(handle);
            let result = bytes.and_then(|bytes| save_as(handle, &bytes, &file_name, &dest_dir));
            Some(EngineEvent::DownloadFinished { handle, result })
        }
    }
}

fn lock(store: &Mutex<HandleStore>) -> MutexGuard<'_, HandleStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
