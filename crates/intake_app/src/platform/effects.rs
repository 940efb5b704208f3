use intake_core::{Effect, Msg, PreviewHandle};
use intake_engine::{EngineEvent, EngineHandle, IntakeError};
use intake_logging::{intake_debug, intake_info};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new() -> Result<Self, IntakeError> {
        Ok(Self {
            engine: EngineHandle::new()?,
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartProgressTimer { run, interval } => {
                    self.engine.start_progress(run, interval);
                }
                Effect::StopProgressTimer { run } => {
                    self.engine.stop_progress(run);
                }
                Effect::RegisterHandle { handle, file } => {
                    intake_debug!("RegisterHandle {} name={} size={}", handle, file.name, file.size);
                    self.engine.register(handle, file);
                }
                Effect::ReleaseHandle { handle } => {
                    intake_debug!("ReleaseHandle {}", handle);
                    self.engine.release(handle);
                }
                Effect::SaveAs {
                    handle,
                    file_name,
                    dest_dir,
                } => {
                    intake_info!("SaveAs {} name={} dir={:?}", handle, file_name, dest_dir);
                    self.engine.save_as(handle, file_name, dest_dir);
                }
            }
        }
    }

    /// Drains pending engine events into messages for `update`.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            if let Some(msg) = map_event(event) {
                inbox.push(msg);
            }
        }
        inbox
    }

    pub fn preview_uri(&self, handle: PreviewHandle) -> Option<String> {
        self.engine.resolve_uri(handle)
    }

    pub fn shutdown(self) {
        self.engine.shutdown();
    }
}

fn map_event(event: EngineEvent) -> Option<Msg> {
    match event {
        EngineEvent::ProgressTick { run } => Some(Msg::ProgressTick { run }),
        EngineEvent::HandleRegistered { handle, uri } => {
            intake_debug!("{} backed as {}", handle, uri);
            None
        }
        EngineEvent::HandleFailed { handle, error } => Some(Msg::HandleFailed {
            handle,
            reason: error.to_string(),
        }),
        EngineEvent::DownloadFinished { handle, result } => Some(Msg::DownloadFinished {
            handle,
            result: result.map_err(|err| err.to_string()),
        }),
    }
}
