use intake_logging::{intake_debug, intake_info, intake_warn};

use crate::{partition, AppState, Effect, Msg, TickOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesDropped {
            candidates,
            accepted_at,
        } => {
            let split = partition(&candidates);
            if split.is_empty() {
                return (state, Vec::new());
            }
            if !split.rejected.is_empty() {
                intake_info!(
                    "Rejected {} file(s) with disallowed type",
                    split.rejected.len()
                );
            }
            state.set_rejection(!split.rejected.is_empty());

            if split.accepted.is_empty() {
                Vec::new()
            } else {
                state.clear_error();
                let (superseded, run) = state.restart_progress();
                let fresh = state.accept_batch(&split.accepted, &accepted_at);

                let mut effects = Vec::with_capacity(fresh.len() + 2);
                if let Some(old) = superseded {
                    effects.push(Effect::StopProgressTimer { run: old });
                }
                effects.push(Effect::StartProgressTimer {
                    run,
                    interval: state.settings().progress_interval,
                });
                for entry in fresh {
                    effects.push(Effect::RegisterHandle {
                        handle: entry.handle,
                        file: entry.file,
                    });
                }
                effects
            }
        }
        Msg::EntrySelected { handle } => {
            if !state.select(handle) {
                intake_warn!("Ignoring selection of unknown {}", handle);
            }
            Vec::new()
        }
        Msg::PreviewDismissed => {
            state.dismiss_preview();
            Vec::new()
        }
        Msg::EntryRemoved { handle, at } => match state.remove_entry(handle, &at) {
            Some(entry) => {
                intake_info!("Removed {} ({})", entry.file.name, handle);
                vec![Effect::ReleaseHandle { handle }]
            }
            None => Vec::new(),
        },
        Msg::DownloadRequested { handle, dest_dir } => match state.registry().get(handle) {
            Some(entry) => vec![Effect::SaveAs {
                handle,
                file_name: entry.file.name.clone(),
                dest_dir,
            }],
            None => {
                intake_warn!("Download requested for unknown {}", handle);
                Vec::new()
            }
        },
        Msg::ProgressTick { run } => match state.tick_progress(run) {
            TickOutcome::Completed => vec![Effect::StopProgressTimer { run }],
            TickOutcome::Advanced { .. } => Vec::new(),
            TickOutcome::Stale => {
                intake_debug!("Dropping stale tick for run {}", run);
                Vec::new()
            }
        },
        Msg::ReadFailed { path, reason } => {
            intake_warn!("Could not read {:?}: {}", path, reason);
            state.set_error(format!("Could not read {}: {reason}", path.display()));
            Vec::new()
        }
        Msg::HandleFailed { handle, reason } => {
            intake_warn!("Preview handle {} failed: {}", handle, reason);
            let name = state
                .registry()
                .get(handle)
                .map(|entry| entry.file.name.clone())
                .unwrap_or_else(|| handle.to_string());
            state.set_error(format!("Preview unavailable for {name}: {reason}"));
            Vec::new()
        }
        Msg::DownloadFinished { handle, result } => {
            match result {
                Ok(path) => {
                    intake_info!("Saved {} to {:?}", handle, path);
                    state.clear_error();
                }
                Err(reason) => {
                    intake_warn!("Download of {} failed: {}", handle, reason);
                    state.set_error(format!("Download failed: {reason}"));
                }
            }
            Vec::new()
        }
        Msg::Shutdown => {
            let (drained, halted) = state.teardown();
            let mut effects = Vec::with_capacity(drained.len() + 1);
            if let Some(run) = halted {
                effects.push(Effect::StopProgressTimer { run });
            }
            effects.extend(
                drained
                    .into_iter()
                    .map(|entry| Effect::ReleaseHandle {
                        handle: entry.handle,
                    }),
            );
            effects
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
