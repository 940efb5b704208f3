use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use chrono::Local;
use intake_core::{update, AppState, IntakeSettings, Msg, PreviewHandle};
use intake_engine::read_batch;
use intake_logging::{intake_info, intake_warn};
use log::LevelFilter;

use super::cli::Cli;
use super::config;
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render;

/// How long the loop waits for input before checking engine events again.
const POLL_INTERVAL: Duration = Duration::from_millis(40);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    intake_logging::initialize(cli.log.into(), level, &cli.log_file);

    let settings = config::load_settings(cli.config.as_deref())?;
    let mut runner = EffectRunner::new().context("starting intake engine")?;
    let mut dashboard = Dashboard::new(settings, cli.download_dir.clone());

    // stdin is read on its own thread so engine events keep flowing while
    // the user is typing.
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    println!("{HELP}");
    if !cli.files.is_empty() {
        dashboard.drop_files(&cli.files, &mut runner);
    }
    dashboard.render(&runner);

    loop {
        let mut redraw = false;
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => redraw |= dashboard.handle_command(command, &mut runner),
                Ok(None) => {}
                Err(message) => println!("? {message}"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        let mut progressed = false;
        for msg in runner.poll() {
            let is_tick = matches!(msg, Msg::ProgressTick { .. });
            let changed = dashboard.dispatch(msg, &mut runner);
            if is_tick {
                progressed |= changed;
            } else {
                redraw |= changed;
            }
        }

        if redraw {
            dashboard.render(&runner);
        } else if progressed {
            dashboard.render_progress();
        }
    }

    dashboard.dispatch(Msg::Shutdown, &mut runner);
    runner.shutdown();
    intake_info!("Dashboard closed");
    Ok(())
}

struct Dashboard {
    state: AppState,
    download_dir: PathBuf,
}

impl Dashboard {
    fn new(settings: IntakeSettings, download_dir: PathBuf) -> Self {
        Self {
            state: AppState::with_settings(settings),
            download_dir,
        }
    }

    /// Runs one message through `update`, hands the effects to the runner and
    /// reports whether the view changed.
    fn dispatch(&mut self, msg: Msg, runner: &mut EffectRunner) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        runner.enqueue(effects);
        was_dirty
    }

    fn handle_command(&mut self, command: Command, runner: &mut EffectRunner) -> bool {
        match command {
            Command::Drop(paths) => self.drop_files(&paths, runner),
            Command::Open(row) => match self.handle_for_row(row) {
                Some(handle) => self.dispatch(Msg::EntrySelected { handle }, runner),
                None => false,
            },
            Command::Close => self.dispatch(Msg::PreviewDismissed, runner),
            Command::Remove(row) => match self.handle_for_row(row) {
                Some(handle) => self.dispatch(
                    Msg::EntryRemoved {
                        handle,
                        at: timestamp(),
                    },
                    runner,
                ),
                None => false,
            },
            Command::Download { row, dir } => match self.handle_for_row(row) {
                Some(handle) => {
                    let dest_dir = dir.unwrap_or_else(|| self.download_dir.clone());
                    self.dispatch(Msg::DownloadRequested { handle, dest_dir }, runner)
                }
                None => false,
            },
            Command::Show => true,
            Command::Help => {
                println!("{HELP}");
                false
            }
            // Handled by the loop before dispatch.
            Command::Quit => false,
        }
    }

    /// Reads the paths from disk and delivers them as one batch. Read
    /// failures are dispatched after the batch, which clears older errors.
    fn drop_files(&mut self, paths: &[PathBuf], runner: &mut EffectRunner) -> bool {
        let (candidates, failures) = read_batch(paths);
        let mut changed = self.dispatch(
            Msg::FilesDropped {
                candidates,
                accepted_at: timestamp(),
            },
            runner,
        );
        for (path, error) in failures {
            intake_warn!("Skipping {:?}: {}", path, error);
            changed |= self.dispatch(
                Msg::ReadFailed {
                    path,
                    reason: error.to_string(),
                },
                runner,
            );
        }
        changed
    }

    fn handle_for_row(&self, row: usize) -> Option<PreviewHandle> {
        let handle = row
            .checked_sub(1)
            .and_then(|idx| self.state.registry().entries().get(idx))
            .map(|entry| entry.handle);
        if handle.is_none() {
            println!("? no upload in row {row}");
        }
        handle
    }

    fn render(&self, runner: &EffectRunner) {
        let view = self.state.view();
        let uri = view
            .preview
            .as_ref()
            .and_then(|preview| runner.preview_uri(preview.source));
        print!("\n{}", render::render(&view, uri.as_deref()));
        flush_stdout();
    }

    /// Redraws only the progress line in place; ends the line when done.
    fn render_progress(&self) {
        let progress = self.state.view().progress;
        if progress.visible {
            print!("\rUploading {:>3}%", progress.percent);
        } else {
            println!("\rUpload complete.");
        }
        flush_stdout();
    }
}

fn timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

fn flush_stdout() {
    if let Err(err) = io::stdout().flush() {
        intake_warn!("Could not flush stdout: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn dropped_files_flow_through_core_and_engine() {
        let temp = tempfile::TempDir::new().unwrap();
        let pdf = temp.path().join("a.pdf");
        let txt = temp.path().join("b.txt");
        fs::write(&pdf, b"%PDF").unwrap();
        fs::write(&txt, b"hello").unwrap();

        let mut runner = EffectRunner::new().unwrap();
        let mut dashboard = Dashboard::new(IntakeSettings::default(), temp.path().join("dl"));

        assert!(dashboard.drop_files(&[pdf, txt, temp.path().join("missing.png")], &mut runner));
        let view = dashboard.state.view();
        assert_eq!(view.uploads.len(), 1);
        assert!(view.rejection.is_some());
        assert!(view.last_error.unwrap().contains("missing.png"));

        assert_eq!(dashboard.handle_for_row(1), Some(PreviewHandle(1)));
        assert_eq!(dashboard.handle_for_row(2), None);
        assert_eq!(dashboard.handle_for_row(0), None);

        assert!(dashboard.handle_command(Command::Open(1), &mut runner));
        assert!(dashboard.state.view().preview.is_some());
        assert!(dashboard.handle_command(Command::Remove(1), &mut runner));
        assert!(dashboard.state.view().preview.is_none());
        assert!(dashboard.state.registry().is_empty());

        dashboard.dispatch(Msg::Shutdown, &mut runner);
        runner.shutdown();
    }
}
