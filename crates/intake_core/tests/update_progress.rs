use std::time::Duration;

use intake_core::{update, AppState, Effect, FileCandidate, IntakeSettings, Msg, PreviewHandle};

fn drop_pdf(state: AppState, name: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FilesDropped {
            candidates: vec![FileCandidate::new(name, 1, "application/pdf")],
            accepted_at: "08:00:00".to_string(),
        },
    )
}

#[test]
fn ticks_drive_progress_to_completion() {
    let (mut state, _) = drop_pdf(AppState::new(), "a.pdf");
    assert_eq!(state.view().progress.percent, 0);
    assert!(!state.view().progress.visible);

    let mut last = 0;
    for _ in 0..12 {
        let (next, effects) = update(state, Msg::ProgressTick { run: 1 });
        state = next;
        assert!(effects.is_empty());
        let progress = state.view().progress;
        assert!(progress.percent > last);
        assert!(progress.visible);
        last = progress.percent;
    }

    let (state, effects) = update(state, Msg::ProgressTick { run: 1 });
    assert_eq!(effects, vec![Effect::StopProgressTimer { run: 1 }]);
    assert_eq!(state.view().progress.percent, 100);
    assert!(!state.view().progress.visible);
}

#[test]
fn new_batch_supersedes_running_progress() {
    let (state, _) = drop_pdf(AppState::new(), "a.pdf");
    let (state, _) = update(state, Msg::ProgressTick { run: 1 });
    let (state, _) = update(state, Msg::ProgressTick { run: 1 });
    assert_eq!(state.view().progress.percent, 16);

    let (state, effects) = drop_pdf(state, "b.pdf");
    assert_eq!(
        effects,
        vec![
            Effect::StopProgressTimer { run: 1 },
            Effect::StartProgressTimer {
                run: 2,
                interval: Duration::from_millis(120),
            },
            Effect::RegisterHandle {
                handle: PreviewHandle(2),
                file: FileCandidate::new("b.pdf", 1, "application/pdf"),
            },
        ]
    );
    assert_eq!(state.view().progress.percent, 0);

    let mut state = state;
    assert!(state.consume_dirty());
    let (mut state, effects) = update(state, Msg::ProgressTick { run: 1 });
    assert!(effects.is_empty());
    assert_eq!(state.view().progress.percent, 0);
    assert!(!state.consume_dirty());
}

#[test]
fn custom_step_and_interval_are_honoured() {
    let settings = IntakeSettings {
        progress_step: 25,
        progress_interval: Duration::from_millis(10),
        ..IntakeSettings::default()
    };
    let (state, effects) = drop_pdf(AppState::with_settings(settings), "a.pdf");
    assert_eq!(
        effects[0],
        Effect::StartProgressTimer {
            run: 1,
            interval: Duration::from_millis(10),
        }
    );

    let (state, _) = update(state, Msg::ProgressTick { run: 1 });
    let (state, _) = update(state, Msg::ProgressTick { run: 1 });
    let (state, _) = update(state, Msg::ProgressTick { run: 1 });
    let (state, effects) = update(state, Msg::ProgressTick { run: 1 });
    assert_eq!(effects, vec![Effect::StopProgressTimer { run: 1 }]);
    assert_eq!(state.progress().percent(), 100);
}

#[test]
fn shutdown_stops_timer_and_releases_every_handle() {
    let (state, _) = drop_pdf(AppState::new(), "a.pdf");
    let (state, _) = drop_pdf(state, "b.pdf");
    let (state, _) = update(state, Msg::EntrySelected { handle: PreviewHandle(1) });

    let (state, effects) = update(state, Msg::Shutdown);
    assert_eq!(
        effects,
        vec![
            Effect::StopProgressTimer { run: 2 },
            Effect::ReleaseHandle {
                handle: PreviewHandle(2)
            },
            Effect::ReleaseHandle {
                handle: PreviewHandle(1)
            },
        ]
    );
    assert!(state.registry().is_empty());
    assert!(state.view().preview.is_none());

    let (_state, effects) = update(state, Msg::Shutdown);
    assert!(effects.is_empty());
}
