use sync_core::{update, AppState, Effect, Msg, Phase, StopPolicy};

fn checked(status: &str, progress: u8) -> Msg {
    Msg::ProgressChecked {
        status: status.to_string(),
        progress,
    }
}

fn start_bulk(state: AppState) -> AppState {
    let (state, _effects) = update(
        state,
        Msg::SyncAllClicked {
            label: "Sync now".to_string(),
            width: 96,
        },
    );
    state
}

#[test]
fn progress_is_rendered_verbatim() {
    let state = start_bulk(AppState::new());

    let (state, effects) = update(state, checked("importing products", 37));
    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.progress.percent, 37);
    assert_eq!(view.progress.status, "importing products");

    // No monotonicity enforcement: a later smaller reading overwrites.
    let (state, _effects) = update(state, checked("importing products", 12));
    assert_eq!(state.view().progress.percent, 12);
}

#[test]
fn early_idle_does_not_stop_polling_while_awaiting_terminal() {
    let state = start_bulk(AppState::new());
    assert_eq!(state.phase(), Phase::AwaitingTerminal);

    // The server has not persisted "in progress" yet; the tick must be
    // survived, not treated as completion.
    let (state, effects) = update(state, checked("idle", 0));
    assert!(effects.is_empty());
    assert_eq!(state.phase(), Phase::AwaitingTerminal);
    assert!(state.view().progress.visible);
}

#[test]
fn zero_progress_counts_as_idle_for_the_stop_decision() {
    let state = start_bulk(AppState::new());

    let (_state, effects) = update(state, checked("running", 0));
    assert!(effects.is_empty());
}

#[test]
fn idle_stops_polling_on_the_legacy_path() {
    let (state, _effects) = update(AppState::new(), Msg::LegacyFormSubmitted);
    let (state, _effects) = update(state, checked("running", 55));

    let (state, effects) = update(state, checked("idle", 0));
    assert_eq!(
        effects,
        vec![Effect::StopPolling {
            policy: StopPolicy::Immediate
        }]
    );
    assert_eq!(state.phase(), Phase::Idle);
    assert!(!state.view().progress.visible);
}

#[test]
fn idle_after_terminal_stops_polling_during_grace_window() {
    let state = start_bulk(AppState::new());
    let (state, _effects) = update(
        state,
        Msg::SyncAllFinished {
            result: Ok(sync_core::SyncSummary::default()),
        },
    );
    assert_eq!(state.phase(), Phase::Idle);

    // The poller may still tick during the grace window; an idle reading
    // now is a legitimate stop.
    let (_state, effects) = update(state, checked("idle", 0));
    assert_eq!(
        effects,
        vec![Effect::StopPolling {
            policy: StopPolicy::Immediate
        }]
    );
}
