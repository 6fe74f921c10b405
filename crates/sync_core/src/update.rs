use crate::{AppState, ControlId, Effect, Msg, Phase, StopPolicy, SyncSummary, IDLE_STATUS};

/// Fixed success literal for a per-row sync; rows carry no counters.
const ROW_SYNCED_MESSAGE: &str = "Product synced ✅";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SyncAllClicked { label, width } => {
            // Re-entrancy guard: an already-disabled control swallows the
            // activation so exactly one request goes out per visible click.
            if state.is_control_engaged(ControlId::SyncAll) {
                return (state, Vec::new());
            }
            state.engage_control(ControlId::SyncAll, label, width);
            state.set_phase(Phase::AwaitingTerminal);
            state.show_progress(0, "");
            vec![Effect::StartPolling, Effect::StartSync]
        }
        Msg::LegacyFormSubmitted => {
            // The browser navigates away after this; no terminal response is
            // awaited in-process. The poller alone, observing idle once the
            // server finishes, winds itself down.
            state.show_progress(0, "");
            if state.phase() == Phase::Idle {
                state.set_phase(Phase::Polling);
            }
            vec![Effect::StartPolling]
        }
        Msg::RowSyncClicked {
            product_id,
            label,
            width,
        } => {
            let control = ControlId::Row(product_id);
            if state.is_control_engaged(control) {
                return (state, Vec::new());
            }
            // Short-lived per-item update: the shared poller and progress
            // indicator are never touched.
            state.engage_control(control, label, width);
            vec![Effect::StartItemSync { product_id }]
        }
        Msg::SyncAllFinished { result } => {
            state.set_phase(Phase::Idle);
            match result {
                Ok(summary) => {
                    state.set_control_label(ControlId::SyncAll, compose_summary(&summary));
                    state.force_progress_complete();
                    vec![
                        Effect::StopPolling {
                            policy: StopPolicy::AfterGrace,
                        },
                        Effect::HoldRestore {
                            control: ControlId::SyncAll,
                        },
                    ]
                }
                Err(message) => {
                    // Failure restores the control synchronously, no hold.
                    state.release_control(ControlId::SyncAll);
                    state.hide_progress();
                    vec![
                        Effect::ShowAlert { message },
                        Effect::StopPolling {
                            policy: StopPolicy::Immediate,
                        },
                    ]
                }
            }
        }
        Msg::RowSyncFinished { product_id, result } => {
            let control = ControlId::Row(product_id);
            match result {
                Ok(()) => {
                    state.set_control_label(control, ROW_SYNCED_MESSAGE.to_string());
                    vec![Effect::HoldRestore { control }]
                }
                Err(message) => {
                    state.release_control(control);
                    vec![Effect::ShowAlert { message }]
                }
            }
        }
        Msg::ProgressChecked { status, progress } => {
            if status != IDLE_STATUS && progress > 0 {
                // Latest reading wins, verbatim. The server is the sole
                // source of truth and is assumed monotonic.
                state.show_progress(progress, &status);
                Vec::new()
            } else if state.phase() == Phase::AwaitingTerminal {
                // The triggering request is still outstanding; an early idle
                // reading means the server has not persisted "in progress"
                // yet. Polling must survive it.
                Vec::new()
            } else {
                if state.phase() == Phase::Polling {
                    state.set_phase(Phase::Idle);
                }
                state.hide_progress();
                vec![Effect::StopPolling {
                    policy: StopPolicy::Immediate,
                }]
            }
        }
        Msg::RestoreElapsed { control } => {
            state.release_control(control);
            if control == ControlId::SyncAll {
                state.hide_progress();
            }
            Vec::new()
        }
        Msg::QuickEditSubmitted {
            product_id,
            field,
            value,
        } => vec![Effect::SubmitQuickEdit {
            product_id,
            field,
            value,
        }],
        Msg::QuickEditFinished { result, .. } => match result {
            Ok(Some(message)) => vec![Effect::ShowNotice { message }],
            Ok(None) => Vec::new(),
            Err(message) => vec![Effect::ShowAlert { message }],
        },
        Msg::TabSelected { name } => {
            state.set_active_tab(name.clone());
            vec![Effect::PersistActiveTab { name }]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Composes the bulk-sync terminal message from whichever counters are
/// present, in fixed order, with no trailing comma.
fn compose_summary(summary: &SyncSummary) -> String {
    let mut parts = Vec::new();
    if let Some(n) = summary.created {
        parts.push(format!("{n} created"));
    }
    if let Some(n) = summary.updated {
        parts.push(format!("{n} updated"));
    }
    if let Some(n) = summary.errors {
        parts.push(format!("{n} errors"));
    }
    if let Some(n) = summary.orphans_zeroed {
        parts.push(format!("{n} orphans zeroed"));
    }
    if parts.is_empty() {
        "Completed! ✅".to_string()
    } else {
        format!("Done: {} ✅", parts.join(", "))
    }
}
