use std::collections::BTreeMap;

use crate::view_model::{AppViewModel, ControlView, ProgressView};

pub type ProductId = u64;

/// Status label the server reports when no job is running.
pub const IDLE_STATUS: &str = "idle";

/// Label shown on a managed control while its request is outstanding.
pub const SYNCING_LABEL: &str = "Syncing…";

/// Identity of a UI control whose button lifecycle the core manages.
///
/// The legacy form is deliberately absent: it never gets disabled or
/// restored because the browser navigates away on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ControlId {
    SyncAll,
    Row(ProductId),
}

/// Coordinator phase. `AwaitingTerminal` means a client-triggered job is
/// still awaiting its terminal response; while in it, a poll tick that
/// observes `idle` must not stop the poller (the server may not have
/// persisted "in progress" yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Polling,
    AwaitingTerminal,
}

/// Optional result counters from a completed bulk sync. All fields are
/// optional on the wire; absent counters are simply skipped when the
/// terminal message is composed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncSummary {
    pub created: Option<u64>,
    pub updated: Option<u64>,
    pub errors: Option<u64>,
    pub orphans_zeroed: Option<u64>,
    pub message: Option<String>,
}

/// Per-control button state, created when a trigger fires and destroyed
/// when the terminal render completes and the control is restored. The
/// width snapshot stays pinned to keep the label swap from resizing the
/// control.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ControlState {
    original_label: String,
    original_width: u32,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ProgressIndicator {
    visible: bool,
    percent: u8,
    status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: Phase,
    controls: BTreeMap<ControlId, ControlState>,
    progress: ProgressIndicator,
    active_tab: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            progress: ProgressView {
                visible: self.progress.visible,
                percent: self.progress.percent,
                status: self.progress.status.clone(),
            },
            controls: self
                .controls
                .iter()
                .map(|(control, cs)| ControlView {
                    control: *control,
                    label: cs.label.clone(),
                    disabled: true,
                    original_label: cs.original_label.clone(),
                    width: cs.original_width,
                })
                .collect(),
            active_tab: self.active_tab.clone(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the dirty flag and clears it. The shell re-renders only
    /// when this returns true.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    /// Whether a trigger's control is currently disabled. This is the sole
    /// re-entrancy guard: per control, not global.
    pub(crate) fn is_control_engaged(&self, control: ControlId) -> bool {
        self.controls.contains_key(&control)
    }

    /// Disables a control, snapshotting its label and width.
    pub(crate) fn engage_control(&mut self, control: ControlId, label: String, width: u32) {
        self.controls.insert(
            control,
            ControlState {
                original_label: label,
                original_width: width,
                label: SYNCING_LABEL.to_string(),
            },
        );
        self.dirty = true;
    }

    /// Replaces the label shown on an engaged control (terminal message).
    pub(crate) fn set_control_label(&mut self, control: ControlId, label: String) {
        if let Some(cs) = self.controls.get_mut(&control) {
            cs.label = label;
            self.dirty = true;
        }
    }

    /// Destroys the button state; the host puts the snapshotted label and
    /// width back and renders the control with its own defaults again.
    pub(crate) fn release_control(&mut self, control: ControlId) {
        if self.controls.remove(&control).is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            self.dirty = true;
        }
    }

    pub(crate) fn show_progress(&mut self, percent: u8, status: &str) {
        self.progress.visible = true;
        self.progress.percent = percent;
        self.progress.status = status.to_string();
        self.dirty = true;
    }

    /// Forces the indicator to 100% without touching the status text.
    pub(crate) fn force_progress_complete(&mut self) {
        self.progress.visible = true;
        self.progress.percent = 100;
        self.dirty = true;
    }

    pub(crate) fn hide_progress(&mut self) {
        if self.progress.visible {
            self.progress = ProgressIndicator::default();
            self.dirty = true;
        }
    }

    pub(crate) fn set_active_tab(&mut self, name: String) {
        self.active_tab = Some(name);
        self.dirty = true;
    }
}
