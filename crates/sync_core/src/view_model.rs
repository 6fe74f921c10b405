use crate::{ControlId, Phase};

/// Shared progress indicator. The percentage is written verbatim from the
/// latest server reading; no smoothing or monotonicity enforcement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressView {
    pub visible: bool,
    pub percent: u8,
    pub status: String,
}

/// A control the core currently manages: its trigger fired and the
/// terminal render has not completed. Managed controls are disabled;
/// everything else is rendered by the host with its own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlView {
    pub control: ControlId,
    pub label: String,
    pub disabled: bool,
    /// Label snapshotted at trigger time; the host writes it back when the
    /// control leaves the managed set.
    pub original_label: String,
    /// Pixel width pinned at trigger time to prevent layout shift.
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub progress: ProgressView,
    pub controls: Vec<ControlView>,
    pub active_tab: Option<String>,
    pub dirty: bool,
}
