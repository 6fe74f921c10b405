#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User activated the bulk "Sync now" button. The shell snapshots the
    /// control's current label and pixel width so it can be restored later.
    SyncAllClicked { label: String, width: u32 },
    /// User submitted the legacy full-page sync form. The response arrives
    /// via a page reload, so no terminal message is awaited in-process.
    LegacyFormSubmitted,
    /// User activated the per-row sync button for one product.
    RowSyncClicked {
        product_id: crate::ProductId,
        label: String,
        width: u32,
    },
    /// Terminal outcome of the bulk sync request. `Err` carries opaque
    /// display text (server message or transport error string).
    SyncAllFinished {
        result: Result<crate::SyncSummary, String>,
    },
    /// Terminal outcome of a per-row sync request.
    RowSyncFinished {
        product_id: crate::ProductId,
        result: Result<(), String>,
    },
    /// One poll tick observed the server's job status.
    ProgressChecked { status: String, progress: u8 },
    /// The post-success hold elapsed; restore the control.
    RestoreElapsed { control: crate::ControlId },
    /// User committed an inline quick edit on one row.
    QuickEditSubmitted {
        product_id: crate::ProductId,
        field: String,
        value: String,
    },
    /// Terminal outcome of a quick-edit request; `Ok` carries the optional
    /// server-provided notice text.
    QuickEditFinished {
        product_id: crate::ProductId,
        result: Result<Option<String>, String>,
    },
    /// User switched admin tabs.
    TabSelected { name: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
