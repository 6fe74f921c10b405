#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the bulk job-start request (extended timeout; jobs may be large).
    StartSync,
    /// Issue a per-row job-start request for one product.
    StartItemSync { product_id: crate::ProductId },
    /// Issue a fire-and-forget quick-edit request.
    SubmitQuickEdit {
        product_id: crate::ProductId,
        field: String,
        value: String,
    },
    /// Start the shared progress poller (idempotent on the client side).
    StartPolling,
    /// Stop the shared progress poller.
    StopPolling { policy: StopPolicy },
    /// Hold the control in its terminal state, then send `Msg::RestoreElapsed`.
    HoldRestore { control: crate::ControlId },
    /// Surface a blocking error message to the user.
    ShowAlert { message: String },
    /// Surface a non-blocking informational message.
    ShowNotice { message: String },
    /// Persist the last-active tab name.
    PersistActiveTab { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopPolicy {
    /// Stop right away.
    Immediate,
    /// Stop after a short grace window so the 100% state stays visible.
    AfterGrace,
}
