//! Sync core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, StopPolicy};
pub use msg::Msg;
pub use state::{AppState, ControlId, Phase, ProductId, SyncSummary, IDLE_STATUS, SYNCING_LABEL};
pub use update::update;
pub use view_model::{AppViewModel, ControlView, ProgressView};
