//! Sync app shell: executes core effects against the client runtime, pumps
//! client events back into the state machine, and owns the host-side
//! concerns (logging, persisted UI preference).
mod logging;
mod prefs;
mod runner;

pub use logging::{initialize_logging, LogDestination};
pub use prefs::{load_active_tab, save_active_tab};
pub use runner::{EffectRunner, LogNotifier, Notifier, RESTORE_HOLD, STOP_GRACE};
