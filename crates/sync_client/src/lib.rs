//! Sync client: transport and polling against the remote job endpoint.
mod client;
mod endpoint;
mod poller;
mod types;

pub use client::ClientHandle;
pub use endpoint::{EndpointSettings, HttpEndpoint, SyncEndpoint};
pub use poller::{PollerSettings, ProgressPoller};
pub use types::{ClientEvent, FailureKind, JobStatus, QuickEditOutcome, SyncFailure, SyncReport};
