use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use client_logging::{client_debug, client_trace};

use crate::{ClientEvent, SyncEndpoint};

#[derive(Debug, Clone)]
pub struct PollerSettings {
    pub period: Duration,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(1000),
        }
    }
}

/// Owns the recurring progress query. The task handle and active flag live
/// here and are mutated only by `start()`/`stop()`; single owner, no
/// module-level state.
pub struct ProgressPoller {
    endpoint: Arc<dyn SyncEndpoint>,
    events: mpsc::Sender<ClientEvent>,
    settings: PollerSettings,
    runtime: tokio::runtime::Handle,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl ProgressPoller {
    pub fn new(
        endpoint: Arc<dyn SyncEndpoint>,
        events: mpsc::Sender<ClientEvent>,
        settings: PollerSettings,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            endpoint,
            events,
            settings,
            runtime,
            task: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Idempotent: if a poll task is already running this is a no-op, so
    /// any trigger may call it without coordination.
    pub fn start(&mut self) {
        if self.is_active() {
            return;
        }
        let endpoint = self.endpoint.clone();
        let events = self.events.clone();
        let period = self.settings.period;
        self.task = Some(self.runtime.spawn(async move {
            let mut tick: u64 = 0;
            loop {
                tokio::time::sleep(period).await;
                tick += 1;
                client_logging::set_poll_tick(tick);
                match endpoint.query_progress().await {
                    Ok(status) => {
                        client_trace!(
                            "progress tick {} observed status={} progress={}",
                            client_logging::get_poll_tick(),
                            status.status,
                            status.progress
                        );
                        // Every observation is forwarded, idle included;
                        // the coordinator decides whether idle stops us.
                        if events.send(ClientEvent::Progress(status)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        // A failed tick is skipped, never surfaced; the
                        // next period retries implicitly.
                        client_debug!(
                            "progress tick {} skipped: {}",
                            client_logging::get_poll_tick(),
                            err
                        );
                    }
                }
            }
        }));
    }

    /// Idempotent: double-stop is a no-op.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for ProgressPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
