use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use client_logging::client_error;

use crate::poller::{PollerSettings, ProgressPoller};
use crate::{ClientEvent, SyncEndpoint};

enum ClientCommand {
    StartSync,
    StartItemSync { product_id: u64 },
    QuickEdit { product_id: u64, field: String, value: String },
    StartPolling,
    StopPolling,
}

/// Handle to the client runtime: a dedicated thread owning a tokio runtime,
/// fed by a command channel and drained through an event channel. The
/// poller lives on that thread, so its state has exactly one owner.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(endpoint: Arc<dyn SyncEndpoint>, poll_settings: PollerSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_error!("Failed to start client runtime: {}", err);
                    return;
                }
            };
            let mut poller = ProgressPoller::new(
                endpoint.clone(),
                event_tx.clone(),
                poll_settings,
                runtime.handle().clone(),
            );

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::StartPolling => poller.start(),
                    ClientCommand::StopPolling => poller.stop(),
                    ClientCommand::StartSync => {
                        let endpoint = endpoint.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = endpoint.start_sync().await;
                            let _ = event_tx.send(ClientEvent::SyncCompleted { result });
                        });
                    }
                    ClientCommand::StartItemSync { product_id } => {
                        let endpoint = endpoint.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = endpoint.start_item_sync(product_id).await;
                            let _ = event_tx.send(ClientEvent::ItemSyncCompleted {
                                product_id,
                                result,
                            });
                        });
                    }
                    ClientCommand::QuickEdit {
                        product_id,
                        field,
                        value,
                    } => {
                        let endpoint = endpoint.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = endpoint.quick_edit(product_id, &field, &value).await;
                            let _ = event_tx.send(ClientEvent::QuickEditCompleted {
                                product_id,
                                result,
                            });
                        });
                    }
                }
            }
            poller.stop();
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn start_sync(&self) {
        let _ = self.cmd_tx.send(ClientCommand::StartSync);
    }

    pub fn start_item_sync(&self, product_id: u64) {
        let _ = self.cmd_tx.send(ClientCommand::StartItemSync { product_id });
    }

    pub fn quick_edit(&self, product_id: u64, field: impl Into<String>, value: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::QuickEdit {
            product_id,
            field: field.into(),
            value: value.into(),
        });
    }

    pub fn start_polling(&self) {
        let _ = self.cmd_tx.send(ClientCommand::StartPolling);
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(ClientCommand::StopPolling);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}
