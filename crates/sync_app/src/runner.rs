use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use client_logging::{client_error, client_info, client_warn};
use sync_client::{ClientEvent, ClientHandle, SyncReport};
use sync_core::{Effect, Msg, StopPolicy, SyncSummary};

/// Grace window before the poller stops after a successful terminal
/// response, keeping the 100% state visible.
pub const STOP_GRACE: Duration = Duration::from_millis(2500);

/// Hold before a control showing its terminal message is restored.
pub const RESTORE_HOLD: Duration = Duration::from_secs(3);

/// Host surface for terminal messages. The async adapters surface errors
/// through a blocking alert; where the host has no dialog surface,
/// `LogNotifier` routes them to the log instead.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
    fn notice(&self, message: &str);
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn alert(&self, message: &str) {
        client_error!("alert: {}", message);
    }

    fn notice(&self, message: &str) {
        client_info!("notice: {}", message);
    }
}

pub struct EffectRunner {
    client: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
    notifier: Arc<dyn Notifier>,
    prefs_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(
        client: ClientHandle,
        msg_tx: mpsc::Sender<Msg>,
        notifier: Arc<dyn Notifier>,
        prefs_dir: PathBuf,
    ) -> Self {
        let runner = Self {
            client,
            msg_tx,
            notifier,
            prefs_dir,
        };
        runner.spawn_event_loop();
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSync => {
                    client_info!("StartSync");
                    self.client.start_sync();
                }
                Effect::StartItemSync { product_id } => {
                    client_info!("StartItemSync product_id={}", product_id);
                    self.client.start_item_sync(product_id);
                }
                Effect::SubmitQuickEdit {
                    product_id,
                    field,
                    value,
                } => {
                    self.client.quick_edit(product_id, field, value);
                }
                Effect::StartPolling => {
                    self.client.start_polling();
                }
                Effect::StopPolling { policy } => match policy {
                    StopPolicy::Immediate => self.client.stop_polling(),
                    StopPolicy::AfterGrace => {
                        let client = self.client.clone();
                        thread::spawn(move || {
                            thread::sleep(STOP_GRACE);
                            client.stop_polling();
                        });
                    }
                },
                Effect::HoldRestore { control } => {
                    let msg_tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(RESTORE_HOLD);
                        let _ = msg_tx.send(Msg::RestoreElapsed { control });
                    });
                }
                Effect::ShowAlert { message } => {
                    self.notifier.alert(&message);
                }
                Effect::ShowNotice { message } => {
                    self.notifier.notice(&message);
                }
                Effect::PersistActiveTab { name } => {
                    crate::prefs::save_active_tab(&self.prefs_dir, &name);
                }
            }
        }
    }

    fn spawn_event_loop(&self) {
        let client = self.client.clone();
        let msg_tx = self.msg_tx.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                let msg = match event {
                    ClientEvent::Progress(status) => Msg::ProgressChecked {
                        status: status.status,
                        progress: status.progress,
                    },
                    ClientEvent::SyncCompleted { result } => Msg::SyncAllFinished {
                        result: match result {
                            Ok(report) => Ok(map_report(report)),
                            Err(failure) => {
                                client_warn!("Sync failed: {}", failure);
                                Err(failure.message)
                            }
                        },
                    },
                    ClientEvent::ItemSyncCompleted { product_id, result } => {
                        Msg::RowSyncFinished {
                            product_id,
                            result: match result {
                                Ok(_) => Ok(()),
                                Err(failure) => {
                                    client_warn!(
                                        "Item sync {} failed: {}",
                                        product_id,
                                        failure
                                    );
                                    Err(failure.message)
                                }
                            },
                        }
                    }
                    ClientEvent::QuickEditCompleted { product_id, result } => {
                        Msg::QuickEditFinished {
                            product_id,
                            result: result
                                .map(|outcome| outcome.message)
                                .map_err(|failure| failure.message),
                        }
                    }
                };
                if msg_tx.send(msg).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_report(report: SyncReport) -> SyncSummary {
    SyncSummary {
        created: report.created,
        updated: report.updated,
        errors: report.errors,
        orphans_zeroed: report.orphans_zeroed,
        message: report.message,
    }
}
