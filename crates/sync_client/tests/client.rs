use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use sync_client::{
    ClientEvent, ClientHandle, FailureKind, JobStatus, PollerSettings, QuickEditOutcome,
    SyncEndpoint, SyncFailure, SyncReport,
};

struct StubEndpoint {
    sync_result: Mutex<Option<Result<SyncReport, SyncFailure>>>,
}

#[async_trait::async_trait]
impl SyncEndpoint for StubEndpoint {
    async fn start_sync(&self) -> Result<SyncReport, SyncFailure> {
        self.sync_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(SyncReport::default()))
    }

    async fn start_item_sync(&self, _product_id: u64) -> Result<SyncReport, SyncFailure> {
        Ok(SyncReport {
            updated: Some(1),
            ..SyncReport::default()
        })
    }

    async fn query_progress(&self) -> Result<JobStatus, SyncFailure> {
        Ok(JobStatus {
            status: "running".to_string(),
            progress: 80,
        })
    }

    async fn quick_edit(
        &self,
        _product_id: u64,
        _field: &str,
        _value: &str,
    ) -> Result<QuickEditOutcome, SyncFailure> {
        Ok(QuickEditOutcome {
            message: Some("Saved".to_string()),
        })
    }
}

fn wait_for_event(handle: &ClientHandle) -> ClientEvent {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        if let Some(event) = handle.try_recv() {
            return event;
        }
        assert!(Instant::now() < deadline, "timed out waiting for event");
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn stub_handle(sync_result: Result<SyncReport, SyncFailure>) -> ClientHandle {
    let endpoint = Arc::new(StubEndpoint {
        sync_result: Mutex::new(Some(sync_result)),
    });
    ClientHandle::new(
        endpoint,
        PollerSettings {
            period: Duration::from_millis(20),
        },
    )
}

#[test]
fn sync_completion_flows_back_as_an_event() {
    let handle = stub_handle(Ok(SyncReport {
        created: Some(5),
        ..SyncReport::default()
    }));

    handle.start_sync();
    let event = wait_for_event(&handle);
    match event {
        ClientEvent::SyncCompleted { result } => {
            assert_eq!(result.expect("sync ok").created, Some(5));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn sync_failure_flows_back_with_its_message() {
    let handle = stub_handle(Err(SyncFailure {
        kind: FailureKind::Rejected,
        message: "catalog locked".to_string(),
    }));

    handle.start_sync();
    match wait_for_event(&handle) {
        ClientEvent::SyncCompleted { result } => {
            let err = result.unwrap_err();
            assert_eq!(err.message, "catalog locked");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn polling_emits_progress_until_stopped() {
    let handle = stub_handle(Ok(SyncReport::default()));

    handle.start_polling();
    match wait_for_event(&handle) {
        ClientEvent::Progress(status) => {
            assert_eq!(status.progress, 80);
            assert!(!status.is_idle());
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Stop, drain, and verify no further observations arrive.
    handle.stop_polling();
    std::thread::sleep(Duration::from_millis(100));
    while handle.try_recv().is_some() {}
    std::thread::sleep(Duration::from_millis(100));
    assert!(handle.try_recv().is_none());
}

#[test]
fn quick_edit_completion_carries_the_notice() {
    let handle = stub_handle(Ok(SyncReport::default()));

    handle.quick_edit(9, "stock", "12");
    match wait_for_event(&handle) {
        ClientEvent::QuickEditCompleted { product_id, result } => {
            assert_eq!(product_id, 9);
            assert_eq!(result.expect("ok").message.as_deref(), Some("Saved"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
}
