use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{FailureKind, JobStatus, QuickEditOutcome, SyncFailure, SyncReport};

/// Fallback shown when the server rejects a request without a message.
const GENERIC_FAILURE_MESSAGE: &str = "Unknown error";

#[derive(Debug, Clone)]
pub struct EndpointSettings {
    pub base_url: String,
    pub nonce: String,
    pub sync_action: String,
    pub progress_action: String,
    pub quick_edit_action: String,
    pub connect_timeout: Duration,
    /// Timeout for progress and quick-edit requests.
    pub query_timeout: Duration,
    /// Timeout for job-start requests; jobs may be large.
    pub start_timeout: Duration,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            nonce: String::new(),
            sync_action: "product_sync".to_string(),
            progress_action: "progress".to_string(),
            quick_edit_action: "quick_edit".to_string(),
            connect_timeout: Duration::from_secs(10),
            query_timeout: Duration::from_secs(30),
            start_timeout: Duration::from_secs(1800),
        }
    }
}

/// Seam between the coordinator plumbing and the remote job endpoint.
/// Tests substitute scripted implementations for the HTTP one.
#[async_trait::async_trait]
pub trait SyncEndpoint: Send + Sync {
    async fn start_sync(&self) -> Result<SyncReport, SyncFailure>;
    async fn start_item_sync(&self, product_id: u64) -> Result<SyncReport, SyncFailure>;
    async fn query_progress(&self) -> Result<JobStatus, SyncFailure>;
    async fn quick_edit(
        &self,
        product_id: u64,
        field: &str,
        value: &str,
    ) -> Result<QuickEditOutcome, SyncFailure>;
}

/// All endpoint responses share one envelope; `data` is absent on some
/// failures and on message-less successes.
#[derive(Debug, Deserialize)]
struct Envelope {
    success: bool,
    data: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    settings: EndpointSettings,
    /// Client with the extended job-start timeout.
    start_client: reqwest::Client,
    /// Client for short-lived progress and quick-edit requests.
    query_client: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(settings: EndpointSettings) -> Result<Self, SyncFailure> {
        let start_client = build_client(&settings, settings.start_timeout)?;
        let query_client = build_client(&settings, settings.query_timeout)?;
        Ok(Self {
            settings,
            start_client,
            query_client,
        })
    }

    async fn post<T: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        fields: &[(&str, String)],
    ) -> Result<T, SyncFailure> {
        let response = client
            .post(&self.settings.base_url)
            .form(fields)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SyncFailure::new(FailureKind::Transport, status.to_string()));
        }

        let envelope: Envelope = response
            .json()
            .await
            .map_err(|err| SyncFailure::new(FailureKind::InvalidResponse, err.to_string()))?;

        if !envelope.success {
            let message = envelope
                .data
                .as_ref()
                .and_then(|data| data.get("message"))
                .and_then(|value| value.as_str())
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string();
            return Err(SyncFailure::new(FailureKind::Rejected, message));
        }

        let data = envelope
            .data
            .unwrap_or_else(|| serde_json::Value::Object(Default::default()));
        serde_json::from_value(data)
            .map_err(|err| SyncFailure::new(FailureKind::InvalidResponse, err.to_string()))
    }

    fn base_fields(&self, action: &str) -> Vec<(&'static str, String)> {
        vec![
            ("action", action.to_string()),
            ("nonce", self.settings.nonce.clone()),
        ]
    }
}

#[async_trait::async_trait]
impl SyncEndpoint for HttpEndpoint {
    async fn start_sync(&self) -> Result<SyncReport, SyncFailure> {
        let fields = self.base_fields(&self.settings.sync_action);
        self.post(&self.start_client, &fields).await
    }

    async fn start_item_sync(&self, product_id: u64) -> Result<SyncReport, SyncFailure> {
        let mut fields = self.base_fields(&self.settings.sync_action);
        fields.push(("product_id", product_id.to_string()));
        self.post(&self.start_client, &fields).await
    }

    async fn query_progress(&self) -> Result<JobStatus, SyncFailure> {
        let fields = self.base_fields(&self.settings.progress_action);
        self.post(&self.query_client, &fields).await
    }

    async fn quick_edit(
        &self,
        product_id: u64,
        field: &str,
        value: &str,
    ) -> Result<QuickEditOutcome, SyncFailure> {
        let mut fields = self.base_fields(&self.settings.quick_edit_action);
        fields.push(("product_id", product_id.to_string()));
        fields.push(("field", field.to_string()));
        fields.push(("value", value.to_string()));
        self.post(&self.query_client, &fields).await
    }
}

fn build_client(
    settings: &EndpointSettings,
    timeout: Duration,
) -> Result<reqwest::Client, SyncFailure> {
    reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(timeout)
        .build()
        .map_err(|err| SyncFailure::new(FailureKind::Transport, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> SyncFailure {
    if err.is_timeout() {
        return SyncFailure::new(FailureKind::Timeout, err.to_string());
    }
    SyncFailure::new(FailureKind::Transport, err.to_string())
}
