use crate::errors::SubmitError;
use crate::models::{SavePayload, SaveResponse};
use crate::notify::Notifier;
use crate::table::Table;
use reqwest::Client;
use tracing::{debug, error};

pub const SAVE_PATH: &str = "/save_productivity";

impl SavePayload {
    pub fn from_table(department: &str, table: &Table) -> Self {
        Self {
            department: department.to_string(),
            entries: table.records(),
        }
    }
}

/// Posts table snapshots to the productivity backend.
///
/// No retries, no timeout and no deduplication: two saves are two
/// independent requests.
#[derive(Debug, Clone)]
pub struct SubmitClient {
    http: Client,
    endpoint: String,
}

impl SubmitClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}{SAVE_PATH}", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one payload and returns the backend's `message`.
    ///
    /// The HTTP status is not inspected; a body of the right shape counts
    /// as an answer either way.
    pub async fn send(&self, payload: &SavePayload) -> Result<String, SubmitError> {
        let transport = |source: reqwest::Error| SubmitError::Transport {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        debug!(status = %response.status(), entries = payload.entries.len(), "save response");

        let body = response.bytes().await.map_err(transport)?;
        let parsed: SaveResponse =
            serde_json::from_slice(&body).map_err(|source| SubmitError::MalformedResponse {
                url: self.endpoint.clone(),
                source,
            })?;
        Ok(parsed.message)
    }

    /// Saves one table snapshot and hands the reply to `notifier`.
    ///
    /// Failures are logged and swallowed; the notifier only ever sees a
    /// message the backend actually returned.
    pub async fn save<N>(&self, payload: &SavePayload, notifier: &N)
    where
        N: Notifier + ?Sized,
    {
        match self.send(payload).await {
            Ok(message) => notifier.notify(&message),
            Err(err) => error!("failed to save productivity entries: {err}"),
        }
    }
}
