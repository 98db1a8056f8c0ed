//! HTTP client for the protocol service's REST endpoints.
//!
//! The service owns persistence. This client only moves prepared protocols
//! in and out of it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;
use triagem_core::Protocol;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("protocol {0} has no id; create it before updating")]
    MissingId(String),
}

/// Client for the protocol service's `/api/protocols` resource.
pub struct ProtocolClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    since: Option<String>,
}

impl ProtocolClient {
    /// Create a client for the given service base URL.
    ///
    /// `base_url` should be like `http://localhost:3001` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn protocols_url(&self) -> String {
        format!("{}/api/protocols", self.base_url)
    }

    fn protocol_url(&self, id: &str) -> String {
        format!("{}/api/protocols/{}", self.base_url, id)
    }

    /// Store a new protocol. Returns the record as the service saved it,
    /// with its `id` and `createdAt` filled in.
    pub async fn create_protocol(&self, protocol: &Protocol) -> Result<Protocol, SyncError> {
        let url = self.protocols_url();
        info!(
            url = %url,
            process_number = %protocol.process_number,
            assigned_to = protocol.assigned_to.as_deref().unwrap_or("robot"),
            "creating protocol"
        );
        let resp = self.client.post(&url).json(protocol).send().await?;
        let created: Protocol = read_json(resp).await?;
        info!(id = created.id.as_deref().unwrap_or(""), "protocol created");
        Ok(created)
    }

    /// Replace an existing protocol, e.g. after a status change or a
    /// re-route on resubmission.
    pub async fn update_protocol(&self, protocol: &Protocol) -> Result<Protocol, SyncError> {
        let id = protocol
            .id
            .as_deref()
            .ok_or_else(|| SyncError::MissingId(protocol.process_number.clone()))?;
        let url = self.protocol_url(id);

        info!(url = %url, status = %protocol.status, "updating protocol");
        let resp = self.client.put(&url).json(protocol).send().await?;
        read_json(resp).await
    }

    /// List protocols, optionally only those created after `since`.
    pub async fn list_protocols(
        &self,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Protocol>, SyncError> {
        let url = self.protocols_url();
        let query = ListQuery {
            since: since.map(|ts| ts.to_rfc3339()),
        };

        info!(url = %url, since = ?query.since, "listing protocols");
        let resp = self.client.get(&url).query(&query).send().await?;
        let protocols: Vec<Protocol> = read_json(resp).await?;
        info!(count = protocols.len(), "listed protocols");
        Ok(protocols)
    }
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SyncError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(SyncError::Server {
            status: status.as_u16(),
            body,
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
