//! HTTP client for communicating with regiond.

use anyhow::{anyhow, Result};
use region_common::{HealthResponse, NodeCoordinates};
use serde_json::json;

/// Client for the regiond HTTP API
pub struct DaemonClient {
    base_url: String,
    http: reqwest::Client,
}

impl DaemonClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/v1/health", self.base_url);
        let response = self.http.get(&url).send().await.map_err(|e| {
            anyhow!(
                "Region daemon unavailable at {}: {}\n\
                 Is regiond running?",
                self.base_url,
                e
            )
        })?;

        Ok(response.json().await?)
    }

    /// Fetch the region document for one node.
    ///
    /// Non-200 statuses become operator-readable errors; the daemon keeps
    /// failure detail in its own log.
    pub async fn regions(&self, coords: &NodeCoordinates) -> Result<serde_json::Value> {
        let url = format!(
            "{}/v1/regions/{}/{}/{}",
            self.base_url, coords.identifier, coords.entity, coords.node
        );

        let response = self
            .http
            .post(&url)
            .json(&json!({ "regions": true }))
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Region daemon unavailable at {}: {}\n\
                     Is regiond running?",
                    self.base_url,
                    e
                )
            })?;

        match response.status().as_u16() {
            200 => Ok(response.json().await?),
            404 => Err(anyhow!(
                "No region data recorded for {}/{}/{}",
                coords.identifier,
                coords.entity,
                coords.node
            )),
            400 => Err(anyhow!("Daemon rejected the request as malformed")),
            500 => Err(anyhow!(
                "Daemon could not read the region document; check its log for the cause"
            )),
            other => Err(anyhow!("Unexpected status {} from daemon", other)),
        }
    }
}
