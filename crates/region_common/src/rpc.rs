//! Wire types shared between regiond and regionctl.

use serde::{Deserialize, Serialize};

/// The (identifier, entity, node) triple selecting one node's data within
/// the storage tree.
///
/// The tokens are opaque; they carry no meaning here beyond naming path
/// segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeCoordinates {
    pub identifier: String,
    pub entity: String,
    pub node: String,
}

impl NodeCoordinates {
    pub fn new(
        identifier: impl Into<String>,
        entity: impl Into<String>,
        node: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            entity: entity.into(),
            node: node.into(),
        }
    }
}

/// Inbound request parameters as an open key/value map.
///
/// Only key presence is ever inspected; values pass through untouched.
pub type RequestDescriptor = serde_json::Map<String, serde_json::Value>;

/// Response for `GET /v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
