//! Region Common - shared types for the region telemetry service
//!
//! Configuration, the lookup error taxonomy, wire types, and storage path
//! resolution used by both the daemon and the control CLI.

pub mod config;
pub mod error;
pub mod paths;
pub mod rpc;

pub use config::DaemonConfig;
pub use error::LookupError;
pub use paths::region_data_path;
pub use rpc::{HealthResponse, NodeCoordinates, RequestDescriptor};
