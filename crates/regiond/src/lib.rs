//! Region Daemon - read-only HTTP access to captured GPU region telemetry
//!
//! Serves per-node region documents out of the on-disk telemetry tree.
//! The capture pipeline writes the tree; this daemon never does.

pub mod regions;
pub mod routes;
pub mod server;

pub use regions::RegionDataAccessor;
