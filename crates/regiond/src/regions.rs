//! Region telemetry lookup.
//!
//! One lookup is a strictly linear pipeline:
//! - Validate the request shape (no file-system access before this passes)
//! - Resolve the document path from the coordinates
//! - Read and parse the document
//! - Respond with the canonical JSON text
//!
//! Any step short-circuits to a terminal status. Nothing persists across
//! calls and nothing in the tree is ever written from here.

use region_common::{region_data_path, LookupError, NodeCoordinates, RequestDescriptor};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Request key that selects region data.
const REGIONS_KEY: &str = "regions";

/// Read-only accessor over one storage tree.
///
/// The root is explicit so accessors over different trees can coexist in
/// one process.
#[derive(Debug, Clone)]
pub struct RegionDataAccessor {
    storage_root: PathBuf,
}

impl RegionDataAccessor {
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
        }
    }

    pub fn storage_root(&self) -> &Path {
        &self.storage_root
    }

    /// Look up the region document for one node.
    ///
    /// Only presence of the `regions` key is inspected on the request; its
    /// value is ignored. The document is re-serialized before return, so
    /// the emitted body is valid JSON regardless of how the file was
    /// formatted on disk, and a corrupt file is caught here rather than
    /// forwarded.
    pub fn lookup(
        &self,
        coords: &NodeCoordinates,
        request: &RequestDescriptor,
    ) -> Result<String, LookupError> {
        if !request.contains_key(REGIONS_KEY) {
            return Err(LookupError::MissingRegionsKey);
        }

        let path = region_data_path(&self.storage_root, coords)?;

        if !path.exists() {
            return Err(LookupError::NotFound(path));
        }

        // Not atomic with the existence check; a document removed in
        // between surfaces as a read error, not a second not-found.
        let raw = fs::read_to_string(&path)?;
        let document: serde_json::Value = serde_json::from_str(&raw)?;

        Ok(document.to_string())
    }

    /// Transport-ready form of [`Self::lookup`]: a `(body, status)` pair
    /// with an empty body on every non-200 outcome. Unexpected failures
    /// are traced here in full before being collapsed to 500.
    pub fn respond(&self, coords: &NodeCoordinates, request: &RequestDescriptor) -> (String, u16) {
        match self.lookup(coords, request) {
            Ok(body) => (body, 200),
            Err(err) => {
                if err.is_internal() {
                    error!(
                        "Region lookup failed for {}/{}/{}: {}",
                        coords.identifier, coords.entity, coords.node, err
                    );
                } else {
                    debug!(
                        "Region lookup for {}/{}/{} returned {}: {}",
                        coords.identifier,
                        coords.entity,
                        coords.node,
                        err.status(),
                        err
                    );
                }
                (String::new(), err.status())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn regions_request() -> RequestDescriptor {
        let mut request = RequestDescriptor::new();
        request.insert("regions".to_string(), serde_json::Value::Bool(true));
        request
    }

    fn write_document(root: &Path, coords: &NodeCoordinates, content: &str) {
        let path = region_data_path(root, coords).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_success_returns_canonical_document() {
        let dir = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(dir.path(), &coords, "{\"region0\": {\"used\": 10}}");

        let accessor = RegionDataAccessor::new(dir.path());
        let (body, status) = accessor.respond(&coords, &regions_request());

        assert_eq!(status, 200);
        assert_eq!(body, "{\"region0\":{\"used\":10}}");
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(
            dir.path(),
            &coords,
            "{\n  \"region0\": {\"start\": 100, \"length\": 2000},\n  \"region1\": {\"start\": 2100, \"length\": 50}\n}",
        );

        let accessor = RegionDataAccessor::new(dir.path());
        let first = accessor.lookup(&coords, &regions_request()).unwrap();

        // Re-canonicalizing the emitted body changes nothing.
        let reparsed: serde_json::Value = serde_json::from_str(&first).unwrap();
        assert_eq!(reparsed.to_string(), first);
    }

    #[test]
    fn test_missing_key_wins_over_everything() {
        let dir = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(dir.path(), &coords, "{\"region0\": {}}");

        let accessor = RegionDataAccessor::new(dir.path());

        // Empty descriptor
        assert_eq!(accessor.respond(&coords, &RequestDescriptor::new()), (String::new(), 400));

        // Descriptor with unrelated keys, file present
        let mut request = RequestDescriptor::new();
        request.insert("summary".to_string(), serde_json::Value::Bool(true));
        assert_eq!(accessor.respond(&coords, &request), (String::new(), 400));
    }

    #[test]
    fn test_regions_key_value_is_ignored() {
        let dir = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(dir.path(), &coords, "{}");

        let accessor = RegionDataAccessor::new(dir.path());
        let mut request = RequestDescriptor::new();
        request.insert("regions".to_string(), serde_json::Value::Null);

        let (body, status) = accessor.respond(&coords, &request);
        assert_eq!(status, 200);
        assert_eq!(body, "{}");
    }

    #[test]
    fn test_missing_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        let accessor = RegionDataAccessor::new(dir.path());
        let coords = NodeCoordinates::new("abc", "gpu0", "node9");

        assert_eq!(accessor.respond(&coords, &regions_request()), (String::new(), 404));
    }

    #[test]
    fn test_corrupt_document_is_server_error() {
        let dir = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(dir.path(), &coords, "{not valid json");

        let accessor = RegionDataAccessor::new(dir.path());
        let (body, status) = accessor.respond(&coords, &regions_request());

        assert_eq!(status, 500);
        assert!(body.is_empty());
    }

    #[test]
    fn test_truncated_document_is_server_error() {
        let dir = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(dir.path(), &coords, "{\"region0\": {\"used\":");

        let accessor = RegionDataAccessor::new(dir.path());
        let err = accessor.lookup(&coords, &regions_request()).unwrap_err();
        assert!(matches!(err, LookupError::Json(_)));
    }

    #[test]
    fn test_traversal_coordinate_is_rejected_before_io() {
        let dir = TempDir::new().unwrap();
        let accessor = RegionDataAccessor::new(dir.path());
        let coords = NodeCoordinates::new("..", "gpu0", "node1");

        assert_eq!(accessor.respond(&coords, &regions_request()), (String::new(), 400));
    }

    #[test]
    fn test_accessors_with_distinct_roots_coexist() {
        let dir_a = TempDir::new().unwrap();
        let dir_b = TempDir::new().unwrap();
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        write_document(dir_a.path(), &coords, "{\"region0\": {\"used\": 1}}");
        write_document(dir_b.path(), &coords, "{\"region0\": {\"used\": 2}}");

        let accessor_a = RegionDataAccessor::new(dir_a.path());
        let accessor_b = RegionDataAccessor::new(dir_b.path());

        assert_eq!(
            accessor_a.lookup(&coords, &regions_request()).unwrap(),
            "{\"region0\":{\"used\":1}}"
        );
        assert_eq!(
            accessor_b.lookup(&coords, &regions_request()).unwrap(),
            "{\"region0\":{\"used\":2}}"
        );
    }
}
