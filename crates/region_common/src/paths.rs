//! Storage path resolution for the region telemetry tree.
//!
//! Layout, fixed per node:
//! `<storage_root>/<identifier>/system/<entity>/<node>/nvgpu/regions.json`

use crate::error::LookupError;
use crate::rpc::NodeCoordinates;
use std::path::{Component, Path, PathBuf};

/// File name of the per-node region document.
pub const REGIONS_FILENAME: &str = "regions.json";

/// Module directory under each node.
pub const MODULE_DIR: &str = "nvgpu";

const SYSTEM_DIR: &str = "system";

/// Resolve the on-disk location of one node's region document.
///
/// Coordinates come from the caller untrusted. Each must be exactly one
/// plain path segment; anything else (empty, `..`, absolute, embedded
/// separator) rejects the lookup before any path is built.
pub fn region_data_path(
    storage_root: &Path,
    coords: &NodeCoordinates,
) -> Result<PathBuf, LookupError> {
    for segment in [&coords.identifier, &coords.entity, &coords.node] {
        ensure_single_segment(segment)?;
    }

    Ok(storage_root
        .join(&coords.identifier)
        .join(SYSTEM_DIR)
        .join(&coords.entity)
        .join(&coords.node)
        .join(MODULE_DIR)
        .join(REGIONS_FILENAME))
}

/// A safe segment parses as exactly one `Component::Normal`.
fn ensure_single_segment(segment: &str) -> Result<(), LookupError> {
    let mut components = Path::new(segment).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(LookupError::UnsafeCoordinate(segment.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matches_template() {
        let coords = NodeCoordinates::new("abc", "gpu0", "node1");
        let path = region_data_path(Path::new("/srv/storage"), &coords).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/srv/storage/abc/system/gpu0/node1/nvgpu/regions.json")
        );
    }

    #[test]
    fn test_path_is_deterministic() {
        let coords = NodeCoordinates::new("site-a", "gpu1", "worker03");
        let root = Path::new("/data");
        let first = region_data_path(root, &coords).unwrap();
        for _ in 0..3 {
            assert_eq!(region_data_path(root, &coords).unwrap(), first);
        }
    }

    #[test]
    fn test_parent_traversal_is_rejected() {
        let coords = NodeCoordinates::new("..", "gpu0", "node1");
        let err = region_data_path(Path::new("/srv/storage"), &coords).unwrap_err();
        assert!(matches!(err, LookupError::UnsafeCoordinate(_)));
    }

    #[test]
    fn test_embedded_separator_is_rejected() {
        let coords = NodeCoordinates::new("abc", "gpu0/../../etc", "node1");
        let err = region_data_path(Path::new("/srv/storage"), &coords).unwrap_err();
        assert!(matches!(err, LookupError::UnsafeCoordinate(_)));
    }

    #[test]
    fn test_empty_and_absolute_segments_are_rejected() {
        for bad in ["", "/etc", "."] {
            let coords = NodeCoordinates::new("abc", bad, "node1");
            assert!(region_data_path(Path::new("/srv/storage"), &coords).is_err());
        }
    }
}
