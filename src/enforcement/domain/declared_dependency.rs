use super::coordinate::eq_or_both_absent;
use super::ArtifactCoordinate;
use std::path::{Path, PathBuf};

/// A dependency as declared by the project itself.
///
/// Only system-scope resolution consults this list: a declared entry with a
/// system path is the sole source for the artifact file of a system-scope
/// graph node. Coordinate fields may be absent in the declaration.
#[derive(Debug, Clone, Default)]
pub struct DeclaredDependency {
    group_id: Option<String>,
    artifact_id: Option<String>,
    version: Option<String>,
    system_path: Option<PathBuf>,
}

impl DeclaredDependency {
    pub fn new(
        group_id: Option<String>,
        artifact_id: Option<String>,
        version: Option<String>,
        system_path: Option<PathBuf>,
    ) -> Self {
        Self {
            group_id,
            artifact_id,
            version,
            system_path,
        }
    }

    pub fn group_id(&self) -> Option<&str> {
        self.group_id.as_deref()
    }

    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn system_path(&self) -> Option<&Path> {
        self.system_path.as_deref()
    }

    /// True when every coordinate field matches the node's, with two absent
    /// values counting as equal and an absent value never matching a present
    /// one.
    pub fn matches(&self, coordinate: &ArtifactCoordinate) -> bool {
        eq_or_both_absent(self.artifact_id.as_deref(), Some(coordinate.artifact_id()))
            && eq_or_both_absent(self.group_id.as_deref(), Some(coordinate.group_id()))
            && eq_or_both_absent(self.version.as_deref(), Some(coordinate.version()))
    }
}
