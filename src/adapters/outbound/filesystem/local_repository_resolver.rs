use crate::enforcement::domain::{ArtifactCoordinate, RemoteRepository};
use crate::ports::outbound::{ArtifactResolver, ResolvedArtifact};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// LocalRepositoryResolver adapter over a Maven-layout artifact repository
///
/// Resolves `group:artifact:version` to
/// `<root>/<group as dirs>/<artifact>/<version>/<artifact>-<version>.jar`.
/// Remote repositories are accepted for port compatibility but not
/// consulted: this adapter serves artifacts the host build has already
/// downloaded. An absent jar is reported through `resolved = false`, never
/// as an error.
pub struct LocalRepositoryResolver {
    root: PathBuf,
}

impl LocalRepositoryResolver {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn artifact_dir(&self, coordinate: &ArtifactCoordinate) -> PathBuf {
        self.root
            .join(coordinate.group_id().replace('.', "/"))
            .join(coordinate.artifact_id())
    }

    /// Version directories present for this artifact, sorted. Diagnostic
    /// only; an unreadable directory just yields an empty list.
    fn available_versions(&self, artifact_dir: &Path) -> Vec<String> {
        let Ok(entries) = fs::read_dir(artifact_dir) else {
            return Vec::new();
        };
        let mut versions: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        versions.sort();
        versions
    }
}

impl ArtifactResolver for LocalRepositoryResolver {
    fn resolve(
        &self,
        _repositories: &[RemoteRepository],
        coordinate: &ArtifactCoordinate,
    ) -> Result<ResolvedArtifact> {
        let artifact_dir = self.artifact_dir(coordinate);
        let archive_path = artifact_dir.join(coordinate.version()).join(format!(
            "{}-{}.jar",
            coordinate.artifact_id(),
            coordinate.version()
        ));
        let resolved = archive_path.is_file();

        Ok(ResolvedArtifact {
            coordinate: coordinate.clone(),
            available_versions: self.available_versions(&artifact_dir),
            archive_path,
            resolved,
        })
    }
}
