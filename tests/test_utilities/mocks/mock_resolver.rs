use bytecode_guard::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock ArtifactResolver mapping coordinate strings to archive paths
///
/// Coordinates with no configured artifact resolve with `resolved = false`;
/// coordinates registered with `with_resolution_error` make the resolver
/// itself fail.
#[derive(Default)]
pub struct MockResolver {
    artifacts: HashMap<String, PathBuf>,
    failing: Vec<String>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, coordinate: &str, path: PathBuf) -> Self {
        self.artifacts.insert(coordinate.to_string(), path);
        self
    }

    pub fn with_resolution_error(mut self, coordinate: &str) -> Self {
        self.failing.push(coordinate.to_string());
        self
    }
}

impl ArtifactResolver for MockResolver {
    fn resolve(
        &self,
        _repositories: &[RemoteRepository],
        coordinate: &ArtifactCoordinate,
    ) -> Result<ResolvedArtifact> {
        let key = coordinate.to_string();
        if self.failing.contains(&key) {
            anyhow::bail!("Mock resolution failure for {}", key);
        }
        match self.artifacts.get(&key) {
            Some(path) => Ok(ResolvedArtifact {
                coordinate: coordinate.clone(),
                archive_path: path.clone(),
                available_versions: vec![],
                resolved: true,
            }),
            None => Ok(ResolvedArtifact {
                coordinate: coordinate.clone(),
                archive_path: PathBuf::from("/nonexistent"),
                available_versions: vec![],
                resolved: false,
            }),
        }
    }
}
