use crate::enforcement::domain::{
    ArtifactCoordinate, DeclaredDependency, DependencyNode, RemoteRepository, Scope,
};
use crate::ports::outbound::DependencyGraphBuilder;
use crate::shared::error::EnforceError;
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum manifest size for security (16 MB)
const MAX_MANIFEST_SIZE: u64 = 16 * 1024 * 1024;

/// On-disk schema of the resolution manifest exported by the host build.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawManifest {
    project: String,
    #[serde(default)]
    repositories: Vec<RawRepository>,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
    dependency_tree: RawNode,
}

#[derive(Debug, Deserialize)]
struct RawRepository {
    id: String,
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDependency {
    #[serde(default)]
    group_id: Option<String>,
    #[serde(default)]
    artifact_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    system_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(default)]
    scope: Option<Scope>,
    #[serde(default)]
    children: Vec<RawNode>,
}

/// ManifestReader adapter for the JSON resolution manifest
///
/// The manifest is the host build's snapshot of everything the enforcement
/// core consumes: the project name, the remote repositories, the declared
/// dependency list and the dependency tree. Root-to-node trails are computed
/// while the raw tree is converted, so graph nodes carry them ready-made.
#[derive(Debug)]
pub struct ManifestReader {
    project: String,
    repositories: Vec<RemoteRepository>,
    declared_dependencies: Vec<DeclaredDependency>,
    tree: DependencyNode,
}

impl ManifestReader {
    /// Loads and parses a manifest from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EnforceError::ManifestNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No manifest at \"{}\".\n   \
                     Export a dependency resolution manifest from your build and pass it with the --manifest option.",
                    path.display()
                ),
            }
            .into());
        }

        let content = safe_read_file(path)?;
        let raw: RawManifest =
            serde_json::from_str(&content).map_err(|e| EnforceError::ManifestParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let tree = convert_node(raw.dependency_tree, &[]);
        let repositories = raw
            .repositories
            .into_iter()
            .map(|r| RemoteRepository::new(r.id, r.url))
            .collect();
        let declared_dependencies = raw
            .dependencies
            .into_iter()
            .map(|d| DeclaredDependency::new(d.group_id, d.artifact_id, d.version, d.system_path))
            .collect();

        Ok(Self {
            project: raw.project,
            repositories,
            declared_dependencies,
            tree,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project
    }

    pub fn repositories(&self) -> &[RemoteRepository] {
        &self.repositories
    }

    pub fn declared_dependencies(&self) -> &[DeclaredDependency] {
        &self.declared_dependencies
    }
}

impl DependencyGraphBuilder for ManifestReader {
    fn build_dependency_graph(&self, _project_name: &str) -> Result<DependencyNode> {
        Ok(self.tree.clone())
    }
}

/// Safely read a file with security checks:
/// - Reject symbolic links
/// - Check file size limits
/// - Validate file is a regular file
fn safe_read_file(path: &Path) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read manifest metadata: {}", e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    let file_size = metadata.len();
    if file_size > MAX_MANIFEST_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            MAX_MANIFEST_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| {
        EnforceError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

fn convert_node(raw: RawNode, ancestor_trail: &[String]) -> DependencyNode {
    let coordinate = ArtifactCoordinate::new(raw.group_id, raw.artifact_id, raw.version);
    let mut trail = ancestor_trail.to_vec();
    trail.push(coordinate.to_string());
    let children = raw
        .children
        .into_iter()
        .map(|child| convert_node(child, &trail))
        .collect();
    DependencyNode::new(coordinate, raw.scope, trail, children)
}
