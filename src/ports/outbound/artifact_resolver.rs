use crate::enforcement::domain::{ArtifactCoordinate, RemoteRepository};
use crate::shared::Result;
use std::path::PathBuf;

/// Outcome of resolving one coordinate against a repository context.
///
/// The effective coordinates may legitimately differ from the requested
/// ones (case-only differences, version ranges); callers must use these
/// values, not the request.
#[derive(Debug, Clone)]
pub struct ResolvedArtifact {
    pub coordinate: ArtifactCoordinate,
    pub archive_path: PathBuf,
    /// Versions known to exist for this artifact; diagnostic only.
    pub available_versions: Vec<String>,
    /// False when the resolver ran but could not produce the artifact.
    pub resolved: bool,
}

/// ArtifactResolver port for turning coordinates into concrete archive files
pub trait ArtifactResolver {
    /// Resolves a coordinate against the given remote repositories.
    ///
    /// # Errors
    /// Returns an error when the resolution machinery itself fails; an
    /// artifact that is merely absent is reported through
    /// `ResolvedArtifact::resolved` instead.
    fn resolve(
        &self,
        repositories: &[RemoteRepository],
        coordinate: &ArtifactCoordinate,
    ) -> Result<ResolvedArtifact>;
}
