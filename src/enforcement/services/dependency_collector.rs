use crate::enforcement::domain::{
    ArtifactCoordinate, DeclaredDependency, DependencyNode, DependencyReference,
    EnforcementSettings, ReferenceSet, RemoteRepository, Scope,
};
use crate::ports::outbound::{ArtifactResolver, DiagnosticLogger, ResolvedArtifact};

/// Result of walking a dependency tree: the flat deduplicated reference set
/// and whether any node anywhere failed to resolve.
#[derive(Debug)]
pub struct CollectionOutcome {
    pub references: ReferenceSet,
    pub resolution_failed: bool,
}

/// Walks a dependency tree depth-first, pruning excluded scopes and
/// resolving every surviving node to a concrete archive file.
///
/// System-scope nodes resolve through the project's declared dependency
/// list; everything else goes through the resolver capability. Failures are
/// accumulated, never short-circuited: the caller learns about them only
/// after every sibling and subtree has been visited.
pub struct DependencyCollector<'a, R: ArtifactResolver, L: DiagnosticLogger> {
    resolver: &'a R,
    logger: &'a L,
    settings: &'a EnforcementSettings,
    declared_dependencies: &'a [DeclaredDependency],
    repositories: &'a [RemoteRepository],
    project_name: &'a str,
}

impl<'a, R: ArtifactResolver, L: DiagnosticLogger> DependencyCollector<'a, R, L> {
    pub fn new(
        resolver: &'a R,
        logger: &'a L,
        settings: &'a EnforcementSettings,
        declared_dependencies: &'a [DeclaredDependency],
        repositories: &'a [RemoteRepository],
        project_name: &'a str,
    ) -> Self {
        Self {
            resolver,
            logger,
            settings,
            declared_dependencies,
            repositories,
            project_name,
        }
    }

    /// Collects the root's entire subtree into a flat reference set. The
    /// root node itself (the project) is not resolved.
    pub fn collect(&self, root: &DependencyNode) -> CollectionOutcome {
        let mut references = ReferenceSet::new();
        let resolution_failed = self.collect_nodes(root.children(), &mut references);
        CollectionOutcome {
            references,
            resolution_failed,
        }
    }

    /// Returns true when any node in `nodes` or below failed to resolve.
    fn collect_nodes(&self, nodes: &[DependencyNode], references: &mut ReferenceSet) -> bool {
        let mut collection_failed = false;
        for node in nodes {
            if self.settings.excludes_scope(node.scope()) {
                // Pruned: the whole subtree is unreachable through this node.
                continue;
            }
            collection_failed |= self.collect_nodes(node.children(), references);

            let resolution = if node.scope() == Some(Scope::System) {
                match self.resolve_system_scoped(node.coordinate()) {
                    Some(resolution) if resolution.resolved => resolution,
                    _ => {
                        self.logger.error(&format!(
                            "Unable to resolve system scoped dependency: {}",
                            node.coordinate()
                        ));
                        collection_failed = true;
                        continue;
                    }
                }
            } else {
                match self.resolver.resolve(self.repositories, node.coordinate()) {
                    Ok(resolved) => resolved,
                    Err(error) => {
                        self.logger.debug(&format!("Collection failed: {:#}", error));
                        self.logger.error(&format!(
                            "Error resolving '{}' in project {}",
                            node.coordinate(),
                            self.project_name
                        ));
                        collection_failed = true;
                        continue;
                    }
                }
            };

            if resolution.resolved && resolution.archive_path.is_file() {
                references.insert(DependencyReference::new(
                    resolution.coordinate,
                    resolution.archive_path,
                    resolution.available_versions,
                    node.dependency_trail().to_vec(),
                ));
            } else {
                self.logger.error(&format!(
                    "Unable to resolve '{}' in project {}",
                    node.coordinate(),
                    self.project_name
                ));
                collection_failed = true;
            }
        }
        collection_failed
    }

    /// Resolves a system-scope node against the project's declared
    /// dependencies. The first declared entry with a system path and
    /// matching coordinates decides the outcome; a missing file there is a
    /// failure, not a reason to keep searching.
    fn resolve_system_scoped(&self, coordinate: &ArtifactCoordinate) -> Option<ResolvedArtifact> {
        for declared in self.declared_dependencies {
            if let Some(path) = declared.system_path() {
                if declared.matches(coordinate) {
                    return Some(ResolvedArtifact {
                        coordinate: coordinate.clone(),
                        archive_path: path.to_path_buf(),
                        available_versions: Vec::new(),
                        resolved: path.is_file(),
                    });
                }
            }
        }
        None
    }
}
