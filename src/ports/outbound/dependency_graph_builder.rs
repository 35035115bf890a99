use crate::enforcement::domain::DependencyNode;
use crate::shared::Result;

/// DependencyGraphBuilder port for obtaining the project's dependency tree
///
/// This port abstracts however the host build constructs its dependency
/// graph, letting the core be driven by fake in-memory trees in tests.
pub trait DependencyGraphBuilder {
    /// Builds the dependency tree for the named project.
    ///
    /// Returns the root node; enforcement walks the root's children.
    ///
    /// # Errors
    /// Returns an error if the tree cannot be constructed at all.
    fn build_dependency_graph(&self, project_name: &str) -> Result<DependencyNode>;
}
