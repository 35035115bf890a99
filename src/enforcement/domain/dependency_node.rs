use super::{ArtifactCoordinate, Scope};

/// One node of the host-built dependency tree.
///
/// Nodes are supplied by the DependencyGraphBuilder capability; enforcement
/// only ever reads from them. The trail is the ordered chain of coordinate
/// strings from the tree root down to and including this node.
#[derive(Debug, Clone)]
pub struct DependencyNode {
    coordinate: ArtifactCoordinate,
    scope: Option<Scope>,
    dependency_trail: Vec<String>,
    children: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(
        coordinate: ArtifactCoordinate,
        scope: Option<Scope>,
        dependency_trail: Vec<String>,
        children: Vec<DependencyNode>,
    ) -> Self {
        Self {
            coordinate,
            scope,
            dependency_trail,
            children,
        }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn dependency_trail(&self) -> &[String] {
        &self.dependency_trail
    }

    pub fn children(&self) -> &[DependencyNode] {
        &self.children
    }
}
