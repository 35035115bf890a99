use bytecode_guard::prelude::*;

/// Mock DependencyGraphBuilder returning a prebuilt tree
pub struct MockGraphBuilder {
    tree: Option<DependencyNode>,
    should_fail: bool,
}

impl MockGraphBuilder {
    pub fn new(tree: DependencyNode) -> Self {
        Self {
            tree: Some(tree),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            tree: None,
            should_fail: true,
        }
    }
}

impl DependencyGraphBuilder for MockGraphBuilder {
    fn build_dependency_graph(&self, _project_name: &str) -> Result<DependencyNode> {
        if self.should_fail {
            anyhow::bail!("Mock graph build failure");
        }
        Ok(self.tree.clone().expect("mock tree was configured"))
    }
}
