use super::class_header::bytecode_level;
use super::Scope;

/// Configuration for one enforcement run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnforcementSettings {
    /// Maximum allowed class-file major version.
    pub max_bytecode_level: u16,
    /// Prune test-scope subtrees from the walk.
    pub exclude_scope_test: bool,
    /// Prune provided-scope subtrees from the walk.
    pub exclude_scope_provided: bool,
}

impl Default for EnforcementSettings {
    fn default() -> Self {
        Self {
            max_bytecode_level: bytecode_level::JAVA_7,
            exclude_scope_test: true,
            exclude_scope_provided: true,
        }
    }
}

impl EnforcementSettings {
    /// True when a node with this scope (and its entire subtree) must be
    /// skipped by the walk.
    pub fn excludes_scope(&self, scope: Option<Scope>) -> bool {
        match scope {
            Some(Scope::Test) => self.exclude_scope_test,
            Some(Scope::Provided) => self.exclude_scope_provided,
            _ => false,
        }
    }
}
