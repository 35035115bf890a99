use crate::enforcement::domain::{DeclaredDependency, EnforcementSettings, RemoteRepository};

/// EnforceRequest - Internal request DTO for one enforcement evaluation
#[derive(Debug, Clone)]
pub struct EnforceRequest {
    /// Name of the project whose dependency closure is evaluated
    pub project_name: String,
    /// Level and scope-exclusion settings for this run
    pub settings: EnforcementSettings,
    /// The project's own declared dependencies (system-scope fallback)
    pub declared_dependencies: Vec<DeclaredDependency>,
    /// Remote repositories handed through to the resolver
    pub repositories: Vec<RemoteRepository>,
}

impl EnforceRequest {
    pub fn new(
        project_name: String,
        settings: EnforcementSettings,
        declared_dependencies: Vec<DeclaredDependency>,
        repositories: Vec<RemoteRepository>,
    ) -> Self {
        Self {
            project_name,
            settings,
            declared_dependencies,
            repositories,
        }
    }
}
