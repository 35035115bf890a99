use crate::application::dto::EnforceRequest;
use crate::shared::Result;

/// EnforcementPort - Inbound port for the bytecode level enforcement use case
///
/// This port defines the interface that external adapters (CLI, build-tool
/// integrations) use to trigger one enforcement evaluation. It represents
/// the application's public API.
pub trait EnforcementPort {
    /// Evaluates the project's dependency closure against the configured
    /// maximum bytecode level.
    ///
    /// # Arguments
    /// * `request` - Settings, declared dependencies and repository context
    ///   for one evaluation
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dependency graph cannot be built
    /// - Any dependency anywhere in the graph fails to resolve
    /// - An archive cannot be opened or read
    /// - At least one dependency exceeds the maximum bytecode level (the
    ///   error carries the full violation report)
    fn enforce(&self, request: EnforceRequest) -> Result<()>;
}
