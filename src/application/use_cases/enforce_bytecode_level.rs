use crate::application::dto::EnforceRequest;
use crate::enforcement::domain::ViolationReport;
use crate::enforcement::services::{ArchiveScanner, DependencyCollector};
use crate::ports::inbound::EnforcementPort;
use crate::ports::outbound::{ArtifactResolver, DependencyGraphBuilder, DiagnosticLogger};
use crate::shared::error::EnforceError;
use crate::shared::Result;

/// EnforceBytecodeLevelUseCase - Core use case for bytecode level enforcement
///
/// Drives the dependency walk and the per-artifact archive scans, then turns
/// the accumulated violations into one build-stopping report. Scanning only
/// starts once the whole tree has resolved: a single resolution failure
/// anywhere aborts before any archive is opened.
///
/// # Type Parameters
/// * `G` - DependencyGraphBuilder implementation
/// * `R` - ArtifactResolver implementation
/// * `L` - DiagnosticLogger implementation
pub struct EnforceBytecodeLevelUseCase<G, R, L> {
    graph_builder: G,
    resolver: R,
    logger: L,
}

impl<G, R, L> EnforceBytecodeLevelUseCase<G, R, L>
where
    G: DependencyGraphBuilder,
    R: ArtifactResolver,
    L: DiagnosticLogger,
{
    /// Creates a new EnforceBytecodeLevelUseCase with injected dependencies
    pub fn new(graph_builder: G, resolver: R, logger: L) -> Self {
        Self {
            graph_builder,
            resolver,
            logger,
        }
    }

    /// Executes one enforcement evaluation.
    ///
    /// # Errors
    /// Returns an `EnforceError` for every fatal condition: graph
    /// construction failure, any resolution failure, an unreadable archive,
    /// or at least one dependency above the maximum level (carrying the full
    /// report).
    pub fn execute(&self, request: EnforceRequest) -> Result<()> {
        let root = self
            .graph_builder
            .build_dependency_graph(&request.project_name)
            .map_err(|error| EnforceError::GraphBuild {
                project: request.project_name.clone(),
                details: format!("{:#}", error),
            })?;

        let collector = DependencyCollector::new(
            &self.resolver,
            &self.logger,
            &request.settings,
            &request.declared_dependencies,
            &request.repositories,
            &request.project_name,
        );
        let outcome = collector.collect(&root);
        if outcome.resolution_failed {
            return Err(EnforceError::UnresolvedDependencies.into());
        }

        let scanner = ArchiveScanner::new(request.settings.max_bytecode_level, &self.logger);
        let mut report = ViolationReport::new();
        for reference in outcome.references.iter() {
            if scanner.exceeds_bytecode_level(reference)? {
                report.record(reference);
            }
        }

        if report.is_empty() {
            Ok(())
        } else {
            Err(EnforceError::BytecodeLevelExceeded {
                report: report.into_report(),
            }
            .into())
        }
    }
}

impl<G, R, L> EnforcementPort for EnforceBytecodeLevelUseCase<G, R, L>
where
    G: DependencyGraphBuilder,
    R: ArtifactResolver,
    L: DiagnosticLogger,
{
    fn enforce(&self, request: EnforceRequest) -> Result<()> {
        self.execute(request)
    }
}
