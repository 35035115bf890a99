//! bytecode-guard - Bytecode level enforcement for JVM dependency closures
//!
//! This library verifies that no dependency in a project's resolved closure
//! ships class files above a configured maximum JVM bytecode level, failing
//! the build with a diagnostic report when one does.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`enforcement`): Pure domain model and the core walk/scan services
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for the host build environment
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bytecode_guard::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let manifest = ManifestReader::load(Path::new("dependency-manifest.json"))?;
//! let resolver = LocalRepositoryResolver::new(PathBuf::from("/home/build/.m2/repository"));
//! let logger = StderrLogger::new(false);
//!
//! // Create request from the manifest snapshot
//! let request = EnforceRequest::new(
//!     manifest.project_name().to_string(),
//!     EnforcementSettings::default(),
//!     manifest.declared_dependencies().to_vec(),
//!     manifest.repositories().to_vec(),
//! );
//!
//! // Execute - an Err carries the violation report or the fatal cause
//! let use_case = EnforceBytecodeLevelUseCase::new(manifest, resolver, logger);
//! use_case.execute(request)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod enforcement;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrLogger;
    pub use crate::adapters::outbound::filesystem::{LocalRepositoryResolver, ManifestReader};
    pub use crate::application::dto::EnforceRequest;
    pub use crate::application::use_cases::EnforceBytecodeLevelUseCase;
    pub use crate::enforcement::domain::{
        ArtifactCoordinate, ClassHeader, DeclaredDependency, DependencyNode, DependencyReference,
        EnforcementSettings, ReferenceSet, RemoteRepository, Scope, ViolationReport, CLASS_MAGIC,
    };
    pub use crate::enforcement::services::{ArchiveScanner, DependencyCollector};
    pub use crate::ports::inbound::EnforcementPort;
    pub use crate::ports::outbound::{
        ArtifactResolver, DependencyGraphBuilder, DiagnosticLogger, ResolvedArtifact,
    };
    pub use crate::shared::error::{EnforceError, ExitCode};
    pub use crate::shared::Result;
}
