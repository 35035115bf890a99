pub mod class_header;
pub mod coordinate;
pub mod declared_dependency;
pub mod dependency_node;
pub mod dependency_reference;
pub mod remote_repository;
pub mod scope;
pub mod settings;
pub mod violation_report;

pub use class_header::{ClassHeader, CLASS_MAGIC};
pub use coordinate::ArtifactCoordinate;
pub use declared_dependency::DeclaredDependency;
pub use dependency_node::DependencyNode;
pub use dependency_reference::{DependencyReference, ReferenceSet};
pub use remote_repository::RemoteRepository;
pub use scope::Scope;
pub use settings::EnforcementSettings;
pub use violation_report::ViolationReport;
