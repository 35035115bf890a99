/// Core enforcement logic - domain model and services
///
/// This package holds the pure model of one enforcement run (coordinates,
/// nodes, references, the class-file header) and the services that walk the
/// dependency tree and scan the resulting archives.
pub mod domain;
pub mod services;
