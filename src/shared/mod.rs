/// Shared utilities - Result alias, error types, and exit codes
pub mod error;
pub mod result;

pub use result::Result;
