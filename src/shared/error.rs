use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish bytecode violations from
/// configuration mistakes and infrastructure failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every scanned dependency is at or below the maximum level
    Success = 0,
    /// At least one dependency exceeds the maximum supported bytecode level
    ViolationsDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest error, resolution failure, archive I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ViolationsDetected => write!(f, "Violations Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for bytecode level enforcement.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum EnforceError {
    /// The build-stopping violation report. The report text already starts
    /// with a newline, so the banner reads as its own line.
    #[error("The following dependencies exceed the maximum supported JVM byte code level:{report}")]
    BytecodeLevelExceeded { report: String },

    #[error("Unable to resolve the projects dependencies")]
    UnresolvedDependencies,

    #[error("Unable to build dependency graph on project {project}\nDetails: {details}")]
    GraphBuild { project: String, details: String },

    #[error("Dependency manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid JSON exported by your build")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid repository path: {path}\nReason: {reason}\n\n💡 Hint: Please specify the root of your local artifact repository with the --repository option")]
    InvalidRepositoryPath { path: PathBuf, reason: String },
}

impl EnforceError {
    /// Maps this error to the process exit code the CLI reports.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EnforceError::BytecodeLevelExceeded { .. } => ExitCode::ViolationsDetected,
            _ => ExitCode::ApplicationError,
        }
    }
}
