mod adapters;
mod application;
mod cli;
mod config;
mod enforcement;
mod ports;
mod shared;

use adapters::outbound::console::StderrLogger;
use adapters::outbound::filesystem::{LocalRepositoryResolver, ManifestReader};
use application::dto::EnforceRequest;
use application::use_cases::EnforceBytecodeLevelUseCase;
use cli::Args;
use config::{discover_config, load_config_from_path, resolve_settings};
use shared::error::{EnforceError, ExitCode};
use shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const DEFAULT_MANIFEST: &str = "dependency-manifest.json";

fn main() {
    let args = Args::parse_args();
    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<EnforceError>() {
        Some(enforce_error) => enforce_error.exit_code(),
        None => ExitCode::ApplicationError,
    }
}

fn run(args: Args) -> Result<()> {
    // Load configuration: an explicit --config path must exist, otherwise a
    // bytecode-guard.toml in the working directory is picked up silently.
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let manifest_path = args
        .manifest
        .clone()
        .or_else(|| config.manifest.clone())
        .unwrap_or_else(|| DEFAULT_MANIFEST.to_string());
    let manifest = ManifestReader::load(Path::new(&manifest_path))?;

    let repository_root =
        resolve_repository_root(args.repository.as_deref().or(config.repository.as_deref()))?;
    let settings = resolve_settings(
        &config,
        args.max_bytecode_level,
        args.include_scope_test,
        args.include_scope_provided,
    );

    // Create adapters (Dependency Injection)
    let resolver = LocalRepositoryResolver::new(repository_root);
    let logger = StderrLogger::new(args.verbose);

    // Create request from the manifest snapshot
    let request = EnforceRequest::new(
        manifest.project_name().to_string(),
        settings,
        manifest.declared_dependencies().to_vec(),
        manifest.repositories().to_vec(),
    );

    // Create use case with injected dependencies and execute
    let use_case = EnforceBytecodeLevelUseCase::new(manifest, resolver, logger);
    use_case.execute(request)
}

fn resolve_repository_root(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let root = PathBuf::from(path);
        if !root.is_dir() {
            return Err(EnforceError::InvalidRepositoryPath {
                path: root,
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }
        return Ok(root);
    }

    match std::env::var_os("HOME") {
        Some(home) => Ok(PathBuf::from(home).join(".m2").join("repository")),
        None => Err(EnforceError::InvalidRepositoryPath {
            path: PathBuf::from("~/.m2/repository"),
            reason: "HOME is not set, so the default local repository cannot be located"
                .to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_repository_root_explicit_directory() {
        let dir = TempDir::new().unwrap();
        let root = resolve_repository_root(Some(dir.path().to_str().unwrap())).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_resolve_repository_root_explicit_nonexistent() {
        let result = resolve_repository_root(Some("/nonexistent/repo/root"));
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("Invalid repository path"));
        assert!(message.contains("Directory does not exist"));
    }

    #[test]
    fn test_exit_code_for_violations() {
        let error: anyhow::Error = EnforceError::BytecodeLevelExceeded {
            report: String::new(),
        }
        .into();
        assert_eq!(exit_code_for(&error), ExitCode::ViolationsDetected);
    }

    #[test]
    fn test_exit_code_for_application_errors() {
        let unresolved: anyhow::Error = EnforceError::UnresolvedDependencies.into();
        assert_eq!(exit_code_for(&unresolved), ExitCode::ApplicationError);

        let plain = anyhow::anyhow!("some infrastructure failure");
        assert_eq!(exit_code_for(&plain), ExitCode::ApplicationError);
    }
}
