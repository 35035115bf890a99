//! Configuration file support for bytecode-guard.
//!
//! Provides TOML-based configuration through `bytecode-guard.toml` files,
//! including data structures, file loading, validation, and the merge of
//! CLI flags over file values over defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::enforcement::domain::class_header::bytecode_level;
use crate::enforcement::domain::EnforcementSettings;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "bytecode-guard.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    pub supported_jvm_byte_code_level: Option<u16>,
    pub exclude_scope_test: Option<bool>,
    pub exclude_scope_provided: Option<bool>,
    pub manifest: Option<String>,
    pub repository: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, toml::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = toml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid TOML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(level) = config.supported_jvm_byte_code_level {
        if level < bytecode_level::JDK_1_1 {
            bail!(
                "Invalid config: supported-jvm-byte-code-level must be at least {} (JDK 1.1).\n\n\
                 💡 Hint: Class-file major versions start at 45; Java 7 is 51, Java 8 is 52, Java 9 is 53.",
                bytecode_level::JDK_1_1
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Merges the effective enforcement settings: CLI flags override file
/// values, file values override defaults.
pub fn resolve_settings(
    config: &ConfigFile,
    cli_level: Option<u16>,
    include_scope_test: bool,
    include_scope_provided: bool,
) -> EnforcementSettings {
    let defaults = EnforcementSettings::default();
    EnforcementSettings {
        max_bytecode_level: cli_level
            .or(config.supported_jvm_byte_code_level)
            .unwrap_or(defaults.max_bytecode_level),
        exclude_scope_test: if include_scope_test {
            false
        } else {
            config
                .exclude_scope_test
                .unwrap_or(defaults.exclude_scope_test)
        },
        exclude_scope_provided: if include_scope_provided {
            false
        } else {
            config
                .exclude_scope_provided
                .unwrap_or(defaults.exclude_scope_provided)
        },
    }
}
