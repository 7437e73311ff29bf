//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `gofast.toml` files
//! and merging with command-line arguments.

use crate::error::{CliResult, ConfigError};
use gofast::schema::OUTPUT_EXTENSION;
use gofast::EmitterConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "gofast.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory; the generated file goes next to the schema when
    /// unset or empty.
    pub dir: Option<PathBuf>,

    /// Whether to prepend the "Code generated" header comment.
    pub header: bool,

    /// Go package clause for the generated file.
    pub package: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            header: true,
            package: None,
        }
    }
}

impl Config {
    /// Check configuration values that TOML parsing alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(package) = &self.output.package {
            if !is_go_identifier(package) {
                return Err(ConfigError::invalid_value(
                    "output.package",
                    format!("'{}' is not a valid Go package name", package),
                ));
            }
        }

        Ok(())
    }

    /// Emitter options derived from this configuration.
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig {
            header: self.output.header,
            package: self.output.package.clone(),
        }
    }

    /// Where the generated file for the schema at `input` should be written.
    ///
    /// The file keeps the schema's name with a `.go` extension; without an
    /// output directory it lands next to the schema.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let generated = input.with_extension(OUTPUT_EXTENSION);
        match (&self.output.dir, generated.file_name()) {
            (Some(dir), Some(file)) if !dir.as_os_str().is_empty() => dir.join(file),
            _ => generated,
        }
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;
        config.validate()?;

        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = Some(output.clone());
        }

        if let Some(header) = args.header {
            config.output.header = header;
        }

        if let Some(ref package) = args.package {
            config.output.package = Some(package.clone());
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# gofast configuration file

[output]
# Directory for generated Go files (defaults to the schema's directory)
# dir = "./generated"

# Prepend "// Code generated by gofast. DO NOT EDIT."
header = true

# Package clause for generated files. When unset only the declarations are
# emitted, ready to be appended to an existing Go file.
# package = "main"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Header override.
    pub header: Option<bool>,

    /// Package override.
    pub package: Option<String>,
}

/// Go reserved words; none of them can name a package.
const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Check that `name` is a plain ASCII Go identifier and not a keyword.
fn is_go_identifier(name: &str) -> bool {
    if GO_KEYWORDS.contains(&name) {
        return false;
    }

    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
