//! Schema file to Go file generation.
//!
//! This module reads a schema from disk, runs the `gofast` generation pass
//! with the configured emitter options and works out where the result goes.

use crate::config::Config;
use crate::error::{CliError, CliResult};
use gofast::{GeneratedOutput, Generator};
use std::path::{Path, PathBuf};

/// A generated file ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Destination of the generated source.
    pub path: PathBuf,

    /// Output of the generation pass.
    pub output: GeneratedOutput,
}

/// Generates Go files from schema files.
pub struct SchemaGenerator {
    config: Config,
    generator: Generator,
}

impl SchemaGenerator {
    /// Create a new schema generator with the given configuration.
    pub fn new(config: Config) -> Self {
        let generator = Generator::new(config.emitter_config());
        Self { config, generator }
    }

    /// Read `input` and generate its Go source.
    ///
    /// Nothing is written; the whole pass either succeeds or fails.
    pub fn generate_file(&self, input: &Path) -> CliResult<GeneratedFile> {
        if !input.exists() {
            return Err(CliError::InputNotFound {
                path: input.to_path_buf(),
            });
        }

        let bytes = std::fs::read(input).map_err(|e| CliError::Read {
            path: input.to_path_buf(),
            source: e,
        })?;

        let output = self
            .generator
            .generate(&input.to_string_lossy(), &bytes)?;
        let path = self.config.output_path(input);

        Ok(GeneratedFile { path, output })
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
