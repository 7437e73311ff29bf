//! # gofast-cli
//!
//! CLI library for generating Go structs and method stubs from JSON schemas.
//!
//! This crate provides the file system side of the `gofast` tool: reading
//! schemas, loading configuration, writing output and watching for changes.
//! Schema resolution and code emission live in the `gofast` crate.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`generator`] - Schema file to Go file generation
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - Schema watching for development mode
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod watcher;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GeneratedFile, SchemaGenerator};
pub use watcher::FileWatcher;
pub use writer::FileWriter;
