//! Property-based tests for gofast-cli.
//!
//! Properties tested:
//! - Config override precedence
//! - Dry run never touches the file system
//! - Written files match the in-memory generation output
//! - Output placement follows the configured directory

use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use gofast_cli::{
    config::{CliArgs, Config, ConfigManager, OutputConfig},
    generator::SchemaGenerator,
    writer::{FileWriter, WriteResult},
};

// =============================================================================
// Generators for property tests
// =============================================================================

/// Generate a Go-style exported record name.
fn arb_record_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z]{1,10}"
}

/// Generate a Go package name.
fn arb_package() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}".prop_filter("package name must be valid", |package| {
        let mut config = Config::default();
        config.output.package = Some(package.clone());
        config.validate().is_ok()
    })
}

/// Generate a schema with one record holding `fields` json-tagged fields.
fn arb_schema() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        arb_record_name(),
        prop::collection::btree_set("[a-z][a-zA-Z0-9]{0,10}", 0..6),
    )
        .prop_map(|(record, fields)| (record, fields.into_iter().collect()))
}

fn schema_json(record: &str, fields: &[String]) -> String {
    let fields = fields
        .iter()
        .map(|f| format!(r#""{}": {{"type": "string", "json": true}}"#, f))
        .collect::<Vec<_>>()
        .join(", ");
    format!(r#"{{"structs": {{"{}": {{"fields": {{{}}}}}}}}}"#, record, fields)
}

fn write_schema(dir: &TempDir, record: &str, fields: &[String]) -> PathBuf {
    let input = dir.path().join("schema.json");
    fs::write(&input, schema_json(record, fields)).unwrap();
    input
}

// =============================================================================
// Config override precedence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A CLI value always wins over the file value; an absent CLI value
    /// leaves the file value alone.
    #[test]
    fn prop_config_override_precedence(
        file_package in prop::option::of(arb_package()),
        file_header in any::<bool>(),
        cli_package in prop::option::of(arb_package()),
        cli_header in prop::option::of(any::<bool>()),
        cli_dir in prop::option::of("[a-z]{1,8}"),
    ) {
        let base = Config {
            output: OutputConfig {
                dir: Some(PathBuf::from("from-file")),
                header: file_header,
                package: file_package.clone(),
            },
        };
        let args = CliArgs {
            output: cli_dir.clone().map(PathBuf::from),
            header: cli_header,
            package: cli_package.clone(),
        };

        let merged = ConfigManager::merge_cli_args(base, &args);

        prop_assert_eq!(merged.output.header, cli_header.unwrap_or(file_header));
        prop_assert_eq!(merged.output.package, cli_package.or(file_package));
        prop_assert_eq!(
            merged.output.dir,
            Some(cli_dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("from-file")))
        );
    }

    /// Every config written as TOML loads back to the same values.
    #[test]
    fn prop_config_file_loads(
        header in any::<bool>(),
        package in prop::option::of(arb_package()),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gofast.toml");
        let mut content = format!("[output]\nheader = {}\n", header);
        if let Some(package) = &package {
            content.push_str(&format!("package = \"{}\"\n", package));
        }
        fs::write(&path, content).unwrap();

        let config = ConfigManager::load(Some(&path)).unwrap();

        prop_assert_eq!(config.output.header, header);
        prop_assert_eq!(config.output.package, package);
        prop_assert_eq!(config.output.dir, None);
    }
}

// =============================================================================
// Writing
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Dry run reports the content it would write and creates nothing.
    #[test]
    fn prop_dry_run_safety((record, fields) in arb_schema()) {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, &record, &fields);

        let mut config = Config::default();
        config.output.dir = Some(dir.path().join("out"));
        let file = SchemaGenerator::new(config).generate_file(&input).unwrap();

        let result = FileWriter::new(true)
            .write(&file.path, &file.output.content)
            .unwrap();

        prop_assert!(!result.was_written());
        let is_matching_dry_run = matches!(&result, WriteResult::DryRun { content, .. } if *content == file.output.content);
        prop_assert!(is_matching_dry_run);
        prop_assert!(!dir.path().join("out").exists());
    }

    /// The file on disk is exactly the generated content, and writing it
    /// again is a no-op.
    #[test]
    fn prop_written_file_matches_output(
        (record, fields) in arb_schema(),
        package in prop::option::of(arb_package()),
    ) {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, &record, &fields);

        let mut config = Config::default();
        config.output.package = package;
        let file = SchemaGenerator::new(config).generate_file(&input).unwrap();

        let writer = FileWriter::new(false);
        let first = writer.write(&file.path, &file.output.content).unwrap();
        prop_assert!(first.was_written());
        prop_assert_eq!(first.bytes(), file.output.content.len());
        prop_assert_eq!(fs::read_to_string(&file.path).unwrap(), file.output.content.clone());

        let second = writer.write(&file.path, &file.output.content).unwrap();
        let unchanged = matches!(second, WriteResult::Unchanged { .. });
        prop_assert!(unchanged);
    }

    /// The generated file is named after the schema and placed in the
    /// configured directory, or next to the schema without one.
    #[test]
    fn prop_output_placement(
        (record, fields) in arb_schema(),
        subdir in prop::option::of("[a-z]{1,8}"),
    ) {
        let dir = TempDir::new().unwrap();
        let input = write_schema(&dir, &record, &fields);

        let mut config = Config::default();
        config.output.dir = subdir.as_ref().map(|s| dir.path().join(s));
        let file = SchemaGenerator::new(config).generate_file(&input).unwrap();

        let expected_dir = subdir
            .map(|s| dir.path().join(s))
            .unwrap_or_else(|| dir.path().to_path_buf());
        prop_assert_eq!(file.path, expected_dir.join("schema.go"));
        prop_assert_eq!(file.output.records, 1);
    }
}
