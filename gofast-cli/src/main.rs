//! # gofast
//!
//! Generate Go structs and method stubs from a JSON schema.
//!
//! ## Usage
//!
//! ```bash
//! # Generate user.go next to user.json
//! gofast generate --input user.json
//!
//! # Generate into a specific output directory
//! gofast generate --input user.json --output ./models
//!
//! # Watch mode for development
//! gofast generate --input user.json --watch
//!
//! # Dry run to preview the generated file
//! gofast generate --input user.json --dry-run
//!
//! # Initialize configuration
//! gofast init
//!
//! # Check that a generated file is up-to-date
//! gofast check --input user.json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gofast_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::CliError,
    generator::SchemaGenerator,
    logging,
    watcher::{FileWatcher, WatchEvent},
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "gofast")]
#[command(author, version, about = "Generate Go structs and method stubs from JSON schemas", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Go source from a schema file
    Generate {
        /// Schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for the generated Go file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Package clause for the generated file
        #[arg(short, long)]
        package: Option<String>,

        /// Omit the generated-code header comment
        #[arg(long)]
        no_header: bool,

        /// Watch the schema and regenerate on change
        #[arg(short, long)]
        watch: bool,

        /// Preview the generated file without writing it
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new gofast configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "gofast.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Check that a generated file is up-to-date with its schema
    Check {
        /// Schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Generated file to compare (defaults to the configured output path)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            output,
            package,
            no_header,
            watch,
            dry_run,
            config,
        } => {
            let args = CliArgs {
                output,
                header: no_header.then_some(false),
                package,
            };
            cmd_generate(&input, &args, watch, dry_run, config.as_deref())
        }

        Commands::Init { output, force } => cmd_init(&output, force),

        Commands::Check {
            input,
            path,
            config,
        } => cmd_check(&input, path, config.as_deref()),
    }
}

/// Load the config file and apply CLI overrides.
fn load_config(config_path: Option<&Path>, args: &CliArgs) -> Result<Config, CliError> {
    let config = ConfigManager::load(config_path)?;
    let config = ConfigManager::merge_cli_args(config, args);
    config.validate()?;
    Ok(config)
}

/// Generate command implementation.
fn cmd_generate(
    input: &Path,
    args: &CliArgs,
    watch: bool,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let config = load_config(config_path, args)?;
    let generator = SchemaGenerator::new(config);

    if watch {
        run_watch_mode(input, &generator, dry_run)
    } else {
        run_generate(input, &generator, dry_run)
    }
}

/// Run a single generation pass.
fn run_generate(input: &Path, generator: &SchemaGenerator, dry_run: bool) -> Result<(), CliError> {
    println!("{} {}", "Generating from".cyan(), input.display());

    let file = generator.generate_file(input)?;

    println!(
        "  Emitted {} struct(s) and {} method(s)",
        file.output.records.to_string().green(),
        file.output.methods.to_string().green()
    );

    let writer = FileWriter::new(dry_run);

    match writer.write(&file.path, &file.output.content)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::Unchanged { path } => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Run in watch mode.
fn run_watch_mode(
    input: &Path,
    generator: &SchemaGenerator,
    dry_run: bool,
) -> Result<(), CliError> {
    println!("{}", "Starting watch mode...".cyan());
    println!("  Watching: {}", input.display());
    println!("  Press Ctrl+C to stop\n");

    if let Err(e) = run_generate(input, generator, dry_run) {
        println!("{} {}", "Generation error:".red(), e);
    }

    let watcher = FileWatcher::new(input);
    let (_debouncer, rx) = watcher.watch()?;

    println!("\n{}", "Watching for changes...".cyan());

    while let Ok(event) = rx.recv() {
        match event {
            WatchEvent::Modified(path) => {
                println!("\n{} {}", "Schema changed:".cyan(), path.display());
                if let Err(e) = run_generate(input, generator, dry_run) {
                    println!("{} {}", "Generation error:".red(), e);
                }
            }
            WatchEvent::Deleted(path) => {
                println!("\n{} {}", "Schema removed:".yellow(), path.display());
            }
            event @ WatchEvent::Error(_) => {
                if let Some(err) = event.into_error() {
                    println!("{} {}", "Watch error:".red(), err);
                }
            }
        }

        println!("\n{}", "Watching for changes...".cyan());
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(format!(
            "Configuration file already exists: {}",
            output.display()
        )));
    }

    std::fs::write(output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Check command implementation.
fn cmd_check(
    input: &Path,
    path: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    println!("{}", "Checking generated code...".cyan());

    let config = load_config(config_path, &CliArgs::default())?;
    let file = SchemaGenerator::new(config).generate_file(input)?;
    let target = path.unwrap_or(file.path);

    if !target.exists() {
        return Err(CliError::Validation(format!(
            "Generated file not found: {}",
            target.display()
        )));
    }

    let existing = std::fs::read_to_string(&target)?;

    if existing == file.output.content {
        println!("{} {} is up-to-date", "✓".green(), target.display());
        Ok(())
    } else {
        println!("{} {} is out of date", "✗".red(), target.display());
        println!("  Run 'gofast generate --input {}' to update", input.display());
        Err(CliError::Validation(format!(
            "{} is out of date",
            target.display()
        )))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
