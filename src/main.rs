//! Probemap - command-line entrypoint.
//!
//! Loads configuration, initializes logging, builds a fixed-capacity probing
//! table and applies the operations given on the command line.

use clap::{Parser, Subcommand};
use probemap_lib::config::{ConfigLoader, LogConfig, ProbemapConfig, ENV_PREFIX};
use probemap_lib::data_structures::probing_table::{
    ProbingTable, ProbingTableConfig, SlotSnapshot,
};
use probemap_lib::error::{
    report_error, set_error_reporter, ErrorContext, ProbemapError, ProbemapResult,
    TracingErrorReporter,
};
use probemap_lib::script::{self, Outcome};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for probemap.
#[derive(Parser, Debug)]
#[clap(name = "probemap", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Build a table and apply operations (set:k=v, get:k, del:k, locate:k)
    Run {
        /// Table capacity, overriding the configured one
        #[clap(long, allow_negative_numbers = true)]
        capacity: Option<i64>,

        /// Print outcomes and the final table as JSON
        #[clap(long)]
        json: bool,

        /// Operations to apply, in order
        operations: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Everything `run --json` prints.
#[derive(Serialize)]
struct RunReport<'a> {
    outcomes: &'a [Outcome],
    size: usize,
    elements: usize,
    load: f64,
    slots: Vec<SlotSnapshot<'a, String>>,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> ProbemapResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| {
        ProbemapError::Custom(format!("Failed to set global tracing subscriber: {e}"))
    })
}

/// Build the table and apply the operations.
fn run_operations(
    config: &ProbemapConfig,
    capacity: Option<i64>,
    json: bool,
    operations: &[String],
) -> ProbemapResult<()> {
    let mut table_config: ProbingTableConfig = config.table.to_table_config()?;
    if let Some(capacity) = capacity {
        table_config = table_config.with_signed_capacity(capacity)?;
    }

    let mut table = ProbingTable::with_config(&table_config);
    info!(
        capacity = table.size(),
        hasher = %table_config.hasher,
        "Table created"
    );

    let operations = script::parse_all(operations)?;
    let outcomes = script::run(&mut table, operations)?;

    if json {
        let report = RunReport {
            outcomes: &outcomes,
            size: table.size(),
            elements: table.elements(),
            load: table.load(),
            slots: table.dump(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for outcome in &outcomes {
        println!("{outcome}");
    }
    for slot in table.dump() {
        match (slot.key, slot.value) {
            (Some(key), Some(value)) => println!("[{}] {key} => {value}", slot.index),
            _ => println!("[{}] <empty>", slot.index),
        }
    }
    println!(
        "size={} elements={} load={:.3}",
        table.size(),
        table.elements(),
        table.load()
    );

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = config_loader.load();

    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }
    set_error_reporter(Arc::new(TracingErrorReporter));

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            let source = args
                .config
                .as_ref()
                .map_or_else(|| "defaults and environment".to_string(), |path| path.display().to_string());
            report_error(ErrorContext::new(e.into(), "config").with_details(format!("source: {source}")));
            process::exit(1);
        }
    };

    let result = match args.command {
        Command::Run {
            capacity,
            json,
            operations,
        } => run_operations(&config, capacity, json, &operations).map_err(|e| {
            ErrorContext::new(e, "run").with_details(format!("operations: {}", operations.join(" ")))
        }),
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            gen_config(&output).map_err(|e| {
                ErrorContext::new(e, "gen-config")
                    .with_details(format!("output: {}", output.display()))
            })
        }
    };

    if let Err(context) = result {
        report_error(context);
        process::exit(1);
    }
}

/// Write the default configuration as TOML.
fn gen_config(output: &std::path::Path) -> ProbemapResult<()> {
    info!("Generating default configuration");
    let default_config = ProbemapConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| ProbemapError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}
