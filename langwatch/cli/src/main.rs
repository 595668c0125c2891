//! LangWatch model checker
//!
//! Parses JSON documents as LangWatch API records, prints the normalized
//! document and confirms it survives a round-trip unchanged.

mod error;
mod models;

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;
use strum::IntoEnumIterator;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::models::ModelKind;

/// Check JSON documents against the typed LangWatch API records
#[derive(Parser, Debug)]
#[command(name = "lwm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the models `check` accepts
    Models,

    /// Parse a document as a model and verify it round-trips
    Check {
        /// Model name as listed by `lwm models` (e.g. "prompt-config-data")
        model: String,

        /// Read the document from this file instead of standard input
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pretty-print the normalized document
        #[arg(long)]
        pretty: bool,
    },
}

/// Initializes stderr logging; `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,lwm=info".to_string(),
            2 => "info,lwm=debug,model_record=debug".to_string(),
            _ => "debug,lwm=trace,model_record=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::ReadStdin)?;
            Ok(buffer)
        }
    }
}

fn list_models() {
    for kind in ModelKind::iter() {
        println!("{:<34} {}", kind.to_string(), kind.schema_name().dimmed());
    }
}

fn check(model: &str, file: Option<&PathBuf>, pretty: bool) -> Result<(), CliError> {
    let kind = ModelKind::from_name(model)?;
    let text = read_input(file)?;
    let value: Value = serde_json::from_str(&text)?;
    debug!(bytes = text.len(), "read input document");

    let report = kind.check(value)?;
    info!(model = %kind, "document round-trips");

    let rendered = if pretty {
        serde_json::to_string_pretty(&report.document)?
    } else {
        report.document.to_string()
    };
    println!("{rendered}");

    if let Some(variant) = report.variant {
        eprintln!("{} {variant}", "variant:".cyan());
    }
    if !report.extra_keys.is_empty() {
        eprintln!("{} {}", "extra keys:".yellow(), report.extra_keys.join(", "));
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Command::Models => {
            list_models();
            Ok(())
        }
        Command::Check {
            model,
            file,
            pretty,
        } => check(model, file.as_ref(), *pretty),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
