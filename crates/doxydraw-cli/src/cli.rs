//! Command-line interface for the doxydraw utility
//!
//! Provides a CLI over the two batch stages: extracting textual class
//! descriptions from Doxygen compound XML, and building draw.io class
//! diagrams from those descriptions. Behavior is controlled by the
//! contents of the fixed `xmls`/`texts`/`drawio` directories under the
//! current working directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use doxydraw::batch::{build_batch, extract_batch, BatchOutcome};
use doxydraw::extract::Extractor;

/// Doxydraw - Convert Doxygen compound XML into draw.io class diagrams
#[derive(Parser)]
#[command(name = "doxydraw")]
#[command(about = "Convert Doxygen compound XML into draw.io class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract textual class descriptions from the `xmls` directory
    Extract {
        /// Append a best-effort type guess to every member line
        #[arg(long)]
        types: bool,

        /// Print the batch summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build draw.io diagrams from the `texts` directory
    Build {
        /// Print the batch summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run both stages in sequence
    Run {
        /// Append a best-effort type guess to every member line
        #[arg(long)]
        types: bool,

        /// Print the batch summaries as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
pub struct DoxydrawApp {
    root: PathBuf,
}

impl DoxydrawApp {
    /// Create an application operating on the current working directory
    pub fn new() -> Self {
        Self::with_root(Path::new("."))
    }

    /// Create an application operating on another directory root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        if cli.verbose {
            eprintln!("Doxydraw v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Extract { types, json } => self.extract_command(types, json),
            Commands::Build { json } => self.build_command(json),
            Commands::Run { types, json } => self.run_command(types, json),
        }
    }

    /// Handle the extract command
    pub fn extract_command(&self, types: bool, json: bool) -> Result<()> {
        debug!(types, "starting extraction batch");
        let extractor = if types {
            Extractor::with_types()
        } else {
            Extractor::new()
        };
        let outcome = extract_batch(&self.root, &extractor)?;
        self.report("extract", outcome, json)
    }

    /// Handle the build command
    pub fn build_command(&self, json: bool) -> Result<()> {
        debug!("starting diagram batch");
        let outcome = build_batch(&self.root)?;
        self.report("build", outcome, json)
    }

    /// Handle the run command (both stages)
    pub fn run_command(&self, types: bool, json: bool) -> Result<()> {
        self.extract_command(types, json)?;
        self.build_command(json)
    }

    fn report(&self, stage: &str, outcome: BatchOutcome, json: bool) -> Result<()> {
        if json {
            let summary = serde_json::json!({
                "stage": stage,
                "written": outcome.written,
                "failed": outcome.failed,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!(
                "{}: wrote {} file(s), {} failed",
                stage, outcome.written, outcome.failed
            );
        }
        Ok(())
    }
}

impl Default for DoxydrawApp {
    fn default() -> Self {
        Self::new()
    }
}
