//! snipgen CLI entrypoint
//! Parses command-line arguments and dispatches to the snippet engine.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::path::PathBuf;

use snipgen::input::{load_options, load_request};
use snipgen::targets::{CodegenRegistry, Target};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snipgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the supported snippet targets
    List,
    /// Print the option schema of a target as JSON
    Options {
        /// Target whose options to show
        #[arg(long)]
        target: Target,
    },
    /// Convert a request description into a code snippet
    Convert {
        /// Target language or library to generate for
        #[arg(long)]
        target: Target,
        /// Path to the request description (JSON or YAML)
        #[arg(long)]
        request: PathBuf,
        /// Path to an option map for the target (JSON or YAML)
        #[arg(long)]
        options: Option<PathBuf>,
        /// Write the snippet to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level WARN so snippet output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = CodegenRegistry::new();
    match &cli.command {
        Commands::List => {
            for target in registry.supported_targets() {
                println!("{target}\t{}", target.display_name());
            }
        }
        Commands::Options { target } => {
            let codegen = registry.get(*target)?;
            let schema = serde_json::to_string_pretty(codegen.options_schema())
                .context("Failed to serialize option schema")?;
            println!("{schema}");
        }
        Commands::Convert {
            target,
            request,
            options,
            output,
        } => {
            let request = load_request(request)
                .with_context(|| format!("Failed to load request from {}", request.display()))?;
            let options = match options {
                Some(path) => load_options(path)
                    .with_context(|| format!("Failed to load options from {}", path.display()))?,
                None => serde_json::Value::Object(serde_json::Map::new()),
            };
            let codegen = registry.get(*target)?;
            let snippet = codegen
                .convert(&request, &options)
                .context("Failed to generate snippet")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &snippet)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "snippet written");
                }
                None => println!("{snippet}"),
            }
        }
    }
    Ok(())
}
