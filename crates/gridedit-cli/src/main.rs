//! gridedit CLI - edit a delimited text table with a command string

use anyhow::{Context, Result};
use clap::Parser;
use gridedit::prelude::*;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser)]
#[command(name = "gridedit")]
#[command(
    author,
    version,
    about = "Edit a delimited text table with a sequence of commands"
)]
struct Cli {
    /// Delimiter characters; the first one is used when writing
    #[arg(short, long, default_value = gridedit::DEFAULT_DELIMITERS)]
    delim: String,

    /// Abort after executing this many commands
    #[arg(long, value_name = "N")]
    max_steps: Option<u64>,

    /// Write the result here instead of overwriting FILE
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log every executed command to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Commands separated by `;`
    commands: String,

    /// Table file to edit
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let text_options = TextOptions::new(cli.delim.as_str())
        .with_context(|| format!("Invalid delimiter {:?}", cli.delim))?;
    let run_options = RunOptions {
        step_limit: cli.max_steps,
    };

    let output = cli.output.as_ref().unwrap_or(&cli.file);
    debug!(
        file = %cli.file.display(),
        output = %output.display(),
        delimiters = text_options.delimiters(),
        "starting edit"
    );
    edit_file_to(
        &cli.file,
        output,
        &cli.commands,
        &text_options,
        &run_options,
    )
    .with_context(|| format!("Failed to edit '{}'", cli.file.display()))?;

    Ok(())
}

/// Log to stderr, filtered by RUST_LOG (default `warn`, `debug` with -v)
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
