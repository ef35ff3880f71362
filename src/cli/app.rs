//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::output::{Output, OutputFormat};
use super::session::Session;
use crate::storage::{Config, TaskStore};

#[derive(Parser)]
#[command(name = "cow")]
#[command(author, version, about = "Line-command task tracker backed by a plain text file")]
pub struct Cli {
    /// Task file to read and write
    #[arg(long, env = "COW_FILE")]
    pub file: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, env = "COW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Cow starting");

    let config = Config::load(cli.config.as_deref())?;
    output.verbose_ctx("config", &format!("{:?}", config));

    let store = TaskStore::new(config.data_file(cli.file.as_deref()));
    let mut session = Session::open(store, config.autosave, &output)?;

    if config.greeting {
        output.banner();
    }

    session.run(io::stdin().lock(), &output);

    output.verbose("Session ended");
    Ok(())
}
