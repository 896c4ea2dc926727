use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CaféSmart counter: take orders, add tax, print receipts.
#[derive(Parser, Debug)]
#[command(name = "cafe-counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a counter.toml config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print receipts as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Take orders interactively.
    #[default]
    Run,

    /// Print the menu and exit.
    Menu,
}
