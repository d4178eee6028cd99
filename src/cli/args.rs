//! CLI argument parsing

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stevedore")]
#[command(author, version, about = "Manage a fleet of vessels and shipping containers", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Render fleet listings as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Start the interactive fleet menu (the default when no subcommand is given)
    Menu,
}
