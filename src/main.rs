//! Stevedore CLI - manage a fleet of vessels and shipping containers

use clap::Parser;
use stevedore::cli::{Args, SubCommand};
use stevedore::OutputFormat;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> stevedore::Result<()> {
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    match args.command {
        None | Some(SubCommand::Menu) => stevedore::repl::run_menu(format),
    }
}
