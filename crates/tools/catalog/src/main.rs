//! Content inspection tool for realm data directories.
//!
//! Loads a data directory exactly as the server does at startup and prints
//! what ended up in the equipment registry.
//! Run with: `realm-catalog --data-dir <DIR> <command>`

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Authority, List, Show, Slot};
use realm_content::ContentFactory;

/// Inspect realm content
#[derive(Parser)]
#[command(name = "realm-catalog")]
#[command(about = "Load and inspect realm content", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing config.toml and equipment.ron
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List every equipment definition in load order
    List(List),

    /// Show a single equipment definition
    Show(Show),

    /// List definitions occupying one equipment slot
    Slot(Slot),

    /// Print the authority level table
    Authority(Authority),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let factory = ContentFactory::new(cli.data_dir);

    match cli.command {
        Command::List(cmd) => cmd.execute(&factory),
        Command::Show(cmd) => cmd.execute(&factory),
        Command::Slot(cmd) => cmd.execute(&factory),
        Command::Authority(cmd) => cmd.execute(),
    }
}
