// Parent `tools` module controls `cli` gating; avoid duplicating crate-level cfg here.
mod commands;
pub mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state::CliContext;

pub use commands::LoaderArgs;
pub use commands::check::{SuspiciousLine, find_malformed_directives};

#[derive(Parser, Debug)]
#[command(name = "incload")]
#[command(version, about = "Expand #include \"file\" directives at the head of text files.")]
pub struct Cli {
    /// Print debug output
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print (or save) a file with its includes expanded
    Resolve(commands::resolve::ResolveCommand),
    /// Verify that every include can be loaded
    Check(commands::check::CheckCommand),
    /// List the files a resolution loads, in order
    Deps(commands::deps::DepsCommand),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::new(cli.verbose)?;

    match &cli.command {
        Commands::Resolve(command) => command.execute(&ctx),
        Commands::Check(command) => command.execute(&ctx),
        Commands::Deps(command) => command.execute(&ctx),
    }
}
