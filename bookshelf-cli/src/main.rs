use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version, about = "Book records over HTTP, stored in PostgreSQL")]
struct Cli {
    /// Environment file with the DB_* settings
    #[arg(long, global = true, default_value = ".env", env = "BOOKSHELF_ENV_FILE")]
    env_file: PathBuf,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Connect, migrate and serve the API on port 8080 (default)
    Serve,
    /// Connect and create the books table, then exit
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::run_serve(&cli.env_file).await?,
        Commands::Migrate => commands::run_migrate(&cli.env_file).await?,
    }

    Ok(())
}
