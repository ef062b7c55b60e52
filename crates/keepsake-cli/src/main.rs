//! Keepsake CLI entry point.

use clap::Parser;
use keepsake_core::GalleryConfig;
use tracing_subscriber::{fmt, EnvFilter};

use keepsake_cli::cli::{Cli, Commands};
use keepsake_cli::commands;
use keepsake_cli::repl::Repl;
use keepsake_cli::session::Session;

fn main() {
    // Load .env.local from the working directory if it exists
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    let config = GalleryConfig::load(cli.state_dir.as_deref())?;

    match cli.command {
        Some(Commands::Repl) | None => run_repl(config, cli.data.as_deref()),
        Some(cmd) => commands::execute(cmd, config, cli.data.as_deref()),
    }
}

fn run_repl(config: GalleryConfig, data: Option<&std::path::Path>) -> commands::Result<()> {
    // Without a data file the gallery starts on the upload screen
    let session = match data {
        Some(_) => Session::with_memories(config, commands::load_memories(data)?),
        None => Session::new(config),
    };

    let mut repl = Repl::new(session)?;
    repl.run()?;
    Ok(())
}
