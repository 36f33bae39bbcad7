mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod ui;
mod utils;

use crate::cli::{Cli, Commands};
use crate::commands::CommandContext;
use crate::config::PartialAppConfig;
use crate::error::{CliError, Result};
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install().map_err(|e| CliError::Other(e.into()))?;
    std::panic::set_hook(Box::new(move |pi| {
        error!("{}", panic_hook.panic_report(pi));
    }));

    info!("stoich v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    info!("Merging configuration from file and CLI arguments...");
    let config = PartialAppConfig::load(&cli)?.merge_with_cli(&cli)?;
    let ctx = CommandContext {
        config,
        format: cli.format,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Formula(args) => {
            info!("Dispatching to 'formula' command.");
            commands::formula::run(args, &ctx)
        }
        Commands::Equation(args) => {
            info!("Dispatching to 'equation' command.");
            commands::equation::run(args, &ctx)
        }
        Commands::Check(args) => {
            info!("Dispatching to 'check' command.");
            commands::check::run(args, &ctx)
        }
        Commands::Element(args) => {
            info!("Dispatching to 'element' command.");
            commands::element::run(args, &ctx)
        }
    };

    match &result {
        Ok(()) => info!("✅ Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    result
}
