pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config;
use types::{Cli, Commands};

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(logging::level_for(cli.debug, cli.quiet));
    logging::configure_backtrace(cli.trace);

    let source = cli.source.clone().unwrap_or_else(|| PathBuf::from("./"));
    let config = match config::load_config(&source, Some(cli.config.clone())) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match &cli.command {
        Commands::Render { input, markdown, output } => commands::handle_render_command(
            &config,
            input.as_deref(),
            *markdown,
            output.as_deref(),
        ),
        Commands::Parse { args } => commands::handle_parse_command(args),
        Commands::Css { theme } => commands::handle_css_command(&config, theme.as_deref()),
        Commands::Themes => {
            commands::handle_themes_command(&config);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
