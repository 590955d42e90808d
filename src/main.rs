//! Footprint CLI
//!
//! Usage: footprint [OPTIONS] [COMMAND]
//!
//! Commands:
//!   home     Show the welcome page
//!   blog     Show the sustainability tips page
//!   calc     Calculate an annual carbon footprint
//!   chat     Ask the sustainability chatbot one question
//!   factors  Print the emission factor table
//!
//! Without a command, opens the interactive menu.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use footprint::config::Config;
use footprint::presentation::{Cli, Commands};

use crate::commands::CommandContext;

/// Overrides `-v` when set (tracing filter syntax)
const LOG_ENV: &str = "FOOTPRINT_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let loaded = Config::load_or_default(cli.config.as_deref())?;
    let ui = ui::context::UiContext::new(cli.json, cli.color, &loaded.config);
    ui::output::print_config_warnings(&ui, &loaded.warnings);

    let ctx = CommandContext::new(loaded.config, ui, cli.factors);

    match cli.command {
        None => commands::interactive::cmd_interactive(&ctx),
        Some(Commands::Home) => commands::pages::cmd_home(&ctx),
        Some(Commands::Blog) => commands::pages::cmd_blog(&ctx),
        Some(Commands::Calc {
            region,
            vehicle,
            distance,
            electricity,
            meals,
            waste,
        }) => {
            let form = commands::calculate::CalcArgs {
                region,
                vehicle,
                distance,
                electricity,
                meals,
                waste,
            };
            commands::calculate::cmd_calc(&ctx, form)
        }
        Some(Commands::Chat { message }) => commands::chat::cmd_chat(&ctx, message.as_deref()),
        Some(Commands::Factors) => commands::factors::cmd_factors(&ctx),
    }
}

/// Logs go to stderr so stdout stays clean for pages and NDJSON.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
