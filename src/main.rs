//! tictactoe_history - unified CLI
//!
//! Interactive terminal game, or scripted replay printed as text or JSON.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use tictactoe_history::{AppConfig, Session, parse_script, run_script, run_tui};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(Some(cli.config.as_path()))
        .context("Failed to load configuration")?;
    let config = if cli.show_coordinates {
        config.with_show_coordinates(true)
    } else {
        config
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_terminal(&config),
        Command::Play { script, format } => run_play(&config, &script.join(" "), format),
    }
}

/// Runs the terminal UI, logging to a file so the screen stays clean.
fn run_terminal(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config, "info"))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    run_tui(config.view_options())
}

/// Replays a script and prints the final view.
fn run_play(config: &AppConfig, script: &str, format: OutputFormat) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(config, "info,tictactoe_history=debug"))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let steps = parse_script(script).context("Failed to parse script")?;
    let mut session = Session::mount();
    run_script(&mut session, &steps).context("Script failed")?;
    info!(outcome = %session.outcome(), "Script finished");

    let view = session.view(&config.view_options());
    match format {
        OutputFormat::Text => print!("{}", view.render_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}

fn env_filter(config: &AppConfig, fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(config.log_filter().as_deref().unwrap_or(fallback))
    })
}
