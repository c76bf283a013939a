use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode};
use weather_core::{Config, SearchOutcome, WeatherSession, provider_from_config};

use crate::{render, repl::Repl};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Look up current weather by city and country")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Without a subcommand an interactive session is started.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Run one search and print the result.
    Show {
        /// City name, e.g. "London".
        city: String,

        /// Country name, e.g. "United Kingdom".
        country: String,
    },

    /// Start an interactive session (the default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { city, country } => show(&Config::resolve()?, city, country).await,
            Command::Interactive => {
                let config = Config::resolve()?;
                let session = WeatherSession::new(provider_from_config(&config));
                Repl::new(session).run().await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;

    tracing::info!(path = %path.display(), "configuration saved");
    println!("Saved API key to {}", path.display());
    Ok(())
}

async fn show(config: &Config, city: String, country: String) -> anyhow::Result<()> {
    let mut session = WeatherSession::new(provider_from_config(config));
    session.set_city(city);
    session.set_country(country);

    match session.search().await {
        SearchOutcome::Updated => {
            if let Some(snapshot) = session.snapshot() {
                print!("{}", render::snapshot_panel(snapshot));
            }
            Ok(())
        }
        SearchOutcome::Skipped(reason) => bail!("Search skipped: {reason}"),
        SearchOutcome::Failed => bail!("Search failed, see log output for details"),
    }
}
