use anyhow::Context;
use clap::{Parser, Subcommand};
use skycast_core::{Config, OpenWeatherClient};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather & 5-day forecast for any city")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather and the 5-day outlook for a city.
    Show {
        /// City name, e.g. "Chennai", "Tokyo", "Berlin".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let api_key = inquire::Password::new("OpenWeather API key:")
        .with_display_toggle_enabled()
        .without_confirmation()
        .prompt()
        .context("Failed to read API key from prompt")?;

    let mut config = Config::load()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;

    let client = OpenWeatherClient::new(api_key);
    let report = client
        .query(city)
        .await
        .map_err(|err| anyhow::anyhow!(err.detail()))?;

    print!("{}", render::report(&report));
    Ok(())
}
