use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use meteo_core::{Config, ForecastRecord, Meteosource, PlaceMatch};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "meteo", version, about = "Daily weather from Meteosource")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the Meteosource API key in the local config file.
    Configure,

    /// Show today's forecast for a place.
    Forecast {
        /// Place name; prompted interactively when omitted.
        place: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Forecast { place }) => forecast(place).await,
            // Bare `meteo` behaves like `meteo forecast` with a prompt.
            None => forecast(None).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("Meteosource API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;

    config.set_api_key(api_key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn forecast(place: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;

    let place = match place {
        Some(place) => place,
        None => Text::new("Where do you live?").prompt()?,
    };

    let client = Meteosource::new(api_key)?;

    let found = client.find_place(&place).await?;
    debug!(place_id = %found.place_id, "place resolved");

    let record = client.daily_forecast(&found.place_id).await?;

    println!("{}", render_forecast(&found, &record));
    Ok(())
}

/// Render one daily record as a short human-readable block.
fn render_forecast(place: &PlaceMatch, record: &ForecastRecord) -> String {
    let mut out = String::new();

    let heading = if record.day == Utc::now().date_naive() {
        format!("Today in {}", place.display_name())
    } else {
        format!("{} on {}", place.display_name(), record.day.format("%A, %d %B %Y"))
    };
    out.push_str(&heading);
    out.push('\n');

    if let Some(summary) = record.summary.as_deref().or(record.weather.as_deref()) {
        out.push_str(&format!("  {summary}\n"));
    }

    if let Some(all_day) = &record.all_day {
        if let Some(temp) = all_day.temperature {
            let range = match (all_day.temperature_min, all_day.temperature_max) {
                (Some(min), Some(max)) => format!(" (min {min:.1}, max {max:.1})"),
                _ => String::new(),
            };
            out.push_str(&format!("  temperature: {temp:.1} °C{range}\n"));
        }
        if let Some(wind) = &all_day.wind {
            if let Some(speed) = wind.speed {
                let dir = wind.dir.as_deref().unwrap_or("");
                out.push_str(&format!("  wind: {speed:.1} m/s {dir}\n"));
            }
        }
        if let Some(total) = all_day.cloud_cover.as_ref().and_then(|c| c.total) {
            out.push_str(&format!("  cloud cover: {total:.0}%\n"));
        }
        if let Some(precip) = &all_day.precipitation {
            if let Some(total) = precip.total {
                let kind = precip.kind.as_deref().unwrap_or("none");
                out.push_str(&format!("  precipitation: {total:.1} mm ({kind})\n"));
            }
        }
    }

    // Fields we don't model still get shown, so the record is printed in full.
    for (key, value) in &record.extra {
        out.push_str(&format!("  {key}: {value}\n"));
    }

    out.trim_end().to_string()
}
