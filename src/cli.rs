use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::Url;

use crate::quantity::intensity::GramsPerKilowattHour;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the upcoming carbon-intensity forecast.
    #[clap(name = "forecast")]
    Forecast(Box<ForecastArgs>),

    /// Find the greenest execution windows for a deferrable workload.
    #[clap(name = "windows")]
    Windows(Box<WindowsArgs>),

    /// Convert a profiled energy breakdown into a carbon footprint report.
    #[clap(name = "footprint")]
    Footprint(Box<FootprintArgs>),
}

#[derive(Parser)]
pub struct ForecastSourceArgs {
    /// Read the forecast from a JSON file instead of the live API.
    #[clap(long = "forecast-file", env = "FORECAST_FILE")]
    pub forecast_file: Option<PathBuf>,

    /// Carbon Intensity API base URL.
    #[clap(
        long = "api-base-url",
        default_value = "https://api.carbonintensity.org.uk/",
        env = "CARBON_INTENSITY_API_BASE_URL"
    )]
    pub api_base_url: Url,
}

#[derive(Parser)]
pub struct ForecastArgs {
    #[clap(flatten)]
    pub source: ForecastSourceArgs,
}

#[derive(Parser)]
pub struct WindowsArgs {
    #[clap(flatten)]
    pub source: ForecastSourceArgs,

    /// Workload duration in hours.
    #[clap(long, default_value = "4", env = "WINDOW_DURATION_HOURS")]
    pub duration: usize,

    /// Number of windows to report.
    #[clap(long = "top", default_value = "3", env = "TOP_WINDOWS")]
    pub top_n: usize,
}

#[derive(Parser)]
pub struct FootprintArgs {
    /// Path to the energy profile JSON.
    pub profile: PathBuf,

    /// Grid carbon intensity in grams of CO2 per kilowatt-hour.
    #[clap(long = "grid-intensity", default_value = "250", env = "GRID_INTENSITY_G_PER_KWH")]
    pub grid_intensity: GramsPerKilowattHour,
}
