mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod profile;
mod quantity;
mod tables;

use chrono::Utc;
use clap::{Parser, crate_version};

use crate::{
    api::carbon_intensity,
    cli::{Args, Command, FootprintArgs, ForecastSourceArgs, WindowsArgs},
    core::{ForecastPoint, energy_to_carbon, forecast, select_top_windows},
    prelude::*,
    tables::{build_footprint_table, build_forecast_table, build_windows_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Forecast(args) => {
            let points = fetch_points(&args.source).await?;
            println!("{}", build_forecast_table(&points));
        }
        Command::Windows(args) => {
            windows(&args).await?;
        }
        Command::Footprint(args) => {
            footprint(&args)?;
        }
    }

    info!("done!");
    Ok(())
}

async fn windows(args: &WindowsArgs) -> Result {
    let points = fetch_points(&args.source).await?;
    let selection = select_top_windows(&points, args.duration, args.top_n)?;
    if let Some(best) = selection.windows.first() {
        info!(
            start = %best.start_time.format("%Y-%m-%d %H:%M"),
            average = %best.average_intensity,
            "greenest window",
        );
    }
    println!("{}", build_windows_table(&selection)?);
    Ok(())
}

fn footprint(args: &FootprintArgs) -> Result {
    let breakdown = profile::load_breakdown(&args.profile)?;
    println!("{}", build_footprint_table(&breakdown, args.grid_intensity)?);
    let total = energy_to_carbon(breakdown.total_energy, args.grid_intensity)?;
    println!("{total} of CO2 — about {}", total.equivalent());
    Ok(())
}

async fn fetch_points(source: &ForecastSourceArgs) -> Result<Vec<ForecastPoint>> {
    match &source.forecast_file {
        Some(path) => forecast::load_points(path),
        None => {
            carbon_intensity::Client::try_new(source.api_base_url.clone())?
                .get_forecast(Utc::now())
                .await
        }
    }
}
