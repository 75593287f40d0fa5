//! Geocoder CLI
//!
//! Command-line interface for forward and reverse geocoding.

#![allow(clippy::print_stdout)]

mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use domain::GeoPoint;
use integration_geocoding::{GeocodingClient, GoogleGeocoder, query};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

/// Geocoder CLI
#[derive(Parser)]
#[command(name = "geocoder-cli")]
#[command(author, version, about = "Address and coordinate lookup CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./geocoder.toml if present)
    #[arg(short, long, env = "GEOCODER_CONFIG")]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the coordinates of an address
    ///
    /// Example: geocoder-cli geocode "1600 Amphitheatre Parkway, Mountain View"
    Geocode {
        /// Free-form address
        address: String,
    },

    /// Look up the address at a coordinate pair
    ///
    /// Example: geocoder-cli reverse 40.714224 -73.961452
    Reverse {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },

    /// Print the authenticated geocode URL for an address without sending it
    Url {
        /// Free-form address
        address: String,
    },
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let app_config = AppConfig::load(cli.config.as_deref())?;
    app_config.geocoding.validate()?;
    debug!(config = ?app_config.geocoding, "Loaded configuration");

    let client = GoogleGeocoder::new(&app_config.geocoding)?;

    match cli.command {
        Commands::Geocode { address } => {
            let result = client.geocode(&address).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.location);
                println!("{}", result.formatted_address);
            }
        },

        Commands::Reverse {
            latitude,
            longitude,
        } => {
            let point = GeoPoint::from((latitude, longitude));
            let address = client.reverse_geocode(point).await?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "location": point,
                        "formatted_address": address,
                    }))?
                );
            } else {
                println!("{address}");
            }
        },

        Commands::Url { address } => {
            let url = client.request_url(&query::geocode_query(&address))?;
            println!("{url}");
        },
    }

    Ok(())
}
