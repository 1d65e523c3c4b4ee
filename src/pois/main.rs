//! Command-line client for the points-of-interest endpoints.
//!
//! Searches around a coordinate, inside a square, or looks POIs up by id,
//! printing either a table or the raw JSON bodies.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::future::join_all;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use amadeus_pois::{Amadeus, Config, PoiSearch, PoiSquare, PointOfInterest, Response};

#[derive(Parser, Debug)]
#[command(name = "pois")]
#[command(about = "Points of interest from the Amadeus API")]
struct Args {
    /// TOML config file (defaults to AMADEUS_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print raw response bodies instead of a table
    #[arg(long, global = true)]
    raw: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Points of interest around a coordinate
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// Search radius in kilometers
        #[arg(long, value_parser = parse_radius)]
        radius: Option<f64>,
    },
    /// Points of interest inside a square
    Square {
        #[arg(long, allow_hyphen_values = true)]
        north: f64,
        #[arg(long, allow_hyphen_values = true)]
        west: f64,
        #[arg(long, allow_hyphen_values = true)]
        south: f64,
        #[arg(long, allow_hyphen_values = true)]
        east: f64,
    },
    /// Look up points of interest by id
    Show {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::from_env().context("Failed to read AMADEUS_* environment")?,
    };

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using {}", config.base_url());
    let amadeus = Amadeus::new(&config).context("Failed to build API client")?;
    let pois = amadeus.reference_data().locations().points_of_interest();

    match args.command {
        Command::Nearby {
            latitude,
            longitude,
            radius,
        } => {
            let mut search = PoiSearch::new(latitude, longitude);
            if let Some(radius) = radius {
                search = search.radius(radius);
            }
            let response = pois.get(search).await.context("Nearby search failed")?;
            print_list(&response, args.raw)?;
        }
        Command::Square {
            north,
            west,
            south,
            east,
        } => {
            let square = PoiSquare {
                north,
                west,
                south,
                east,
            };
            let response = pois
                .by_square()
                .get(square)
                .await
                .context("Square search failed")?;
            print_list(&response, args.raw)?;
        }
        Command::Show { ids } => {
            debug!("Fetching {} points of interest", ids.len());
            let locations = amadeus.reference_data().locations();
            let lookups = ids.iter().map(|id| {
                let accessor = locations.point_of_interest(id.as_str());
                async move { accessor.get(()).await }
            });

            let mut rows = Vec::new();
            for (id, result) in ids.iter().zip(join_all(lookups).await) {
                let response = result.with_context(|| format!("Lookup of {} failed", id))?;
                if args.raw {
                    println!("{}", response.body);
                } else {
                    rows.push(response.parse_data::<PointOfInterest>()?);
                }
            }
            if !args.raw {
                print_table(&rows);
            }
        }
    }

    Ok(())
}

fn parse_radius(value: &str) -> Result<f64, String> {
    let radius: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if radius > 0.0 {
        Ok(radius)
    } else {
        Err("radius must be a positive number of kilometers".to_string())
    }
}

fn print_list(response: &Response, raw: bool) -> Result<()> {
    if raw {
        println!("{}", response.body);
        return Ok(());
    }
    let rows: Vec<PointOfInterest> = response
        .parse_data()
        .context("Unexpected response shape")?;
    print_table(&rows);
    Ok(())
}

fn print_table(rows: &[PointOfInterest]) {
    if rows.is_empty() {
        println!("No points of interest found");
        return;
    }

    println!(
        "{:<12} {:<32} {:<12} {:>5} {:>10} {:>10}  TAGS",
        "ID", "NAME", "CATEGORY", "RANK", "LAT", "LON"
    );
    for poi in rows {
        println!(
            "{:<12} {:<32} {:<12} {:>5} {:>10.5} {:>10.5}  {}",
            poi.id,
            truncate(&poi.name, 32),
            poi.category.map(|c| c.to_string()).unwrap_or_default(),
            poi.rank.map(|r| r.to_string()).unwrap_or_default(),
            poi.geo_code.latitude,
            poi.geo_code.longitude,
            poi.tags.join(",")
        );
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max - 1).collect();
        cut.push('…');
        cut
    }
}
