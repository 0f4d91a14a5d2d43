use clap::Parser;
use anyhow::Result;
use std::collections::BTreeMap;
use tracing::{info, error};

mod cli;
mod config;
mod errors;
mod filter;
mod models;
mod parser;
mod source;
mod waittime;

use cli::{Cli, Commands};
use config::Config;
use models::Court;
use waittime::WaitTimeBoard;

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "courtfinder=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let file_appender = tracing_appender::rolling::never(".", "courtfinder.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env())
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env())
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    config.validate()?;

    match &cli.command {
        Commands::Fetch { source, output } => {
            let location = source.clone().unwrap_or_else(|| config.data_url.clone());
            info!("Fetching court dataset from: {}", location);

            match source::fetch_to_file(&location, output, &config).await {
                Ok(bytes) => info!("Successfully saved {} bytes to {}", bytes, output),
                Err(e) => error!("Fetch failed: {}", e),
            }
        }

        Commands::List {
            input,
            borough,
            surface,
            permit,
            limit,
            json,
            wait,
        } => {
            let location = input.clone().unwrap_or_else(|| config.data_url.clone());
            let court_filter = Commands::build_filter(borough, surface, permit)?;

            let courts = source::load_courts(&location, &config).await;
            let matched = filter::apply_filter(&courts, &court_filter);
            let shown = &matched[..matched.len().min(*limit)];

            if *json {
                println!("{}", serde_json::to_string_pretty(shown)?);
            } else {
                print_court_lines(shown, *wait);
                println!("Showing {} of {} matching courts", shown.len(), matched.len());
            }
        }

        Commands::Show { id, input } => {
            let location = input.clone().unwrap_or_else(|| config.data_url.clone());
            let courts = source::load_courts(&location, &config).await;

            match courts.iter().find(|c| c.id == *id) {
                Some(court) => print_court_detail(court),
                None => error!("No court with id {} in {}", id, location),
            }
        }

        Commands::Stats { input } => {
            let location = input.clone().unwrap_or_else(|| config.data_url.clone());

            let raw = match source::load_raw(&location, &config).await {
                Ok(raw) => raw,
                Err(e) => {
                    error!("Failed to load court data from {}: {}", location, e);
                    return Ok(());
                }
            };

            let (courts, stats) = parser::parse_courts_with_stats(&raw);
            println!("Accepted records:              {}", stats.accepted);
            println!("Dropped (too few fields):      {}", stats.short_rows);
            println!("Dropped (name/coordinates):    {}", stats.rejected);

            print_counts("borough", courts.iter().map(|c| c.borough.as_str()));
            print_counts("surface", courts.iter().map(|c| c.surface.as_str()));
            print_counts("permit status", courts.iter().map(|c| c.permit_status.as_str()));
        }
    }

    Ok(())
}

fn print_court_lines(courts: &[Court], with_wait: bool) {
    let mut board = WaitTimeBoard::new();
    if with_wait {
        board.seed_mock(courts);
    }

    for court in courts {
        let wait_note = if with_wait {
            match board.estimate(court.id) {
                Some(minutes) => format!(" - ~{} min wait", minutes),
                None => String::new(),
            }
        } else {
            String::new()
        };

        println!(
            "{:>4}  {} ({}) - {} {} courts, permit: {}{}",
            court.id,
            court.name,
            court.borough,
            court.courts,
            court.surface,
            court.permit_status,
            wait_note
        );
    }
}

fn print_court_detail(court: &Court) {
    println!("{} (id {})", court.name, court.id);
    println!("  Address:     {}", court.address);
    println!("  Borough:     {}", court.borough);
    println!("  Surface:     {}", court.surface);
    println!("  Courts:      {}", court.courts);
    println!("  Permit:      {}", court.permit_status);
    println!("  Open dates:  {}", court.open_dates);
    println!("  Hours:       {}", court.hours);
    println!("  Location:    {}, {}", court.latitude, court.longitude);
    if !court.description.is_empty() {
        println!("  {}", court.description);
    }
}

fn print_counts<'a>(label: &str, values: impl Iterator<Item = &'a str>) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    println!("\nCourts by {}:", label);
    for (value, count) in counts {
        let value = if value.is_empty() { "(unspecified)" } else { value };
        println!("  {:<20} {}", value, count);
    }
}
