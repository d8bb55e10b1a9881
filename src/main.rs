//! tintbook - Main entry point
//!
//! Thin command-line surface over the booking engine: pricing quotes,
//! document validation, and the stub slot listing.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tintbook::booking::BookingConfig;
use tintbook::cli::{Cli, Commands};
use tintbook::schedule::{SlotSource, StubSlotSource};

/// Initialize the tracing subscriber with appropriate settings
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    info!("tintbook starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Init { output }) => {
            let config = BookingConfig::new();
            config.save_to_file(&output)?;
            println!("✓ Blank booking document written to {output:?}");
        }
        Some(Commands::Quote { config }) => {
            let booking = BookingConfig::load_from_file(&config)?;
            print_quote(&booking);
        }
        Some(Commands::Validate { config }) => {
            let booking = BookingConfig::load_from_file(&config)?;
            let issues = booking.validation_issues();
            if issues.is_empty() {
                println!("✓ Booking document is complete and confirmable: {config:?}");
            } else {
                println!("✗ Booking document has {} open item(s):", issues.len());
                for issue in issues {
                    println!("  - {issue}");
                }
            }
        }
        Some(Commands::Slots { date, config }) => {
            let hint = match config {
                Some(path) => BookingConfig::load_from_file(&path)?.estimated_duration_min(),
                None => 0,
            };
            let slots = StubSlotSource.list_available_slots(date, hint)?;
            println!("Slots for {date}:");
            for slot in slots {
                let marker = if slot.available { "open " } else { "taken" };
                println!("  [{marker}] {} ({})", slot.slot_id, slot.start_time);
            }
        }
        None => {
            println!("No command given; try `tintbook --help`");
        }
    }

    Ok(())
}

fn print_quote(booking: &BookingConfig) {
    let derived = booking.derived();

    println!("Quote");
    println!("  Vehicle:       {}", describe_vehicle(booking));
    println!("  Coverage:      {}", describe_coverage(booking));
    println!(
        "  Film tier:     {}",
        booking
            .film()
            .tier
            .map(|t| t.to_string())
            .unwrap_or_else(|| "not chosen".to_string())
    );
    println!(
        "  Service:       {}",
        derived
            .service_subtype
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Variant code:  {}", derived.variant_code);
    println!("  Duration est.: {} min", booking.estimated_duration_min());
    println!("  Estimated:     ${}", derived.estimated_price);
}

fn describe_vehicle(booking: &BookingConfig) -> String {
    let vehicle = booking.vehicle();
    match (vehicle.class, vehicle.subtype) {
        (Some(class), Some(subtype)) => format!("{class} ({subtype})"),
        (Some(class), None) => class.to_string(),
        _ => "not selected".to_string(),
    }
}

fn describe_coverage(booking: &BookingConfig) -> String {
    if booking.coverage().is_empty() {
        return "none".to_string();
    }
    booking
        .coverage()
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
