//! Command-line interface definitions.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tintbook - window-tint booking configuration and pricing engine
#[derive(Parser)]
#[command(name = "tintbook")]
#[command(about = "Price and validate window-tint booking configurations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a blank booking document to start from
    Init {
        /// Where to write the document
        output: PathBuf,
    },
    /// Price a booking document and show its derived outputs
    Quote {
        /// Path to the booking document
        config: PathBuf,
    },
    /// Validate a booking document against the wizard gates
    Validate {
        /// Path to the booking document
        config: PathBuf,
    },
    /// List available appointment slots for a date (stub backend)
    Slots {
        /// Date to query, e.g. 2026-08-10
        date: NaiveDate,

        /// Booking document used to size the duration hint
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
