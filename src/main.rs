use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use tracing::info;

use vacancy::{loader, repl};

/// Availability reporting over hotel and reservation snapshots.
///
/// Loads both snapshots once, then answers Availability(...) and
/// Search(...) queries interactively until EOF or a blank line.
#[derive(Parser)]
#[command(name = "vacancy", version)]
struct Args {
    /// Hotel inventory snapshot (.json).
    #[arg(long, value_name = "FILE")]
    hotels: PathBuf,

    /// Reservation snapshot (.json).
    #[arg(long, value_name = "FILE")]
    bookings: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let hotels = loader::load_hotels(&args.hotels)?;
    let bookings = loader::load_bookings(&args.bookings)?;
    info!("loaded {} hotels, {} bookings", hotels.len(), bookings.len());

    let today = Local::now().date_naive();
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    repl::run(stdin, stdout, &hotels, &bookings, today)?;

    Ok(())
}
