use std::io::{self, BufRead, Write};

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::command::{self, Command, CommandError};
use crate::engine::{self, EngineError};
use crate::model::{Booking, DateSpan, Hotel};

/// Why a single query produced no result. Terminal for the query,
/// recoverable for the session.
#[derive(Debug)]
pub enum QueryError {
    Command(CommandError),
    Engine(EngineError),
}

impl From<CommandError> for QueryError {
    fn from(e: CommandError) -> Self {
        QueryError::Command(e)
    }
}

impl From<EngineError> for QueryError {
    fn from(e: EngineError) -> Self {
        QueryError::Engine(e)
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Command(e) => e.fmt(f),
            QueryError::Engine(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for QueryError {}

/// Run an interactive query session: one reply line per input line, until
/// EOF or a blank line. Failed queries report their message on the reply
/// line and the loop continues.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    hotels: &[Hotel],
    bookings: &[Booking],
    today: NaiveDate,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        match execute(&line, hotels, bookings, today) {
            Ok(reply) => writeln!(output, "{reply}")?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }
    Ok(())
}

/// Parse and evaluate one query line.
pub fn execute(
    line: &str,
    hotels: &[Hotel],
    bookings: &[Booking],
    today: NaiveDate,
) -> Result<String, QueryError> {
    let cmd = command::parse(line)?;
    debug!(?cmd, "executing");

    match cmd {
        Command::Availability {
            hotel_id,
            span,
            room_type,
        } => {
            let count = engine::count_available(&hotel_id, span, &room_type, hotels, bookings)?;
            Ok(count.to_string())
        }
        Command::Search {
            hotel_id,
            days_ahead,
            room_type,
        } => {
            let horizon = search_horizon(today, days_ahead);
            let series = engine::daily_series(&hotel_id, horizon, &room_type, hotels, bookings)?;
            let ranges = engine::collapse(series);
            let rendered: Vec<String> = ranges.iter().map(ToString::to_string).collect();
            Ok(rendered.join(", "))
        }
    }
}

/// The Search horizon covers today and the `days_ahead` following days,
/// both endpoints included: `days_ahead + 1` sampled days.
fn search_horizon(today: NaiveDate, days_ahead: u32) -> DateSpan {
    let end = today + Days::new(u64::from(days_ahead) + 1);
    DateSpan::new(today, end)
}
