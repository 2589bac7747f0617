use chrono::NaiveDate;

use crate::model::{DateSpan, date_format};

/// Upper bound on the Search horizon, in days.
const MAX_DAYS_AHEAD: u32 = 36_500;

/// Parsed query from one input line.
///
/// The grammar is `Name(arg1, arg2, arg3)`. Interval validation happens
/// here, on the caller side: the engine only ever sees well-ordered spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free-room count over a date span.
    Availability {
        hotel_id: String,
        span: DateSpan,
        room_type: String,
    },
    /// Collapsed availability ranges over a forward horizon.
    Search {
        hotel_id: String,
        days_ahead: u32,
        room_type: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownCommand(String),
    WrongArity(&'static str, usize, usize),
    InvalidDate(String),
    StartAfterEnd,
    InvalidDays(String),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand(line) => write!(f, "unknown command: {line}"),
            CommandError::WrongArity(cmd, expected, got) => {
                write!(f, "{cmd}: expected {expected} arguments, got {got}")
            }
            CommandError::InvalidDate(text) => write!(f, "invalid date: {text}"),
            CommandError::StartAfterEnd => write!(f, "start date cannot be after end date"),
            CommandError::InvalidDays(text) => write!(f, "invalid number of days: {text}"),
        }
    }
}

impl std::error::Error for CommandError {}

pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, rest) = line
        .split_once('(')
        .ok_or_else(|| CommandError::UnknownCommand(line.to_string()))?;

    let args: Vec<&str> = rest
        .trim_end()
        .trim_end_matches(')')
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect();

    match name.trim() {
        "Availability" => {
            if args.len() != 3 {
                return Err(CommandError::WrongArity("Availability", 3, args.len()));
            }
            Ok(Command::Availability {
                hotel_id: args[0].to_string(),
                span: parse_span(args[1])?,
                room_type: args[2].to_string(),
            })
        }
        "Search" => {
            if args.len() != 3 {
                return Err(CommandError::WrongArity("Search", 3, args.len()));
            }
            Ok(Command::Search {
                hotel_id: args[0].to_string(),
                days_ahead: parse_days(args[1])?,
                room_type: args[2].to_string(),
            })
        }
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// A bare `YYYYMMDD` date queries a single night `[d, d + 1)`; a
/// `start-end` pair queries the half-open range between the two dates.
fn parse_span(text: &str) -> Result<DateSpan, CommandError> {
    if let Some((start, end)) = text.split_once('-') {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start > end {
            return Err(CommandError::StartAfterEnd);
        }
        Ok(DateSpan::new(start, end))
    } else {
        let start = parse_date(text)?;
        let end = start
            .succ_opt()
            .ok_or_else(|| CommandError::InvalidDate(text.to_string()))?;
        Ok(DateSpan::new(start, end))
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(text, date_format::FORMAT)
        .map_err(|_| CommandError::InvalidDate(text.to_string()))
}

fn parse_days(text: &str) -> Result<u32, CommandError> {
    text.parse::<u32>()
        .ok()
        .filter(|days| (1..=MAX_DAYS_AHEAD).contains(days))
        .ok_or_else(|| CommandError::InvalidDays(text.to_string()))
}
