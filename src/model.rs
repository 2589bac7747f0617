use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Half-open calendar span `[start, end)`. Dates carry no time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateSpan start must not be after end");
        Self { start, end }
    }

    /// The single shared overlap predicate: half-open intersection. A span
    /// ending exactly where the other starts does not overlap it.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Iterate the calendar days covered by the span, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while(move |d| *d < self.end)
    }
}

/// Snapshot files exchange dates as bare `YYYYMMDD` strings.
pub mod date_format {
    use chrono::NaiveDate;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&text, FORMAT).map_err(de::Error::custom)
    }
}

/// Catalog entry describing a room type a hotel offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// One physical room, tagged with its room-type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub room_id: String,
    pub room_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub room_types: Vec<RoomType>,
    pub rooms: Vec<Room>,
}

impl Hotel {
    /// Whether `code` appears in the hotel's room-type catalog.
    pub fn declares_room_type(&self, code: &str) -> bool {
        self.room_types.iter().any(|rt| rt.code == code)
    }

    /// Physical inventory of the given type. Counted from the rooms list,
    /// not the catalog — a declared type with no rooms has zero inventory.
    pub fn room_count(&self, code: &str) -> usize {
        self.rooms.iter().filter(|r| r.room_type == code).count()
    }
}

/// One occupied room-night span: `[arrival, departure)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub hotel_id: String,
    #[serde(with = "date_format")]
    pub arrival: NaiveDate,
    #[serde(with = "date_format")]
    pub departure: NaiveDate,
    pub room_type: String,
    #[serde(default)]
    pub room_rate: Option<String>,
}

impl Booking {
    pub fn span(&self) -> DateSpan {
        DateSpan {
            start: self.arrival,
            end: self.departure,
        }
    }
}

/// Availability over `[from, to)`. Count is not clamped — zero means fully
/// booked, negative means overbooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub count: i32,
}

impl fmt::Display for AvailabilityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}-{},{})",
            self.from.format(date_format::FORMAT),
            self.to.format(date_format::FORMAT),
            self.count
        )
    }
}
