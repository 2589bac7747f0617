use crate::model::*;

use super::EngineError;

// ── Availability Algorithm ────────────────────────────────────────

/// Rooms of `room_type` free across the whole of `span`.
///
/// Inventory is the hotel's rooms list. A booking occupies the half-open
/// span `[arrival, departure)` and counts against the query iff it
/// intersects `span` — departing exactly on `span.start` or arriving
/// exactly on `span.end` does not count. The result is not clamped, so a
/// negative count reports overbooking.
///
/// Callers hand in a well-ordered span; the only failures are an unknown
/// hotel id and a room type the hotel does not declare (checked even when
/// there are no bookings at all).
pub fn count_available(
    hotel_id: &str,
    span: DateSpan,
    room_type: &str,
    hotels: &[Hotel],
    bookings: &[Booking],
) -> Result<i32, EngineError> {
    let hotel = hotels
        .iter()
        .find(|h| h.id == hotel_id)
        .ok_or_else(|| EngineError::HotelNotFound(hotel_id.to_string()))?;

    if !hotel.declares_room_type(room_type) {
        return Err(EngineError::UnsupportedRoomType {
            hotel_id: hotel_id.to_string(),
            room_type: room_type.to_string(),
        });
    }

    let total = hotel.room_count(room_type);
    let booked = bookings
        .iter()
        .filter(|b| b.hotel_id == hotel_id && b.room_type == room_type && b.span().overlaps(&span))
        .count();

    Ok(total as i32 - booked as i32)
}

/// Day-granularity availability over `span`: one `[day, day + 1)` sample
/// per calendar day, in chronological order.
///
/// Validation is identical on every day, so a bad hotel id or room type
/// fails on the first sample.
pub fn daily_series(
    hotel_id: &str,
    span: DateSpan,
    room_type: &str,
    hotels: &[Hotel],
    bookings: &[Booking],
) -> Result<Vec<AvailabilityRange>, EngineError> {
    let mut series = Vec::new();
    for day in span.days() {
        let Some(next) = day.succ_opt() else { break };
        let count = count_available(hotel_id, DateSpan::new(day, next), room_type, hotels, bookings)?;
        series.push(AvailabilityRange {
            from: day,
            to: next,
            count,
        });
    }
    Ok(series)
}
