// Calendar export helper
// Turns a confirmed booking into a Google Calendar deep link. The URL shape
// (action=TEMPLATE, text, dates as basic-format timestamps, location,
// details) is a wire contract parsed by the external service and must be
// preserved exactly. Opening the link is the caller's side effect.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use url::Url;

use crate::model::{Booking, Restaurant};

const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const DATES_FORMAT: &str = "%Y%m%dT%H%M%SZ";

// Booked table is held for two hours
const EVENT_DURATION_HOURS: i64 = 2;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("invalid time label: {0:?}")]
    InvalidTimeLabel(String),

    #[error("URL construction failed: {0}")]
    Url(#[from] url::ParseError),
}

/// Parse a 12-hour slot label ("7:00 PM") back into a time of day. Exact
/// inverse of [`crate::slots::format_time_label`], including the
/// noon/midnight rule: "12:00 PM" is 12:00, "12:00 AM" is 00:00.
pub fn parse_time_label(label: &str) -> Result<NaiveTime, CalendarError> {
    let invalid = || CalendarError::InvalidTimeLabel(label.to_string());

    let mut parts = label.split_whitespace();
    let clock = parts.next().ok_or_else(invalid)?;
    let meridiem = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }

    let (hour_str, minute_str) = clock.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
    let minute: u32 = minute_str.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let hour24 = match meridiem {
        "AM" if hour == 12 => 0,
        "AM" => hour,
        "PM" if hour == 12 => 12,
        "PM" => hour + 12,
        _ => return Err(invalid()),
    };

    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or_else(invalid)
}

/// Start and end instants for a booking: the parsed wall-clock time on the
/// booking date, plus a fixed two-hour hold.
pub fn booking_window(
    date: NaiveDate,
    time_label: &str,
) -> Result<(NaiveDateTime, NaiveDateTime), CalendarError> {
    let start = date.and_time(parse_time_label(time_label)?);
    let end = start + Duration::hours(EVENT_DURATION_HOURS);
    Ok((start, end))
}

/// Build the calendar deep link for a confirmed booking. Timestamps encode
/// the restaurant's wall-clock time in basic ISO form, separators stripped.
pub fn calendar_export_url(booking: &Booking, restaurant: &Restaurant) -> Result<Url, CalendarError> {
    let (start, end) = booking_window(booking.date, &booking.time)?;

    let text = format!("Table at {}", restaurant.name);
    let dates = format!(
        "{}/{}",
        start.format(DATES_FORMAT),
        end.format(DATES_FORMAT)
    );
    let details = format!(
        "Table for {} guests. Confirmation code: {}",
        booking.guests, booking.confirmation_code
    );

    let url = Url::parse_with_params(
        CALENDAR_RENDER_URL,
        &[
            ("action", "TEMPLATE"),
            ("text", text.as_str()),
            ("dates", dates.as_str()),
            ("location", restaurant.address.as_str()),
            ("details", details.as_str()),
        ],
    )?;
    Ok(url)
}
