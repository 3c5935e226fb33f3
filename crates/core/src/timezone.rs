use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// Converts a UTC instant to the user's local time. Falls back to UTC when
/// the timezone name is not recognized.
pub fn convert_to_user_timezone(dt: DateTime<Utc>, user_timezone: &str) -> DateTime<Tz> {
    match user_timezone.parse::<Tz>() {
        Ok(tz) => dt.with_timezone(&tz),
        Err(_) => {
            warn!("Unknown timezone '{}', falling back to UTC", user_timezone);
            dt.with_timezone(&Tz::UTC)
        }
    }
}

/// Current time in the user's timezone, falling back to UTC on an
/// unrecognized name.
pub fn current_time_in_timezone(user_timezone: &str) -> DateTime<Tz> {
    convert_to_user_timezone(Utc::now(), user_timezone)
}

/// Today's date as seen from the user's timezone.
pub fn current_date_in_timezone(user_timezone: &str) -> NaiveDate {
    current_time_in_timezone(user_timezone).date_naive()
}
