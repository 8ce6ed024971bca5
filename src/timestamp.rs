use jiff::{Timestamp, Zoned, tz::TimeZone};
use tracing::warn;

/// Day first, 24 hour clock
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Current time in the system time zone
pub fn now(format: &str) -> String {
    format_in(Timestamp::now(), TimeZone::system(), format)
}

/// Format a timestamp, falling back to the default format if `format` is unusable
pub fn format_in(timestamp: Timestamp, time_zone: TimeZone, format: &str) -> String {
    let zoned = Zoned::new(timestamp, time_zone);

    match jiff::fmt::strtime::format(format, &zoned) {
        Ok(formatted) => formatted,
        Err(error) => {
            warn!("unable to format timestamp with {format:?}: {error}");
            jiff::fmt::strtime::format(DEFAULT_TIMESTAMP_FORMAT, &zoned).unwrap_or_default()
        }
    }
}
