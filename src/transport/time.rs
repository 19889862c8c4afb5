use chrono::{DateTime, Local};

use super::DecodeError;

/// Timestamps arrive as `2015-05-25T06:40:45+0000`; `%z` accepts the
/// colon-less offset.
const WIRE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a wire timestamp and convert it to the caller's local time zone.
pub fn decode_wire_time(value: &str) -> Result<DateTime<Local>, DecodeError> {
    DateTime::parse_from_str(value, WIRE_TIME_FORMAT)
        .map(|parsed| parsed.with_timezone(&Local))
        .map_err(|source| DecodeError::Timestamp {
            value: value.to_owned(),
            source,
        })
}
