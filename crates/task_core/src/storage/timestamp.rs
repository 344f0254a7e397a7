use crate::error::TaskError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// On-disk timestamp shape: sortable text, second precision, UTC.
const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Current UTC time rendered in the store format.
pub fn now() -> Result<String, TaskError> {
    OffsetDateTime::now_utc()
        .format(TIME_FORMAT)
        .map_err(|err| TaskError::io(err.to_string()))
}

/// Parse a stored timestamp back at the same second precision.
pub fn parse(value: &str) -> Result<PrimitiveDateTime, TaskError> {
    PrimitiveDateTime::parse(value, TIME_FORMAT)
        .map_err(|_| TaskError::corrupt_store(format!("invalid timestamp '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::{now, parse};

    #[test]
    fn now_round_trips_through_parse() {
        let stamp = now().unwrap();
        let parsed = parse(&stamp).unwrap();
        assert_eq!(
            parsed.format(super::TIME_FORMAT).unwrap(),
            stamp,
            "formatting the parsed value must reproduce the original string"
        );
    }

    #[test]
    fn parse_accepts_second_precision() {
        let parsed = parse("2026-03-01 09:30:00").unwrap();
        assert_eq!(parsed.second(), 0);
        assert_eq!(parsed.hour(), 9);
    }

    #[test]
    fn parse_rejects_other_shapes() {
        assert_eq!(parse("not a date").unwrap_err().code(), "corrupt_store");
        assert_eq!(parse("2026-03-01").unwrap_err().code(), "corrupt_store");
        assert_eq!(
            parse("2026-03-01T09:30:00Z").unwrap_err().code(),
            "corrupt_store"
        );
    }
}
