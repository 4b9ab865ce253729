/// Utilities for date and time formatting
///
/// Backend timestamps are RFC 3339 strings; they are shown as given, without
/// converting to the browser's timezone.
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim()).ok()
}

/// "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_timestamp(datetime_str) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => format_date(datetime_str),
    }
}

/// "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional timestamp for table cells
pub fn format_datetime_opt(value: &Option<String>) -> String {
    value
        .as_deref()
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

/// "5 phút trước" style age of a timestamp relative to `now`
pub fn relative_time(datetime_str: &str, now: DateTime<Utc>) -> String {
    let Some(dt) = parse_timestamp(datetime_str) else {
        return format_date(datetime_str);
    };
    let seconds = (now - dt.with_timezone(&Utc)).num_seconds();
    match seconds {
        s if s < 60 => "Vừa xong".to_string(),
        s if s < 3_600 => format!("{} phút trước", s / 60),
        s if s < 86_400 => format!("{} giờ trước", s / 3_600),
        s if s < 7 * 86_400 => format!("{} ngày trước", s / 86_400),
        _ => dt.format("%d/%m/%Y").to_string(),
    }
}

/// Current time from the browser clock
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+07:00"), "31/12/2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime_opt(&None), "-");
    }

    #[test]
    fn test_relative_time() {
        let now = at("2024-05-10T12:00:00Z");
        assert_eq!(relative_time("2024-05-10T11:59:30Z", now), "Vừa xong");
        assert_eq!(relative_time("2024-05-10T11:45:00Z", now), "15 phút trước");
        assert_eq!(relative_time("2024-05-10T09:00:00Z", now), "3 giờ trước");
        assert_eq!(relative_time("2024-05-08T12:00:00Z", now), "2 ngày trước");
        assert_eq!(relative_time("2024-04-01T12:00:00Z", now), "01/04/2024");
    }
}
