use crate::errors::TimeParseError;
use crate::models::UNKNOWN;
use chrono::Utc;
use serde_json::Value;
use tracing::error;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn parse_time_value(value: &Value) -> Option<i64> {
    match value {
        Value::String(text) => parse_time_text(text),
        other => {
            error!("{}", TimeParseError::NotAString(json_type(other)));
            None
        }
    }
}

pub fn parse_time_text(text: &str) -> Option<i64> {
    if text == UNKNOWN {
        return None;
    }
    match millis_of_day(text) {
        Ok(ms) => Some(ms),
        Err(err) => {
            error!("{err}");
            None
        }
    }
}

fn millis_of_day(text: &str) -> Result<i64, TimeParseError> {
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };
    let parts: Vec<&str> = whole.split(':').collect();
    if parts.len() != 3 {
        return Err(TimeParseError::BadShape(text.to_string()));
    }

    let field = |raw: &str| {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| TimeParseError::BadShape(text.to_string()))
    };
    let hours = field(parts[0])?;
    let minutes = field(parts[1])?;
    let seconds = field(parts[2])?;
    let millis = match fraction {
        Some(raw) => field(raw)?,
        None => 0,
    };

    // Fields are combined linearly, so out-of-range values roll over into
    // their neighbours the way the station's own display normalized them.
    Ok(hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis)
}

pub fn format_time_of_day(ms: i64) -> String {
    let ms = ms.rem_euclid(DAY_MS);
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        ms / 3_600_000,
        ms / 60_000 % 60,
        ms / 1_000 % 60,
        ms % 1_000
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_noon_without_fraction() {
        assert_eq!(parse_time_text("12:00:00"), Some(43_200_000));
        assert_eq!(format_time_of_day(43_200_000), "12:00:00.000");
    }

    #[test]
    fn parses_fraction_as_integer_millis() {
        assert_eq!(parse_time_text("01:02:03.456"), Some(3_723_456));
        // The station's display read the fraction as a plain number, so a
        // single digit is single-digit milliseconds.
        assert_eq!(parse_time_text("01:02:03.5"), Some(3_723_005));
    }

    #[test]
    fn unknown_sentinel_is_not_an_error() {
        assert_eq!(parse_time_text("Unknown"), None);
        assert_eq!(parse_time_value(&Value::String("Unknown".into())), None);
    }

    #[test]
    fn non_string_value_yields_none() {
        assert_eq!(parse_time_value(&serde_json::json!(43_200_000)), None);
        assert_eq!(parse_time_value(&Value::Null), None);
        assert_eq!(parse_time_value(&serde_json::json!(["12:00:00"])), None);
    }

    #[test]
    fn wrong_component_count_yields_none() {
        assert_eq!(parse_time_text("12:00"), None);
        assert_eq!(parse_time_text("12:00:00:00"), None);
        assert_eq!(parse_time_text(""), None);
    }

    #[test]
    fn non_numeric_component_yields_none() {
        assert_eq!(parse_time_text("aa:00:00"), None);
        assert_eq!(parse_time_text("12:00:00.x"), None);
    }

    #[test]
    fn out_of_range_fields_roll_over() {
        assert_eq!(parse_time_text("25:00:00"), Some(90_000_000));
        assert_eq!(parse_time_text("00:00:90"), Some(90_000));
        assert_eq!(parse_time_text("12:-5:00"), Some(42_900_000));
        assert_eq!(format_time_of_day(90_000_000), "01:00:00.000");
    }

    #[test]
    fn formatter_wraps_past_midnight() {
        assert_eq!(format_time_of_day(DAY_MS), "00:00:00.000");
        assert_eq!(format_time_of_day(DAY_MS + 100), "00:00:00.100");
    }

    #[test]
    fn parse_and_format_round_trip() {
        for text in ["00:00:00.000", "09:08:07.065", "12:00:00.000", "23:59:59.999"] {
            let ms = parse_time_text(text).expect("valid time");
            assert_eq!(format_time_of_day(ms), text);
        }
    }
}
