//! Classification log line parsing.
//!
//! Lines look like `timestamp###payload` or, from the logger extension,
//! `version###timestamp###payload`. Only payloads that are mappings carry
//! classification measurements.

use super::literal::parse_literal;
use crate::utils::config::{
    CLASSIFICATION_TIME_FIELD, LOG_FIELD_DELIMITER, MIN_LOG_LINE_LEN, TABS_OPEN_FIELD,
    TIME_UNIT_SUFFIX,
};
use crate::utils::error::ParseError;

/// One classification measurement
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: String,
    pub tabs_open: i64,
    pub classification_time_ms: f64,
}

/// Parse a single log line
///
/// Returns `Ok(None)` for lines that carry no measurement (too short, no
/// delimiter, payload is not a mapping) and `Err` for mapping payloads
/// that cannot be read.
pub fn parse_log_line(line: &str) -> Result<Option<LogRecord>, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.chars().count() < MIN_LOG_LINE_LEN {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(LOG_FIELD_DELIMITER).collect();
    let (timestamp, payload) = match fields.as_slice() {
        [.., timestamp, payload] => (*timestamp, *payload),
        _ => return Ok(None),
    };

    if !payload.starts_with('{') {
        return Ok(None);
    }

    let value = parse_literal(payload)?;
    let obj = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidFormat("payload is not a mapping".to_string()))?;

    let tabs_open = obj
        .get(TABS_OPEN_FIELD)
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| {
            ParseError::InvalidFormat(format!("missing integer '{}'", TABS_OPEN_FIELD))
        })?;

    let classification_time_ms = obj
        .get(CLASSIFICATION_TIME_FIELD)
        .ok_or_else(|| {
            ParseError::InvalidFormat(format!("missing '{}'", CLASSIFICATION_TIME_FIELD))
        })
        .and_then(parse_time_ms)?;

    Ok(Some(LogRecord {
        timestamp: timestamp.to_string(),
        tabs_open,
        classification_time_ms,
    }))
}

/// Read a duration such as `"12.5ms"`, `"12.5 ms"` or a bare number
pub fn parse_time_ms(value: &serde_json::Value) -> Result<f64, ParseError> {
    if let Some(n) = value.as_f64() {
        return Ok(n);
    }

    let text = value.as_str().ok_or_else(|| {
        ParseError::InvalidFormat(format!("'{}' is not a duration", value))
    })?;

    let number = text
        .trim()
        .strip_suffix(TIME_UNIT_SUFFIX)
        .ok_or_else(|| {
            ParseError::InvalidFormat(format!("'{}' does not end in {}", text, TIME_UNIT_SUFFIX))
        })?
        .trim();

    number
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidFormat(format!("'{}' is not a number", number)))
}
