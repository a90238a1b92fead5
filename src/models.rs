use serde::Deserialize;
use serde_json::Value;

pub const UNKNOWN: &str = "Unknown";

// The station reports a bare number per field, or the string "Unknown" when
// the sensor (or its clock) has no valid value yet.
#[derive(Debug, Clone, Deserialize)]
pub struct SensorReport {
    pub temperature: Value,
    pub humidity: Value,
    pub time: Value,
}

pub fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
