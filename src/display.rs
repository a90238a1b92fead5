use crate::models::UNKNOWN;
use std::io::{self, Write};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeField {
    pub text: String,
    pub datetime: String,
}

impl TimeField {
    // The visible text and the machine-readable value always move together.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.datetime.clone_from(&value);
        self.text = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub temperature: String,
    pub humidity: String,
    pub time: TimeField,
}

impl Panel {
    pub fn new() -> Self {
        let mut time = TimeField::default();
        time.set(UNKNOWN);
        Self {
            temperature: UNKNOWN.to_string(),
            humidity: UNKNOWN.to_string(),
            time,
        }
    }

    pub fn line(&self) -> String {
        format!(
            "temperature: {} °C | humidity: {} % | time: {}",
            self.temperature, self.humidity, self.time.text
        )
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn repaint(panel: &Panel) {
    let mut out = io::stdout().lock();
    let _ = write!(out, "\r\x1b[2K{}", panel.line());
    let _ = out.flush();
}
