use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    NotAString(&'static str),
    BadShape(String),
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeParseError::NotAString(kind) => {
                write!(f, "can't parse time value of type {kind}")
            }
            TimeParseError::BadShape(raw) => {
                write!(f, "time string {raw:?} is invalid")
            }
        }
    }
}

impl std::error::Error for TimeParseError {}
