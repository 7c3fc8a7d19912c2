//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display tokens indexed by level discriminant.
const LEVEL_TOKENS: [&str; 5] = ["DEBUG", "INFO", "WARN", "ERROR", "FATAL"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u8)]
pub enum LogLevel {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Fatal = 4,
}

impl LogLevel {
    /// Every level, lowest severity first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    #[inline]
    pub fn to_str(&self) -> &'static str {
        LEVEL_TOKENS[*self as usize]
    }

    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, LogLevel::Fatal)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            "FATAL" => Ok(LogLevel::Fatal),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self, LoggerError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.to_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_follow_order() {
        let tokens: Vec<&str> = LogLevel::ALL.iter().map(LogLevel::to_str).collect();
        assert_eq!(tokens, vec!["DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
    }

    #[test]
    fn test_ordering_is_total() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Fatal);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" Error ".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("trace".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_try_from_string() {
        assert_eq!(LogLevel::try_from("Fatal".to_string()).unwrap(), LogLevel::Fatal);
        let err = LogLevel::try_from("loud".to_string()).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidLevel(_)));
    }

    #[test]
    fn test_only_fatal_is_fatal() {
        for level in LogLevel::ALL {
            assert_eq!(level.is_fatal(), level == LogLevel::Fatal);
        }
    }
}
