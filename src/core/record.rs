//! Log record assembly
//!
//! A [`Record`] lives only inside one dispatched task. It puts the fixed
//! fields in front of the caller's context pairs and runs the whole sequence
//! through the pair encoder, so the skip rule applies to both.

use super::encoder::encode_pairs;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use super::value::ContextValue;
use chrono::{DateTime, FixedOffset};

pub const FIELD_DATETIME: &str = "datetime";
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_APP_NAME: &str = "appName";

/// Slack for `=`, spaces, message quotes and the newline.
const SEPARATOR_SLACK: usize = 16;

#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub timestamp: DateTime<FixedOffset>,
    pub level: LogLevel,
    pub message: &'a str,
    pub app_name: Option<&'a str>,
    pub context: &'a [ContextValue],
}

impl<'a> Record<'a> {
    pub fn new(
        timestamp: DateTime<FixedOffset>,
        level: LogLevel,
        message: &'a str,
        context: &'a [ContextValue],
    ) -> Self {
        Self {
            timestamp,
            level,
            message,
            app_name: None,
            context,
        }
    }

    #[must_use]
    pub fn with_app_name(mut self, app_name: Option<&'a str>) -> Self {
        self.app_name = app_name;
        self
    }

    /// Estimated size of the encoded line.
    ///
    /// Only used to pre-size the output buffer; a low estimate costs a
    /// reallocation, never output.
    pub fn capacity_hint(&self, formatted_timestamp: &str) -> usize {
        let mut hint = FIELD_DATETIME.len()
            + FIELD_LEVEL.len()
            + FIELD_MESSAGE.len()
            + formatted_timestamp.len()
            + self.level.to_str().len()
            + self.message.len()
            + SEPARATOR_SLACK;

        if let Some(app_name) = self.app_name {
            hint += FIELD_APP_NAME.len() + app_name.len() + 2;
        }

        hint + self
            .context
            .iter()
            .map(|value| value.len_hint() + 1)
            .sum::<usize>()
    }

    /// Render the full line, newline included.
    pub fn encode(&self, format: TimestampFormat) -> String {
        let datetime = format.format(&self.timestamp);
        let mut out = String::with_capacity(self.capacity_hint(&datetime));

        let mut fields = vec![
            ContextValue::from(FIELD_DATETIME),
            ContextValue::Text(datetime),
            ContextValue::from(FIELD_LEVEL),
            ContextValue::from(self.level.to_str()),
            ContextValue::from(FIELD_MESSAGE),
            ContextValue::Text(format!("\"{}\"", self.message)),
        ];
        if let Some(app_name) = self.app_name {
            fields.push(ContextValue::from(FIELD_APP_NAME));
            fields.push(ContextValue::from(app_name));
        }

        encode_pairs(&fields, &mut out);
        encode_pairs(self.context, &mut out);
        out.push('\n');
        out
    }
}
