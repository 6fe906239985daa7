//! Quoted date/time literals.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};

use crate::value::JsValue;

/// Textual layout of a [`JsDateTime`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JsDateTimeFormat {
    /// `2010-10-20`
    #[default]
    DateOnly,
    /// `2010-10-20 12:30:59`
    DateTime,
    /// `2010-10-20 12:30:59.0`, tenths of a second.
    DateTimeWithFraction,
    /// `2010-10-20T12:30:59+01:00`
    Iso8601,
}

/// A point in time rendered as a double-quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsDateTime {
    value: Option<DateTime<FixedOffset>>,
    format: JsDateTimeFormat,
}

impl JsDateTime {
    pub fn new(value: DateTime<FixedOffset>, format: JsDateTimeFormat) -> Self {
        Self {
            value: Some(value),
            format,
        }
    }

    /// Interprets a local timestamp as UTC.
    pub fn from_naive(value: NaiveDateTime, format: JsDateTimeFormat) -> Self {
        Self::new(value.and_utc().fixed_offset(), format)
    }

    /// A calendar date at midnight, rendered date only.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_naive(date.and_time(chrono::NaiveTime::MIN), JsDateTimeFormat::DateOnly)
    }

    pub fn absent(format: JsDateTimeFormat) -> Self {
        Self {
            value: None,
            format,
        }
    }

    pub fn value(&self) -> Option<DateTime<FixedOffset>> {
        self.value
    }

    pub fn format(&self) -> JsDateTimeFormat {
        self.format
    }

    fn render(&self, value: &DateTime<FixedOffset>) -> String {
        match self.format {
            JsDateTimeFormat::DateOnly => value.format("%Y-%m-%d").to_string(),
            JsDateTimeFormat::DateTime => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            JsDateTimeFormat::DateTimeWithFraction => {
                // Leap seconds report 1000+ millis.
                let tenths = (value.timestamp_subsec_millis() / 100).min(9);
                format!("{}.{tenths}", value.format("%Y-%m-%d %H:%M:%S"))
            }
            JsDateTimeFormat::Iso8601 => value.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        }
    }
}

impl JsValue for JsDateTime {
    fn value_as_string(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(|value| format!("\"{}\"", self.render(value)))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample(millis: u32) -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(3600).unwrap();
        offset
            .with_ymd_and_hms(2010, 10, 20, 12, 30, 59)
            .unwrap()
            .checked_add_signed(chrono::TimeDelta::milliseconds(i64::from(millis)))
            .unwrap()
    }

    #[test]
    fn renders_every_format() {
        let value = sample(0);
        let render = |format| {
            JsDateTime::new(value, format)
                .value_as_string()
                .unwrap()
        };
        assert_eq!(render(JsDateTimeFormat::DateOnly), "\"2010-10-20\"");
        assert_eq!(render(JsDateTimeFormat::DateTime), "\"2010-10-20 12:30:59\"");
        assert_eq!(
            render(JsDateTimeFormat::DateTimeWithFraction),
            "\"2010-10-20 12:30:59.0\""
        );
        assert_eq!(
            render(JsDateTimeFormat::Iso8601),
            "\"2010-10-20T12:30:59+01:00\""
        );
    }

    #[test]
    fn fraction_keeps_tenths_only() {
        let value = JsDateTime::new(sample(789), JsDateTimeFormat::DateTimeWithFraction);
        assert_eq!(
            value.value_as_string().as_deref(),
            Some("\"2010-10-20 12:30:59.7\"")
        );
    }

    #[test]
    fn absent_date_renders_nothing() {
        assert_eq!(
            JsDateTime::absent(JsDateTimeFormat::Iso8601).value_as_string(),
            None
        );
    }

    #[test]
    fn plain_date_renders_date_only() {
        let date = NaiveDate::from_ymd_opt(2015, 10, 30).unwrap();
        assert_eq!(
            JsDateTime::from_date(date).value_as_string().as_deref(),
            Some("\"2015-10-30\"")
        );
    }
}
