// Concrete temporal codecs. ISO grammars follow the type: an offset
// timestamp uses RFC 3339, a plain date uses the calendar date form, and so
// on. Types without a date component cannot round-trip through epoch
// milliseconds and say so instead of producing a wrong value.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::serializer::datetime::TemporalCodec;
use crate::utils::error::{BindingError, Result};

fn utc_from_millis(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or(BindingError::EpochMillisOutOfRange { millis })
}

pub struct OffsetDateTimeCodec;

impl TemporalCodec for OffsetDateTimeCodec {
    type Value = DateTime<FixedOffset>;

    const NAME: &'static str = "DateTime<FixedOffset>";

    fn to_epoch_millis(value: &Self::Value) -> Result<i64> {
        Ok(value.timestamp_millis())
    }

    fn from_epoch_millis(millis: i64) -> Result<Self::Value> {
        Ok(utc_from_millis(millis)?.fixed_offset())
    }

    fn format_iso(value: &Self::Value) -> String {
        value.to_rfc3339()
    }

    fn parse_iso(text: &str) -> Result<Self::Value> {
        Ok(DateTime::parse_from_rfc3339(text)?)
    }

    fn format_with(value: &Self::Value, format: &str) -> String {
        value.format(format).to_string()
    }

    fn parse_with(text: &str, format: &str) -> Result<Self::Value> {
        Ok(DateTime::parse_from_str(text, format)?)
    }
}

pub struct UtcDateTimeCodec;

impl TemporalCodec for UtcDateTimeCodec {
    type Value = DateTime<Utc>;

    const NAME: &'static str = "DateTime<Utc>";

    fn to_epoch_millis(value: &Self::Value) -> Result<i64> {
        Ok(value.timestamp_millis())
    }

    fn from_epoch_millis(millis: i64) -> Result<Self::Value> {
        utc_from_millis(millis)
    }

    fn format_iso(value: &Self::Value) -> String {
        value.to_rfc3339()
    }

    fn parse_iso(text: &str) -> Result<Self::Value> {
        Ok(DateTime::parse_from_rfc3339(text)?.with_timezone(&Utc))
    }

    fn format_with(value: &Self::Value, format: &str) -> String {
        value.format(format).to_string()
    }

    fn parse_with(text: &str, format: &str) -> Result<Self::Value> {
        // Custom formats for an absolute timestamp must carry an offset.
        Ok(DateTime::parse_from_str(text, format)?.with_timezone(&Utc))
    }
}

pub struct NaiveDateTimeCodec;

impl TemporalCodec for NaiveDateTimeCodec {
    type Value = NaiveDateTime;

    const NAME: &'static str = "NaiveDateTime";

    fn to_epoch_millis(value: &Self::Value) -> Result<i64> {
        Ok(value.and_utc().timestamp_millis())
    }

    fn from_epoch_millis(millis: i64) -> Result<Self::Value> {
        Ok(utc_from_millis(millis)?.naive_utc())
    }

    fn format_iso(value: &Self::Value) -> String {
        value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
    }

    fn parse_iso(text: &str) -> Result<Self::Value> {
        Ok(NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")?)
    }

    fn format_with(value: &Self::Value, format: &str) -> String {
        value.format(format).to_string()
    }

    fn parse_with(text: &str, format: &str) -> Result<Self::Value> {
        Ok(NaiveDateTime::parse_from_str(text, format)?)
    }
}

pub struct NaiveDateCodec;

impl TemporalCodec for NaiveDateCodec {
    type Value = NaiveDate;

    const NAME: &'static str = "NaiveDate";

    fn to_epoch_millis(value: &Self::Value) -> Result<i64> {
        // Midnight UTC stands in for the missing time component.
        Ok(value.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
    }

    fn from_epoch_millis(millis: i64) -> Result<Self::Value> {
        Ok(utc_from_millis(millis)?.date_naive())
    }

    fn format_iso(value: &Self::Value) -> String {
        value.format("%Y-%m-%d").to_string()
    }

    fn parse_iso(text: &str) -> Result<Self::Value> {
        Ok(NaiveDate::parse_from_str(text, "%Y-%m-%d")?)
    }

    fn format_with(value: &Self::Value, format: &str) -> String {
        value.format(format).to_string()
    }

    fn parse_with(text: &str, format: &str) -> Result<Self::Value> {
        Ok(NaiveDate::parse_from_str(text, format)?)
    }
}

/// Time of day without a date component. There is no instant to derive it
/// from, so epoch mode is a configuration error for this type.
pub struct NaiveTimeCodec;

impl TemporalCodec for NaiveTimeCodec {
    type Value = NaiveTime;

    const NAME: &'static str = "NaiveTime";

    fn to_epoch_millis(_value: &Self::Value) -> Result<i64> {
        Err(BindingError::UnsupportedTemporalConversion {
            type_name: Self::NAME,
        })
    }

    fn from_epoch_millis(_millis: i64) -> Result<Self::Value> {
        Err(BindingError::UnsupportedTemporalConversion {
            type_name: Self::NAME,
        })
    }

    fn format_iso(value: &Self::Value) -> String {
        value.format("%H:%M:%S%.f").to_string()
    }

    fn parse_iso(text: &str) -> Result<Self::Value> {
        Ok(NaiveTime::parse_from_str(text, "%H:%M:%S%.f")?)
    }

    fn format_with(value: &Self::Value, format: &str) -> String {
        value.format(format).to_string()
    }

    fn parse_with(text: &str, format: &str) -> Result<Self::Value> {
        Ok(NaiveTime::parse_from_str(text, format)?)
    }
}
