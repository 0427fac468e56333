use std::any::Any;
use std::marker::PhantomData;

use serde_json::Value;

use crate::core::property_model::PropertyModel;
use crate::domain::model::{BoxedValue, DateFormatPolicy};
use crate::domain::ports::{ValueDeserializer, ValueSerializer};
use crate::utils::error::{BindingError, Result};

/// One temporal value type and its conversions.
///
/// Each codec supplies its own ISO formatter and its own instant conversion;
/// a type with no date component cannot be derived from an absolute instant
/// and reports `UnsupportedTemporalConversion` from the epoch conversions.
pub trait TemporalCodec: Send + Sync + 'static {
    type Value: Any + Send + Sync;

    const NAME: &'static str;

    fn to_epoch_millis(value: &Self::Value) -> Result<i64>;
    fn from_epoch_millis(millis: i64) -> Result<Self::Value>;
    fn format_iso(value: &Self::Value) -> String;
    fn parse_iso(text: &str) -> Result<Self::Value>;
    fn format_with(value: &Self::Value, format: &str) -> String;
    fn parse_with(text: &str, format: &str) -> Result<Self::Value>;
}

/// Serializer over one temporal codec.
///
/// The format policy is read from the owning property model at every call:
/// explicit per-property format first, then the configured default mode
/// (ISO-8601 text or epoch milliseconds).
pub struct DateTimeSerializer<C: TemporalCodec> {
    _codec: PhantomData<C>,
}

impl<C: TemporalCodec> DateTimeSerializer<C> {
    pub fn new() -> Self {
        Self {
            _codec: PhantomData,
        }
    }
}

impl<C: TemporalCodec> Default for DateTimeSerializer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TemporalCodec> ValueSerializer for DateTimeSerializer<C> {
    fn serialize(&self, value: &dyn Any, model: &PropertyModel) -> Result<Value> {
        let value = value
            .downcast_ref::<C::Value>()
            .ok_or(BindingError::ValueTypeMismatch { expected: C::NAME })?;

        if let Some(date_format) = model.customization().date_format() {
            return Ok(Value::String(C::format_with(value, &date_format.format)));
        }
        match model.date_format_policy() {
            DateFormatPolicy::Iso8601 => Ok(Value::String(C::format_iso(value))),
            DateFormatPolicy::EpochMillis => Ok(Value::Number(C::to_epoch_millis(value)?.into())),
        }
    }
}

/// Deserializer mirror of [`DateTimeSerializer`].
pub struct DateTimeDeserializer<C: TemporalCodec> {
    _codec: PhantomData<C>,
}

impl<C: TemporalCodec> DateTimeDeserializer<C> {
    pub fn new() -> Self {
        Self {
            _codec: PhantomData,
        }
    }
}

impl<C: TemporalCodec> Default for DateTimeDeserializer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TemporalCodec> ValueDeserializer for DateTimeDeserializer<C> {
    fn deserialize(&self, value: &Value, model: &PropertyModel) -> Result<BoxedValue> {
        if let Some(date_format) = model.customization().date_format() {
            let text = value
                .as_str()
                .ok_or(BindingError::DocumentTypeMismatch { expected: "string" })?;
            return Ok(Box::new(C::parse_with(text, &date_format.format)?));
        }
        match model.date_format_policy() {
            DateFormatPolicy::Iso8601 => {
                let text = value
                    .as_str()
                    .ok_or(BindingError::DocumentTypeMismatch { expected: "string" })?;
                Ok(Box::new(C::parse_iso(text)?))
            }
            DateFormatPolicy::EpochMillis => {
                let millis = value
                    .as_i64()
                    .ok_or(BindingError::DocumentTypeMismatch { expected: "number" })?;
                Ok(Box::new(C::from_epoch_millis(millis)?))
            }
        }
    }
}
