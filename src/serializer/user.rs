use std::any::Any;

use crate::core::property_model::PropertyModel;
use crate::domain::model::BoxedValue;
use crate::domain::ports::{DeserializerBinding, SerializerBinding, ValueDeserializer, ValueSerializer};
use crate::utils::error::Result;

/// Serializer delegating to a user-supplied codec binding.
pub struct UserCodecSerializer {
    binding: SerializerBinding,
}

impl UserCodecSerializer {
    pub fn new(binding: SerializerBinding) -> Self {
        Self { binding }
    }
}

impl ValueSerializer for UserCodecSerializer {
    fn serialize(&self, value: &dyn Any, model: &PropertyModel) -> Result<serde_json::Value> {
        tracing::trace!(property = model.property_name(), "serializing through user codec");
        self.binding.serializer.serialize(value, model)
    }
}

/// Deserializer delegating to a user-supplied codec binding.
pub struct UserCodecDeserializer {
    binding: DeserializerBinding,
}

impl UserCodecDeserializer {
    pub fn new(binding: DeserializerBinding) -> Self {
        Self { binding }
    }
}

impl ValueDeserializer for UserCodecDeserializer {
    fn deserialize(&self, value: &serde_json::Value, model: &PropertyModel) -> Result<BoxedValue> {
        tracing::trace!(property = model.property_name(), "deserializing through user codec");
        self.binding.deserializer.deserialize(value, model)
    }
}
