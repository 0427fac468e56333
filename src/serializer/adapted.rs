use std::any::Any;

use crate::core::property_model::PropertyModel;
use crate::domain::model::BoxedValue;
use crate::domain::ports::{AdapterBinding, ValueDeserializer, ValueSerializer};
use crate::utils::error::Result;

/// Serializer substituting an explicit adapter for default encoding.
pub struct AdaptedObjectSerializer {
    binding: AdapterBinding,
}

impl AdaptedObjectSerializer {
    pub fn new(binding: AdapterBinding) -> Self {
        Self { binding }
    }
}

impl ValueSerializer for AdaptedObjectSerializer {
    fn serialize(&self, value: &dyn Any, model: &PropertyModel) -> Result<serde_json::Value> {
        tracing::trace!(property = model.property_name(), "serializing through adapter");
        self.binding.adapter.adapt_to_document(value)
    }
}

/// Deserializer counterpart of [`AdaptedObjectSerializer`].
pub struct AdaptedObjectDeserializer {
    binding: AdapterBinding,
}

impl AdaptedObjectDeserializer {
    pub fn new(binding: AdapterBinding) -> Self {
        Self { binding }
    }
}

impl ValueDeserializer for AdaptedObjectDeserializer {
    fn deserialize(&self, value: &serde_json::Value, model: &PropertyModel) -> Result<BoxedValue> {
        tracing::trace!(property = model.property_name(), "deserializing through adapter");
        self.binding.adapter.adapt_from_document(value)
    }
}
