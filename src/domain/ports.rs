// Collaborator ports of the binding core. Metadata discovery, value access
// and user-supplied components stay behind these interfaces so the engine
// can be driven by fakes in tests and by real hosts in production.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::core::property_model::PropertyModel;
use crate::domain::model::{BoxedValue, DateFormat, NumberFormat, Property, PropertyType};
use crate::utils::error::Result;

/// Source of per-property declarative configuration.
pub trait MetadataIntrospector: Send + Sync {
    fn is_transient(&self, property: &Property) -> bool;
    fn read_name(&self, property: &Property) -> Option<String>;
    fn write_name(&self, property: &Property) -> Option<String>;
    fn is_nillable(&self, property: &Property) -> bool;
    fn adapter_binding(&self, property: &Property) -> Option<AdapterBinding>;
    fn serializer_binding(&self, property: &Property) -> Option<SerializerBinding>;
    fn deserializer_binding(&self, property: &Property) -> Option<DeserializerBinding>;
    fn date_format(&self, property: &Property) -> Option<DateFormat>;
    fn number_format(&self, property: &Property) -> Option<NumberFormat>;
}

/// Maps a default property name to its document-facing name.
///
/// Must be pure and referentially stable: names are computed once per
/// property and cached for the lifetime of the owning class model.
pub trait NamingStrategy: Send + Sync {
    fn translate_name(&self, default_name: &str) -> String;
}

/// Ambient adapter/serializer bindings keyed by a property's declared type.
pub trait ComponentMatcher: Send + Sync {
    fn find_adapter_binding(&self, property_type: &PropertyType) -> Option<AdapterBinding>;
    fn find_serializer_binding(&self, property_type: &PropertyType) -> Option<SerializerBinding>;
    fn find_deserializer_binding(&self, property_type: &PropertyType)
        -> Option<DeserializerBinding>;
}

/// Read/write capability and access for one property slot on an instance.
pub trait PropertyAccessor: Send + Sync {
    fn is_readable(&self) -> bool;
    fn is_writable(&self) -> bool;
    fn get<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any>;
    fn set(&self, instance: &mut dyn Any, value: BoxedValue);
}

/// Turns an in-memory value into its document representation.
pub trait ValueSerializer: Send + Sync {
    fn serialize(&self, value: &dyn Any, model: &PropertyModel) -> Result<serde_json::Value>;
}

/// Turns a document value back into an in-memory value.
pub trait ValueDeserializer: Send + Sync {
    fn deserialize(&self, value: &serde_json::Value, model: &PropertyModel) -> Result<BoxedValue>;
}

/// Factory for the default serializer/deserializer pair of one closed type.
pub trait SerializerProvider: Send + Sync {
    fn provide_serializer(&self, model: &PropertyModel) -> Arc<dyn ValueSerializer>;
    fn provide_deserializer(&self, model: &PropertyModel) -> Arc<dyn ValueDeserializer>;
}

/// Explicit value transform substituted for default encoding.
pub trait TypeAdapter: Send + Sync {
    fn adapt_to_document(&self, value: &dyn Any) -> Result<serde_json::Value>;
    fn adapt_from_document(&self, value: &serde_json::Value) -> Result<BoxedValue>;
}

/// Opaque construction strategy referenced from a class customization.
pub trait InstanceCreator: Send + Sync {
    fn create_instance(&self) -> BoxedValue;
}

#[derive(Clone)]
pub struct AdapterBinding {
    pub adapter: Arc<dyn TypeAdapter>,
}

impl AdapterBinding {
    pub fn new(adapter: Arc<dyn TypeAdapter>) -> Self {
        Self { adapter }
    }
}

impl fmt::Debug for AdapterBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdapterBinding(..)")
    }
}

#[derive(Clone)]
pub struct SerializerBinding {
    pub serializer: Arc<dyn ValueSerializer>,
}

impl SerializerBinding {
    pub fn new(serializer: Arc<dyn ValueSerializer>) -> Self {
        Self { serializer }
    }
}

impl fmt::Debug for SerializerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SerializerBinding(..)")
    }
}

#[derive(Clone)]
pub struct DeserializerBinding {
    pub deserializer: Arc<dyn ValueDeserializer>,
}

impl DeserializerBinding {
    pub fn new(deserializer: Arc<dyn ValueDeserializer>) -> Self {
        Self { deserializer }
    }
}

impl fmt::Debug for DeserializerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DeserializerBinding(..)")
    }
}

#[derive(Clone)]
pub struct CreatorBinding {
    pub creator: Arc<dyn InstanceCreator>,
}

impl CreatorBinding {
    pub fn new(creator: Arc<dyn InstanceCreator>) -> Self {
        Self { creator }
    }
}

impl fmt::Debug for CreatorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CreatorBinding(..)")
    }
}
