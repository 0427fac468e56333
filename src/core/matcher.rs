use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::model::PropertyType;
use crate::domain::ports::{
    AdapterBinding, ComponentMatcher, DeserializerBinding, SerializerBinding, TypeAdapter,
    ValueDeserializer, ValueSerializer,
};

/// In-process registry of ambient component bindings, keyed by closed type.
///
/// Populated at context initialization, read-only afterwards. Open property
/// types never match: there is no concrete type to key on.
#[derive(Default)]
pub struct ComponentRegistry {
    adapters: HashMap<TypeId, AdapterBinding>,
    serializers: HashMap<TypeId, SerializerBinding>,
    deserializers: HashMap<TypeId, DeserializerBinding>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_adapter<T: Any>(&mut self, adapter: Arc<dyn TypeAdapter>) {
        self.adapters
            .insert(TypeId::of::<T>(), AdapterBinding::new(adapter));
    }

    pub fn register_serializer<T: Any>(&mut self, serializer: Arc<dyn ValueSerializer>) {
        self.serializers
            .insert(TypeId::of::<T>(), SerializerBinding::new(serializer));
    }

    pub fn register_deserializer<T: Any>(&mut self, deserializer: Arc<dyn ValueDeserializer>) {
        self.deserializers
            .insert(TypeId::of::<T>(), DeserializerBinding::new(deserializer));
    }
}

impl ComponentMatcher for ComponentRegistry {
    fn find_adapter_binding(&self, property_type: &PropertyType) -> Option<AdapterBinding> {
        let token = property_type.raw_type()?;
        self.adapters.get(&token.id()).cloned()
    }

    fn find_serializer_binding(&self, property_type: &PropertyType) -> Option<SerializerBinding> {
        let token = property_type.raw_type()?;
        self.serializers.get(&token.id()).cloned()
    }

    fn find_deserializer_binding(
        &self,
        property_type: &PropertyType,
    ) -> Option<DeserializerBinding> {
        let token = property_type.raw_type()?;
        self.deserializers.get(&token.id()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::Result;
    use crate::core::property_model::PropertyModel;
    use crate::domain::model::BoxedValue;

    struct StubAdapter;

    impl TypeAdapter for StubAdapter {
        fn adapt_to_document(&self, _value: &dyn Any) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }

        fn adapt_from_document(&self, _value: &serde_json::Value) -> Result<BoxedValue> {
            Ok(Box::new(()))
        }
    }

    struct StubSerializer;

    impl ValueSerializer for StubSerializer {
        fn serialize(&self, _value: &dyn Any, _model: &PropertyModel) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }
    }

    #[test]
    fn test_adapter_lookup_by_closed_type() {
        let mut registry = ComponentRegistry::new();
        registry.register_adapter::<String>(Arc::new(StubAdapter));

        assert!(registry
            .find_adapter_binding(&PropertyType::of::<String>())
            .is_some());
        assert!(registry
            .find_adapter_binding(&PropertyType::of::<i64>())
            .is_none());
    }

    #[test]
    fn test_open_type_never_matches() {
        let mut registry = ComponentRegistry::new();
        registry.register_adapter::<String>(Arc::new(StubAdapter));
        registry.register_serializer::<String>(Arc::new(StubSerializer));

        let open = PropertyType::open("T");
        assert!(registry.find_adapter_binding(&open).is_none());
        assert!(registry.find_serializer_binding(&open).is_none());
        assert!(registry.find_deserializer_binding(&open).is_none());
    }
}
