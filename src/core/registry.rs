use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::core::property_model::PropertyModel;
use crate::domain::ports::{SerializerProvider, ValueDeserializer, ValueSerializer};
use crate::serializer::datetime::{DateTimeDeserializer, DateTimeSerializer};
use crate::serializer::scalar::{
    BoolDeserializer, BoolSerializer, F64Deserializer, F64Serializer, I64Deserializer,
    I64Serializer, StringDeserializer, StringSerializer,
};
use crate::serializer::temporal::{
    NaiveDateCodec, NaiveDateTimeCodec, NaiveTimeCodec, OffsetDateTimeCodec, UtcDateTimeCodec,
};

/// Provider wrapping one prebuilt serializer/deserializer pair.
///
/// The default codecs are stateless and read the owning property model at
/// call time, so a single shared instance per type is enough.
struct StaticProvider {
    serializer: Arc<dyn ValueSerializer>,
    deserializer: Arc<dyn ValueDeserializer>,
}

impl SerializerProvider for StaticProvider {
    fn provide_serializer(&self, _model: &PropertyModel) -> Arc<dyn ValueSerializer> {
        Arc::clone(&self.serializer)
    }

    fn provide_deserializer(&self, _model: &PropertyModel) -> Arc<dyn ValueDeserializer> {
        Arc::clone(&self.deserializer)
    }
}

/// Read-mostly lookup of default serializer providers, keyed by closed type.
pub struct DefaultSerializers {
    providers: HashMap<TypeId, Arc<dyn SerializerProvider>>,
}

impl DefaultSerializers {
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            providers: HashMap::new(),
        };

        registry.register::<String>(Arc::new(StringSerializer), Arc::new(StringDeserializer));
        registry.register::<i64>(Arc::new(I64Serializer), Arc::new(I64Deserializer));
        registry.register::<f64>(Arc::new(F64Serializer), Arc::new(F64Deserializer));
        registry.register::<bool>(Arc::new(BoolSerializer), Arc::new(BoolDeserializer));

        registry.register::<DateTime<FixedOffset>>(
            Arc::new(DateTimeSerializer::<OffsetDateTimeCodec>::new()),
            Arc::new(DateTimeDeserializer::<OffsetDateTimeCodec>::new()),
        );
        registry.register::<DateTime<Utc>>(
            Arc::new(DateTimeSerializer::<UtcDateTimeCodec>::new()),
            Arc::new(DateTimeDeserializer::<UtcDateTimeCodec>::new()),
        );
        registry.register::<NaiveDateTime>(
            Arc::new(DateTimeSerializer::<NaiveDateTimeCodec>::new()),
            Arc::new(DateTimeDeserializer::<NaiveDateTimeCodec>::new()),
        );
        registry.register::<NaiveDate>(
            Arc::new(DateTimeSerializer::<NaiveDateCodec>::new()),
            Arc::new(DateTimeDeserializer::<NaiveDateCodec>::new()),
        );
        registry.register::<NaiveTime>(
            Arc::new(DateTimeSerializer::<NaiveTimeCodec>::new()),
            Arc::new(DateTimeDeserializer::<NaiveTimeCodec>::new()),
        );

        registry
    }

    fn register<T: Any>(
        &mut self,
        serializer: Arc<dyn ValueSerializer>,
        deserializer: Arc<dyn ValueDeserializer>,
    ) {
        self.providers.insert(
            TypeId::of::<T>(),
            Arc::new(StaticProvider {
                serializer,
                deserializer,
            }),
        );
    }

    pub fn find_provider(&self, raw_type: TypeId) -> Option<Arc<dyn SerializerProvider>> {
        self.providers.get(&raw_type).cloned()
    }
}

static DEFAULT_SERIALIZERS: LazyLock<DefaultSerializers> =
    LazyLock::new(DefaultSerializers::with_defaults);

/// Process-scoped default-serializer registry, immutable after first use.
pub fn default_serializers() -> &'static DefaultSerializers {
    &DEFAULT_SERIALIZERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_scalars_and_temporals() {
        let registry = default_serializers();
        assert!(registry.find_provider(TypeId::of::<String>()).is_some());
        assert!(registry.find_provider(TypeId::of::<i64>()).is_some());
        assert!(registry.find_provider(TypeId::of::<bool>()).is_some());
        assert!(registry
            .find_provider(TypeId::of::<DateTime<FixedOffset>>())
            .is_some());
        assert!(registry.find_provider(TypeId::of::<NaiveTime>()).is_some());
    }

    #[test]
    fn test_registry_misses_unknown_types() {
        struct Unregistered;
        assert!(default_serializers()
            .find_provider(TypeId::of::<Unregistered>())
            .is_none());
    }
}
