use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use crate::core::class_model::ClassModel;
use crate::core::context::BindingContext;
use crate::core::customization::{ClassCustomization, Customization, CustomizationBuilder};
use crate::core::registry::default_serializers;
use crate::domain::model::{BoxedValue, DateFormatPolicy, Property, PropertyType};
use crate::domain::ports::{
    AdapterBinding, DeserializerBinding, NamingStrategy, PropertyAccessor, SerializerBinding,
    ValueDeserializer, ValueSerializer,
};
use crate::serializer::adapted::{AdaptedObjectDeserializer, AdaptedObjectSerializer};
use crate::serializer::user::{UserCodecDeserializer, UserCodecSerializer};
use crate::utils::error::{BindingError, Result};

/// Model of one structural property of a class.
///
/// Introspected exactly once when the owning [`ClassModel`] is built:
/// the effective read/write names, the merged customization and (when the
/// declared type is closed) a cached serializer are all computed here and
/// never change afterwards.
pub struct PropertyModel {
    property_name: String,
    read_name: String,
    write_name: String,
    property_type: PropertyType,
    class_model: Weak<ClassModel>,
    customization: Customization,
    accessor: Arc<dyn PropertyAccessor>,
    date_format_policy: DateFormatPolicy,
    serializer: Option<Arc<dyn ValueSerializer>>,
}

impl PropertyModel {
    pub fn new(
        class_model: Weak<ClassModel>,
        class_customization: &ClassCustomization,
        property: Property,
        ctx: &BindingContext,
    ) -> Self {
        let customization = introspect_customization(&property, class_customization, ctx);
        let read_name = calculate_name(
            customization.read_name(),
            ctx.naming_strategy().as_ref(),
            property.name(),
        );
        let write_name = calculate_name(
            customization.write_name(),
            ctx.naming_strategy().as_ref(),
            property.name(),
        );
        let (property_name, property_type, accessor) = property.into_parts();

        let mut model = Self {
            property_name,
            read_name,
            write_name,
            property_type,
            class_model,
            customization,
            accessor,
            date_format_policy: ctx.date_format_policy(),
            serializer: None,
        };
        model.serializer = model.resolve_cached_serializer();
        model
    }

    /// Tries to bind a serializer for the lifetime of this model.
    ///
    /// Caching is only sound when the declared type cannot change at runtime.
    /// An open type may bind to a different concrete type per call site, so
    /// its resolution is deferred to each write.
    fn resolve_cached_serializer(&self) -> Option<Arc<dyn ValueSerializer>> {
        if !self.property_type.is_resolved() {
            tracing::debug!(
                property = %self.property_name,
                "open property type, serializer resolution deferred to write time"
            );
            return None;
        }
        if let Some(binding) = self.customization.adapter_binding() {
            tracing::debug!(property = %self.property_name, "caching adapter-backed serializer");
            return Some(Arc::new(AdaptedObjectSerializer::new(binding.clone())));
        }
        if let Some(binding) = self.customization.serializer_binding() {
            tracing::debug!(property = %self.property_name, "caching user-codec serializer");
            return Some(Arc::new(UserCodecSerializer::new(binding.clone())));
        }

        let token = self.property_type.raw_type()?;
        default_serializers()
            .find_provider(token.id())
            .map(|provider| provider.provide_serializer(self))
    }

    /// Reads the property from an instance. Not-readable properties yield
    /// `None`; this is policy, not an error.
    pub fn get_value<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any> {
        if !self.is_readable() {
            return None;
        }
        self.accessor.get(instance)
    }

    /// Writes the property on an instance. A not-writable property is
    /// silently ignored.
    pub fn set_value(&self, instance: &mut dyn Any, value: BoxedValue) {
        if !self.is_writable() {
            return;
        }
        self.accessor.set(instance, value);
    }

    pub fn is_readable(&self) -> bool {
        !self.customization.is_transient() && self.accessor.is_readable()
    }

    pub fn is_writable(&self) -> bool {
        !self.customization.is_transient() && self.accessor.is_writable()
    }

    /// Serializes a value through the cached serializer, falling back to
    /// dynamic dispatch against the runtime value's type when nothing could
    /// be cached.
    pub fn serialize_value(&self, value: &dyn Any) -> Result<serde_json::Value> {
        if let Some(serializer) = &self.serializer {
            return serializer.serialize(value, self);
        }
        let provider = default_serializers()
            .find_provider(value.type_id())
            .ok_or_else(|| BindingError::MissingSerializer {
                property: self.property_name.clone(),
            })?;
        provider.provide_serializer(self).serialize(value, self)
    }

    /// Deserializes a document value, honoring the same precedence as the
    /// serializer chain: adapter, then explicit user codec, then defaults
    /// keyed by the closed declared type.
    pub fn deserialize_value(&self, value: &serde_json::Value) -> Result<BoxedValue> {
        if let Some(deserializer) = self.resolve_deserializer() {
            return deserializer.deserialize(value, self);
        }
        Err(BindingError::MissingDeserializer {
            property: self.property_name.clone(),
        })
    }

    fn resolve_deserializer(&self) -> Option<Arc<dyn ValueDeserializer>> {
        if let Some(binding) = self.customization.adapter_binding() {
            return Some(Arc::new(AdaptedObjectDeserializer::new(binding.clone())));
        }
        if let Some(binding) = self.customization.deserializer_binding() {
            return Some(Arc::new(UserCodecDeserializer::new(binding.clone())));
        }
        let token = self.property_type.raw_type()?;
        default_serializers()
            .find_provider(token.id())
            .map(|provider| provider.provide_deserializer(self))
    }

    /// Default name identifying this property within its class model.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Name used when reading a document.
    pub fn read_name(&self) -> &str {
        &self.read_name
    }

    /// Name used when writing a document.
    pub fn write_name(&self) -> &str {
        &self.write_name
    }

    pub fn property_type(&self) -> &PropertyType {
        &self.property_type
    }

    pub fn class_model(&self) -> Option<Arc<ClassModel>> {
        self.class_model.upgrade()
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    pub fn cached_serializer(&self) -> Option<&Arc<dyn ValueSerializer>> {
        self.serializer.as_ref()
    }

    pub fn date_format_policy(&self) -> DateFormatPolicy {
        self.date_format_policy
    }
}

/// Explicit override wins verbatim; otherwise the naming strategy translates
/// the default name. The strategy must be stable since results are cached.
fn calculate_name(
    explicit_name: Option<&str>,
    strategy: &dyn NamingStrategy,
    property_name: &str,
) -> String {
    match explicit_name {
        Some(name) => name.to_string(),
        None => strategy.translate_name(property_name),
    }
}

fn introspect_customization(
    property: &Property,
    class_customization: &ClassCustomization,
    ctx: &BindingContext,
) -> Customization {
    let introspector = ctx.introspector();
    // All other declarative configuration is dropped for transient properties.
    if introspector.is_transient(property) {
        return CustomizationBuilder::new().transient(true).build();
    }
    CustomizationBuilder::new()
        .read_name(introspector.read_name(property))
        .write_name(introspector.write_name(property))
        .nillable(class_customization.is_nillable() || introspector.is_nillable(property))
        .adapter_binding(resolve_adapter_binding(property, ctx))
        .serializer_binding(resolve_serializer_binding(property, ctx))
        .deserializer_binding(resolve_deserializer_binding(property, ctx))
        .date_format(introspector.date_format(property))
        .number_format(introspector.number_format(property))
        .build()
}

fn resolve_adapter_binding(property: &Property, ctx: &BindingContext) -> Option<AdapterBinding> {
    ctx.introspector()
        .adapter_binding(property)
        .or_else(|| ctx.matcher().find_adapter_binding(property.property_type()))
}

fn resolve_serializer_binding(
    property: &Property,
    ctx: &BindingContext,
) -> Option<SerializerBinding> {
    ctx.introspector()
        .serializer_binding(property)
        .or_else(|| ctx.matcher().find_serializer_binding(property.property_type()))
}

fn resolve_deserializer_binding(
    property: &Property,
    ctx: &BindingContext,
) -> Option<DeserializerBinding> {
    ctx.introspector()
        .deserializer_binding(property)
        .or_else(|| {
            ctx.matcher()
                .find_deserializer_binding(property.property_type())
        })
}

impl fmt::Debug for PropertyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyModel")
            .field("property_name", &self.property_name)
            .field("read_name", &self.read_name)
            .field("write_name", &self.write_name)
            .field("property_type", &self.property_type)
            .field("transient", &self.customization.is_transient())
            .field("cached_serializer", &self.serializer.is_some())
            .finish_non_exhaustive()
    }
}

impl PartialEq for PropertyModel {
    fn eq(&self, other: &Self) -> bool {
        self.property_name == other.property_name
    }
}

impl Eq for PropertyModel {}

impl PartialOrd for PropertyModel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PropertyModel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.property_name.cmp(&other.property_name)
    }
}

impl Hash for PropertyModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property_name.hash(state);
    }
}
