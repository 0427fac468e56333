use std::collections::HashMap;

use crate::config::{BindingConfig, PropertyOverrides};
use crate::domain::model::{DateFormat, NumberFormat, Property};
use crate::domain::ports::{
    AdapterBinding, DeserializerBinding, MetadataIntrospector, SerializerBinding,
};

/// [`MetadataIntrospector`] backed by declarative per-property overrides from
/// a [`BindingConfig`]. Code components (adapters, user codecs) cannot be
/// declared in configuration and always resolve to `None` here; they are
/// registered on the ambient component matcher instead.
#[derive(Debug, Clone, Default)]
pub struct DeclaredMetadata {
    properties: HashMap<String, PropertyOverrides>,
    nillable_default: bool,
}

impl DeclaredMetadata {
    pub fn new(properties: HashMap<String, PropertyOverrides>) -> Self {
        Self {
            properties,
            nillable_default: false,
        }
    }

    pub fn from_config(config: &BindingConfig) -> Self {
        Self {
            properties: config.properties.clone().unwrap_or_default(),
            nillable_default: config.nillable_default(),
        }
    }

    fn overrides(&self, property: &Property) -> Option<&PropertyOverrides> {
        self.properties.get(property.name())
    }
}

impl MetadataIntrospector for DeclaredMetadata {
    fn is_transient(&self, property: &Property) -> bool {
        self.overrides(property)
            .and_then(|o| o.transient)
            .unwrap_or(false)
    }

    fn read_name(&self, property: &Property) -> Option<String> {
        self.overrides(property).and_then(|o| o.read_name.clone())
    }

    fn write_name(&self, property: &Property) -> Option<String> {
        self.overrides(property).and_then(|o| o.write_name.clone())
    }

    fn is_nillable(&self, property: &Property) -> bool {
        self.overrides(property)
            .and_then(|o| o.nillable)
            .unwrap_or(self.nillable_default)
    }

    fn adapter_binding(&self, _property: &Property) -> Option<AdapterBinding> {
        None
    }

    fn serializer_binding(&self, _property: &Property) -> Option<SerializerBinding> {
        None
    }

    fn deserializer_binding(&self, _property: &Property) -> Option<DeserializerBinding> {
        None
    }

    fn date_format(&self, property: &Property) -> Option<DateFormat> {
        self.overrides(property)
            .and_then(|o| o.date_format.as_deref())
            .map(DateFormat::new)
    }

    fn number_format(&self, property: &Property) -> Option<NumberFormat> {
        self.overrides(property)
            .and_then(|o| o.number_format.as_deref())
            .map(NumberFormat::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::model::RecordAccessor;

    fn sample_property(name: &str) -> Property {
        Property::new::<String>(name, RecordAccessor::shared(name))
    }

    #[test]
    fn test_unlisted_property_has_no_overrides() {
        let metadata = DeclaredMetadata::default();
        let property = sample_property("firstName");

        assert!(!metadata.is_transient(&property));
        assert!(!metadata.is_nillable(&property));
        assert!(metadata.read_name(&property).is_none());
        assert!(metadata.write_name(&property).is_none());
        assert!(metadata.date_format(&property).is_none());
    }

    #[test]
    fn test_overrides_are_looked_up_by_property_name() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "firstName".to_string(),
            PropertyOverrides {
                read_name: Some("fn".to_string()),
                transient: Some(true),
                ..Default::default()
            },
        );
        let metadata = DeclaredMetadata::new(overrides);

        let listed = sample_property("firstName");
        assert!(metadata.is_transient(&listed));
        assert_eq!(metadata.read_name(&listed).as_deref(), Some("fn"));

        let other = sample_property("lastName");
        assert!(!metadata.is_transient(&other));
        assert!(metadata.read_name(&other).is_none());
    }

    #[test]
    fn test_class_level_nillable_applies_when_property_is_silent() {
        let config = BindingConfig::from_toml_str(
            r#"
[binding]
nillable = true

[properties.name]
nillable = false
"#,
        )
        .unwrap();
        let metadata = DeclaredMetadata::from_config(&config);

        assert!(!metadata.is_nillable(&sample_property("name")));
        assert!(metadata.is_nillable(&sample_property("other")));
    }

    #[test]
    fn test_code_component_bindings_are_never_declared() {
        let metadata = DeclaredMetadata::default();
        let property = sample_property("value");

        assert!(metadata.adapter_binding(&property).is_none());
        assert!(metadata.serializer_binding(&property).is_none());
        assert!(metadata.deserializer_binding(&property).is_none());
    }
}
