use std::sync::OnceLock;

use crate::domain::model::{DateFormat, NumberFormat};
use crate::domain::ports::{AdapterBinding, CreatorBinding, DeserializerBinding, SerializerBinding};

/// Immutable bag of per-property behavioral overrides.
///
/// Built once through [`CustomizationBuilder`]; the frozen value has no
/// setters. Change means building a new one.
#[derive(Debug, Clone, Default)]
pub struct Customization {
    transient: bool,
    nillable: bool,
    read_name: Option<String>,
    write_name: Option<String>,
    adapter_binding: Option<AdapterBinding>,
    serializer_binding: Option<SerializerBinding>,
    deserializer_binding: Option<DeserializerBinding>,
    date_format: Option<DateFormat>,
    number_format: Option<NumberFormat>,
}

impl Customization {
    pub fn is_transient(&self) -> bool {
        self.transient
    }

    pub fn is_nillable(&self) -> bool {
        self.nillable
    }

    pub fn read_name(&self) -> Option<&str> {
        self.read_name.as_deref()
    }

    pub fn write_name(&self) -> Option<&str> {
        self.write_name.as_deref()
    }

    pub fn adapter_binding(&self) -> Option<&AdapterBinding> {
        self.adapter_binding.as_ref()
    }

    pub fn serializer_binding(&self) -> Option<&SerializerBinding> {
        self.serializer_binding.as_ref()
    }

    pub fn deserializer_binding(&self) -> Option<&DeserializerBinding> {
        self.deserializer_binding.as_ref()
    }

    pub fn date_format(&self) -> Option<&DateFormat> {
        self.date_format.as_ref()
    }

    pub fn number_format(&self) -> Option<&NumberFormat> {
        self.number_format.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct CustomizationBuilder {
    customization: Customization,
}

impl CustomizationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transient(mut self, transient: bool) -> Self {
        self.customization.transient = transient;
        self
    }

    pub fn nillable(mut self, nillable: bool) -> Self {
        self.customization.nillable = nillable;
        self
    }

    pub fn read_name(mut self, read_name: Option<String>) -> Self {
        self.customization.read_name = read_name;
        self
    }

    pub fn write_name(mut self, write_name: Option<String>) -> Self {
        self.customization.write_name = write_name;
        self
    }

    pub fn adapter_binding(mut self, binding: Option<AdapterBinding>) -> Self {
        self.customization.adapter_binding = binding;
        self
    }

    pub fn serializer_binding(mut self, binding: Option<SerializerBinding>) -> Self {
        self.customization.serializer_binding = binding;
        self
    }

    pub fn deserializer_binding(mut self, binding: Option<DeserializerBinding>) -> Self {
        self.customization.deserializer_binding = binding;
        self
    }

    pub fn date_format(mut self, format: Option<DateFormat>) -> Self {
        self.customization.date_format = format;
        self
    }

    pub fn number_format(mut self, format: Option<NumberFormat>) -> Self {
        self.customization.number_format = format;
        self
    }

    pub fn build(self) -> Customization {
        self.customization
    }

    pub fn build_class(self) -> ClassCustomization {
        ClassCustomization::new(self.customization)
    }
}

/// Type-level customization: the shared override bag plus a construction
/// strategy reference and an explicit property ordering.
///
/// The property order is the single mutable piece of the customization
/// hierarchy. It is modeled as a finalize-once slot and must be settled
/// before the owning class model is published for concurrent use.
#[derive(Debug, Clone, Default)]
pub struct ClassCustomization {
    customization: Customization,
    creator: Option<CreatorBinding>,
    property_order: OnceLock<Vec<String>>,
}

impl ClassCustomization {
    pub fn new(customization: Customization) -> Self {
        Self {
            customization,
            creator: None,
            property_order: OnceLock::new(),
        }
    }

    pub fn with_creator(mut self, creator: CreatorBinding) -> Self {
        self.creator = Some(creator);
        self
    }

    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    pub fn is_nillable(&self) -> bool {
        self.customization.is_nillable()
    }

    pub fn creator(&self) -> Option<&CreatorBinding> {
        self.creator.as_ref()
    }

    /// Finalizes the explicit property order. Returns false if an order was
    /// already set; the first order wins.
    pub fn finalize_property_order(&self, order: Vec<String>) -> bool {
        self.property_order.set(order).is_ok()
    }

    pub fn property_order(&self) -> Option<&[String]> {
        self.property_order.get().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_populates_all_fields() {
        let customization = CustomizationBuilder::new()
            .nillable(true)
            .read_name(Some("readName".to_string()))
            .write_name(Some("writeName".to_string()))
            .date_format(Some(DateFormat::new("%Y-%m-%d")))
            .number_format(Some(NumberFormat::new("#.##")))
            .build();

        assert!(!customization.is_transient());
        assert!(customization.is_nillable());
        assert_eq!(customization.read_name(), Some("readName"));
        assert_eq!(customization.write_name(), Some("writeName"));
        assert_eq!(customization.date_format().unwrap().format, "%Y-%m-%d");
        assert_eq!(customization.number_format().unwrap().pattern, "#.##");
    }

    #[test]
    fn test_default_customization_is_empty() {
        let customization = Customization::default();
        assert!(!customization.is_transient());
        assert!(!customization.is_nillable());
        assert!(customization.read_name().is_none());
        assert!(customization.adapter_binding().is_none());
        assert!(customization.serializer_binding().is_none());
    }

    #[test]
    fn test_property_order_finalizes_once() {
        let class = ClassCustomization::default();
        assert!(class.property_order().is_none());

        assert!(class.finalize_property_order(vec!["b".to_string(), "a".to_string()]));
        assert_eq!(class.property_order().unwrap(), ["b", "a"]);

        // A second attempt is rejected and leaves the first order in place.
        assert!(!class.finalize_property_order(vec!["c".to_string()]));
        assert_eq!(class.property_order().unwrap(), ["b", "a"]);
    }
}
