use std::fmt;
use std::sync::Arc;

use crate::core::context::BindingContext;
use crate::core::customization::ClassCustomization;
use crate::core::ordering::{ExplicitOrderStrategy, LexicographicalOrderStrategy, PropOrderStrategy};
use crate::core::property_model::PropertyModel;
use crate::domain::model::Property;

/// Model of one bound class: its customization and the ordered property
/// models built from its structural properties.
///
/// Built once, published behind an `Arc` and shared across concurrent
/// readers. The property order is settled here, before publication.
pub struct ClassModel {
    type_name: String,
    customization: ClassCustomization,
    properties: Vec<Arc<PropertyModel>>,
}

impl ClassModel {
    pub fn new(
        type_name: impl Into<String>,
        customization: ClassCustomization,
        properties: Vec<Property>,
        ctx: &BindingContext,
    ) -> Arc<Self> {
        let type_name = type_name.into();
        tracing::debug!(
            class = %type_name,
            properties = properties.len(),
            "building class model"
        );

        Arc::new_cyclic(|class_model| {
            let models: Vec<Arc<PropertyModel>> = properties
                .into_iter()
                .map(|property| {
                    Arc::new(PropertyModel::new(
                        class_model.clone(),
                        &customization,
                        property,
                        ctx,
                    ))
                })
                .collect();

            let strategy: Box<dyn PropOrderStrategy> = match customization.property_order() {
                Some(order) => Box::new(ExplicitOrderStrategy::new(order.to_vec())),
                None => Box::new(LexicographicalOrderStrategy),
            };
            let properties = strategy.sort_properties(models);

            Self {
                type_name,
                customization,
                properties,
            }
        })
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn customization(&self) -> &ClassCustomization {
        &self.customization
    }

    /// Properties in their effective document order.
    pub fn properties(&self) -> &[Arc<PropertyModel>] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Arc<PropertyModel>> {
        self.properties
            .iter()
            .find(|model| model.property_name() == name)
    }
}

impl fmt::Debug for ClassModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassModel")
            .field("type_name", &self.type_name)
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RecordAccessor;

    fn properties(names: &[&str]) -> Vec<Property> {
        names
            .iter()
            .map(|name| Property::new::<String>(*name, RecordAccessor::shared(*name)))
            .collect()
    }

    #[test]
    fn test_properties_sorted_alphabetically_by_default() {
        let ctx = BindingContext::default();
        let model = ClassModel::new(
            "Person",
            ClassCustomization::default(),
            properties(&["name", "age", "email"]),
            &ctx,
        );

        let order: Vec<&str> = model
            .properties()
            .iter()
            .map(|p| p.property_name())
            .collect();
        assert_eq!(order, ["age", "email", "name"]);
    }

    #[test]
    fn test_explicit_property_order_applies_with_fallback() {
        let customization = ClassCustomization::default();
        assert!(customization.finalize_property_order(vec!["c".to_string()]));

        let ctx = BindingContext::default();
        let model = ClassModel::new("Ordered", customization, properties(&["a", "b", "c"]), &ctx);

        let order: Vec<&str> = model
            .properties()
            .iter()
            .map(|p| p.property_name())
            .collect();
        assert_eq!(order, ["c", "a", "b"]);
    }

    #[test]
    fn test_property_lookup_by_name() {
        let ctx = BindingContext::default();
        let model = ClassModel::new(
            "Person",
            ClassCustomization::default(),
            properties(&["name"]),
            &ctx,
        );

        assert!(model.property("name").is_some());
        assert!(model.property("missing").is_none());
    }

    #[test]
    fn test_property_back_reference_reaches_owner() {
        let ctx = BindingContext::default();
        let model = ClassModel::new(
            "Person",
            ClassCustomization::default(),
            properties(&["name"]),
            &ctx,
        );

        let owner = model.property("name").unwrap().class_model().unwrap();
        assert_eq!(owner.type_name(), "Person");
    }
}
