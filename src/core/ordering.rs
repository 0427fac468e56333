use std::sync::Arc;

use crate::core::property_model::PropertyModel;

/// Ordering policy over the properties of a class model.
pub trait PropOrderStrategy: Send + Sync {
    fn sort_properties(&self, properties: Vec<Arc<PropertyModel>>) -> Vec<Arc<PropertyModel>>;
}

/// Default policy: lexicographic ascending by property name, delegating to
/// the model's natural ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicographicalOrderStrategy;

impl PropOrderStrategy for LexicographicalOrderStrategy {
    fn sort_properties(&self, mut properties: Vec<Arc<PropertyModel>>) -> Vec<Arc<PropertyModel>> {
        properties.sort();
        properties
    }
}

/// Explicit class-declared order: listed properties first, in literal order.
/// Properties the list does not name are appended alphabetically rather than
/// dropped.
#[derive(Debug, Clone)]
pub struct ExplicitOrderStrategy {
    order: Vec<String>,
}

impl ExplicitOrderStrategy {
    pub fn new(order: Vec<String>) -> Self {
        Self { order }
    }
}

impl PropOrderStrategy for ExplicitOrderStrategy {
    fn sort_properties(&self, mut properties: Vec<Arc<PropertyModel>>) -> Vec<Arc<PropertyModel>> {
        let mut sorted = Vec::with_capacity(properties.len());
        for name in &self.order {
            if let Some(position) = properties
                .iter()
                .position(|model| model.property_name() == name)
            {
                sorted.push(properties.remove(position));
            }
        }
        properties.sort();
        sorted.extend(properties);
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::BindingContext;
    use crate::core::customization::ClassCustomization;
    use crate::domain::model::{Property, RecordAccessor};
    use std::sync::Weak;

    fn models(names: &[&str]) -> Vec<Arc<PropertyModel>> {
        let ctx = BindingContext::default();
        let class = ClassCustomization::default();
        names
            .iter()
            .map(|name| {
                Arc::new(PropertyModel::new(
                    Weak::new(),
                    &class,
                    Property::new::<String>(*name, RecordAccessor::shared(*name)),
                    &ctx,
                ))
            })
            .collect()
    }

    fn names(models: &[Arc<PropertyModel>]) -> Vec<&str> {
        models.iter().map(|model| model.property_name()).collect()
    }

    #[test]
    fn test_lexicographical_order() {
        let sorted = LexicographicalOrderStrategy.sort_properties(models(&["b", "c", "a"]));
        assert_eq!(names(&sorted), ["a", "b", "c"]);
    }

    #[test]
    fn test_explicit_order_with_alphabetical_fallback() {
        let strategy = ExplicitOrderStrategy::new(vec!["c".to_string()]);
        let sorted = strategy.sort_properties(models(&["a", "b", "c"]));
        assert_eq!(names(&sorted), ["c", "a", "b"]);
    }

    #[test]
    fn test_explicit_order_ignores_unknown_names() {
        let strategy =
            ExplicitOrderStrategy::new(vec!["missing".to_string(), "b".to_string()]);
        let sorted = strategy.sort_properties(models(&["a", "b"]));
        assert_eq!(names(&sorted), ["b", "a"]);
    }

    #[test]
    fn test_explicit_order_never_drops_properties() {
        let strategy = ExplicitOrderStrategy::new(vec!["z".to_string()]);
        let sorted = strategy.sort_properties(models(&["z", "y", "x", "w"]));
        assert_eq!(names(&sorted), ["z", "w", "x", "y"]);
    }
}
