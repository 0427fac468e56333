use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::ports::PropertyAccessor;

/// Owned, type-erased in-memory value.
pub type BoxedValue = Box<dyn Any + Send + Sync>;

/// Identity of a fully concrete (closed) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Declared type of a structural property.
///
/// A closed type is fully concrete at model-build time. An open type depends
/// on an unresolved generic parameter and is only known per call site, so
/// nothing may be cached against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    Closed(TypeToken),
    Open(String),
}

impl PropertyType {
    pub fn of<T: Any>() -> Self {
        PropertyType::Closed(TypeToken::of::<T>())
    }

    pub fn open(parameter: impl Into<String>) -> Self {
        PropertyType::Open(parameter.into())
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, PropertyType::Closed(_))
    }

    pub fn raw_type(&self) -> Option<TypeToken> {
        match self {
            PropertyType::Closed(token) => Some(*token),
            PropertyType::Open(_) => None,
        }
    }
}

/// Global date output mode, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormatPolicy {
    #[default]
    Iso8601,
    EpochMillis,
}

/// Explicit per-property date format (chrono format string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pub format: String,
}

impl DateFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

/// Explicit per-property number format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub pattern: String,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

/// A structural property to be modeled: a named, typed slot with an accessor.
#[derive(Clone)]
pub struct Property {
    name: String,
    property_type: PropertyType,
    accessor: Arc<dyn PropertyAccessor>,
}

impl Property {
    /// A property with a closed declared type.
    pub fn new<T: Any>(name: impl Into<String>, accessor: Arc<dyn PropertyAccessor>) -> Self {
        Self {
            name: name.into(),
            property_type: PropertyType::of::<T>(),
            accessor,
        }
    }

    /// A property whose declared type is given explicitly, e.g. an open one.
    pub fn with_type(
        name: impl Into<String>,
        property_type: PropertyType,
        accessor: Arc<dyn PropertyAccessor>,
    ) -> Self {
        Self {
            name: name.into(),
            property_type,
            accessor,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_type(&self) -> &PropertyType {
        &self.property_type
    }

    pub(crate) fn into_parts(self) -> (String, PropertyType, Arc<dyn PropertyAccessor>) {
        (self.name, self.property_type, self.accessor)
    }
}

/// Map-backed record instance: named slots holding type-erased values.
#[derive(Default)]
pub struct Record {
    fields: HashMap<String, BoxedValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.fields.insert(name.into(), Box::new(value));
    }

    pub fn insert_boxed(&mut self, name: impl Into<String>, value: BoxedValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Any + Send + Sync)> {
        self.fields.get(name).map(|value| value.as_ref())
    }

    pub fn get_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.get(name).and_then(|value| value.downcast_ref::<T>())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Accessor over a single named slot of a [`Record`] instance.
#[derive(Debug, Clone)]
pub struct RecordAccessor {
    field: String,
}

impl RecordAccessor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn shared(field: impl Into<String>) -> Arc<dyn PropertyAccessor> {
        Arc::new(Self::new(field))
    }
}

impl PropertyAccessor for RecordAccessor {
    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn get<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Any> {
        let record = instance.downcast_ref::<Record>()?;
        record.get(&self.field).map(|value| value as &dyn Any)
    }

    fn set(&self, instance: &mut dyn Any, value: BoxedValue) {
        if let Some(record) = instance.downcast_mut::<Record>() {
            record.insert_boxed(self.field.clone(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_closed_is_resolved() {
        let ty = PropertyType::of::<String>();
        assert!(ty.is_resolved());
        assert_eq!(ty.raw_type().unwrap().id(), TypeId::of::<String>());
    }

    #[test]
    fn test_property_type_open_has_no_raw_type() {
        let ty = PropertyType::open("T");
        assert!(!ty.is_resolved());
        assert!(ty.raw_type().is_none());
    }

    #[test]
    fn test_record_roundtrip() {
        let mut record = Record::new();
        record.insert("name", "wolf".to_string());
        record.insert("count", 3i64);

        assert_eq!(record.get_as::<String>("name").unwrap(), "wolf");
        assert_eq!(*record.get_as::<i64>("count").unwrap(), 3);
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_record_accessor_reads_and_writes() {
        let mut record = Record::new();
        record.insert("name", "old".to_string());

        let accessor = RecordAccessor::new("name");
        accessor.set(&mut record, Box::new("new".to_string()));

        let value = accessor.get(&record).unwrap();
        assert_eq!(value.downcast_ref::<String>().unwrap(), "new");
    }

    #[test]
    fn test_record_accessor_ignores_foreign_instance() {
        let accessor = RecordAccessor::new("name");
        let not_a_record = 42i64;
        assert!(accessor.get(&not_a_record).is_none());
    }
}
