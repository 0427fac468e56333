pub mod class_model;
pub mod context;
pub mod customization;
pub mod matcher;
pub mod naming;
pub mod ordering;
pub mod property_model;
pub mod registry;

pub use crate::domain::model::{
    BoxedValue, DateFormat, DateFormatPolicy, NumberFormat, Property, PropertyType, Record,
    RecordAccessor, TypeToken,
};
pub use crate::domain::ports::{
    ComponentMatcher, MetadataIntrospector, NamingStrategy, PropertyAccessor, SerializerProvider,
    TypeAdapter, ValueDeserializer, ValueSerializer,
};
pub use crate::utils::error::Result;
pub use class_model::ClassModel;
pub use context::BindingContext;
pub use customization::{ClassCustomization, Customization, CustomizationBuilder};
pub use matcher::ComponentRegistry;
pub use property_model::PropertyModel;
