pub mod config;
pub mod core;
pub mod domain;
pub mod serializer;
pub mod utils;

pub use config::BindingConfig;
pub use core::{
    class_model::ClassModel, context::BindingContext, property_model::PropertyModel,
};
pub use domain::model::{Property, Record, RecordAccessor};
pub use utils::error::{BindingError, Result};
