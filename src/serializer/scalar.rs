// Default codecs for scalar value types. These back the default-serializer
// registry; explicit per-property bindings always take precedence over them.

use std::any::Any;

use serde_json::Value;

use crate::core::property_model::PropertyModel;
use crate::domain::model::BoxedValue;
use crate::domain::ports::{ValueDeserializer, ValueSerializer};
use crate::utils::error::{BindingError, Result};

pub struct StringSerializer;

impl ValueSerializer for StringSerializer {
    fn serialize(&self, value: &dyn Any, _model: &PropertyModel) -> Result<Value> {
        let text = value
            .downcast_ref::<String>()
            .ok_or(BindingError::ValueTypeMismatch { expected: "String" })?;
        Ok(Value::String(text.clone()))
    }
}

pub struct StringDeserializer;

impl ValueDeserializer for StringDeserializer {
    fn deserialize(&self, value: &Value, _model: &PropertyModel) -> Result<BoxedValue> {
        let text = value
            .as_str()
            .ok_or(BindingError::DocumentTypeMismatch { expected: "string" })?;
        Ok(Box::new(text.to_string()))
    }
}

pub struct I64Serializer;

impl ValueSerializer for I64Serializer {
    fn serialize(&self, value: &dyn Any, _model: &PropertyModel) -> Result<Value> {
        let number = value
            .downcast_ref::<i64>()
            .ok_or(BindingError::ValueTypeMismatch { expected: "i64" })?;
        Ok(Value::Number((*number).into()))
    }
}

pub struct I64Deserializer;

impl ValueDeserializer for I64Deserializer {
    fn deserialize(&self, value: &Value, _model: &PropertyModel) -> Result<BoxedValue> {
        let number = value
            .as_i64()
            .ok_or(BindingError::DocumentTypeMismatch { expected: "number" })?;
        Ok(Box::new(number))
    }
}

pub struct F64Serializer;

impl ValueSerializer for F64Serializer {
    fn serialize(&self, value: &dyn Any, _model: &PropertyModel) -> Result<Value> {
        let number = value
            .downcast_ref::<f64>()
            .ok_or(BindingError::ValueTypeMismatch { expected: "f64" })?;
        let number = serde_json::Number::from_f64(*number).ok_or(
            BindingError::DocumentTypeMismatch {
                expected: "finite number",
            },
        )?;
        Ok(Value::Number(number))
    }
}

pub struct F64Deserializer;

impl ValueDeserializer for F64Deserializer {
    fn deserialize(&self, value: &Value, _model: &PropertyModel) -> Result<BoxedValue> {
        let number = value
            .as_f64()
            .ok_or(BindingError::DocumentTypeMismatch { expected: "number" })?;
        Ok(Box::new(number))
    }
}

pub struct BoolSerializer;

impl ValueSerializer for BoolSerializer {
    fn serialize(&self, value: &dyn Any, _model: &PropertyModel) -> Result<Value> {
        let flag = value
            .downcast_ref::<bool>()
            .ok_or(BindingError::ValueTypeMismatch { expected: "bool" })?;
        Ok(Value::Bool(*flag))
    }
}

pub struct BoolDeserializer;

impl ValueDeserializer for BoolDeserializer {
    fn deserialize(&self, value: &Value, _model: &PropertyModel) -> Result<BoxedValue> {
        let flag = value
            .as_bool()
            .ok_or(BindingError::DocumentTypeMismatch { expected: "boolean" })?;
        Ok(Box::new(flag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::BindingContext;
    use crate::core::customization::ClassCustomization;
    use crate::domain::model::{Property, RecordAccessor};
    use std::sync::Weak;

    fn model_for<T: Any>(name: &str) -> PropertyModel {
        PropertyModel::new(
            Weak::new(),
            &ClassCustomization::default(),
            Property::new::<T>(name, RecordAccessor::shared(name)),
            &BindingContext::default(),
        )
    }

    #[test]
    fn test_string_roundtrip() {
        let model = model_for::<String>("name");
        let value = "wolf".to_string();

        let document = StringSerializer.serialize(&value, &model).unwrap();
        assert_eq!(document, serde_json::json!("wolf"));

        let restored = StringDeserializer.deserialize(&document, &model).unwrap();
        assert_eq!(restored.downcast_ref::<String>().unwrap(), "wolf");
    }

    #[test]
    fn test_i64_roundtrip() {
        let model = model_for::<i64>("count");
        let document = I64Serializer.serialize(&42i64, &model).unwrap();
        assert_eq!(document, serde_json::json!(42));

        let restored = I64Deserializer.deserialize(&document, &model).unwrap();
        assert_eq!(*restored.downcast_ref::<i64>().unwrap(), 42);
    }

    #[test]
    fn test_f64_rejects_non_finite_values() {
        let model = model_for::<f64>("ratio");
        assert!(F64Serializer.serialize(&f64::NAN, &model).is_err());
        assert_eq!(
            F64Serializer.serialize(&1.5f64, &model).unwrap(),
            serde_json::json!(1.5)
        );
    }

    #[test]
    fn test_bool_roundtrip() {
        let model = model_for::<bool>("active");
        let document = BoolSerializer.serialize(&true, &model).unwrap();
        assert_eq!(document, serde_json::json!(true));

        let restored = BoolDeserializer.deserialize(&document, &model).unwrap();
        assert!(*restored.downcast_ref::<bool>().unwrap());
    }

    #[test]
    fn test_type_mismatch_errors() {
        let model = model_for::<String>("name");

        let wrong_value = 42i64;
        let err = StringSerializer.serialize(&wrong_value, &model).unwrap_err();
        assert!(matches!(err, BindingError::ValueTypeMismatch { .. }));

        let err = StringDeserializer
            .deserialize(&serde_json::json!(42), &model)
            .unwrap_err();
        assert!(matches!(err, BindingError::DocumentTypeMismatch { .. }));
    }
}
