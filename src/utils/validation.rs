use crate::utils::error::{BindingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(BindingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Allowed values: {}", allowed.join(", ")),
    })
}

pub fn validate_not_empty(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BindingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_one_of_accepts_listed_value() {
        assert!(validate_one_of("binding.date_format", "iso8601", &["iso8601", "epoch-millis"]).is_ok());
    }

    #[test]
    fn test_validate_one_of_rejects_unknown_value() {
        let err = validate_one_of("binding.date_format", "rfc1123", &["iso8601", "epoch-millis"])
            .unwrap_err();
        match err {
            BindingError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "binding.date_format");
                assert_eq!(value, "rfc1123");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("properties.name.read_name", "fullName").is_ok());
        assert!(validate_not_empty("properties.name.read_name", "").is_err());
    }
}
