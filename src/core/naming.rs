use std::sync::Arc;

use crate::domain::ports::NamingStrategy;

/// Keeps the default property name untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStrategy;

impl NamingStrategy for IdentityStrategy {
    fn translate_name(&self, default_name: &str) -> String {
        default_name.to_string()
    }
}

/// `camelCase` to `camel_case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaseWithUnderscoresStrategy;

impl NamingStrategy for LowerCaseWithUnderscoresStrategy {
    fn translate_name(&self, default_name: &str) -> String {
        lower_case_with_separator(default_name, '_')
    }
}

/// `camelCase` to `camel-case`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerCaseWithDashesStrategy;

impl NamingStrategy for LowerCaseWithDashesStrategy {
    fn translate_name(&self, default_name: &str) -> String {
        lower_case_with_separator(default_name, '-')
    }
}

/// `camelCase` to `CamelCase`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpperCamelCaseStrategy;

impl NamingStrategy for UpperCamelCaseStrategy {
    fn translate_name(&self, default_name: &str) -> String {
        let mut chars = default_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

fn lower_case_with_separator(name: &str, separator: char) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (index, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                result.push(separator);
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Resolves a strategy by its configuration name.
pub fn strategy_for(name: &str) -> Option<Arc<dyn NamingStrategy>> {
    match name {
        "identity" => Some(Arc::new(IdentityStrategy)),
        "lower_case_with_underscores" => Some(Arc::new(LowerCaseWithUnderscoresStrategy)),
        "lower_case_with_dashes" => Some(Arc::new(LowerCaseWithDashesStrategy)),
        "upper_camel_case" => Some(Arc::new(UpperCamelCaseStrategy)),
        _ => None,
    }
}

pub const STRATEGY_NAMES: [&str; 4] = [
    "identity",
    "lower_case_with_underscores",
    "lower_case_with_dashes",
    "upper_camel_case",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_keeps_name() {
        assert_eq!(IdentityStrategy.translate_name("firstName"), "firstName");
    }

    #[test]
    fn test_lower_case_with_underscores() {
        let strategy = LowerCaseWithUnderscoresStrategy;
        assert_eq!(strategy.translate_name("firstName"), "first_name");
        assert_eq!(strategy.translate_name("aURL"), "a_u_r_l");
        assert_eq!(strategy.translate_name("plain"), "plain");
    }

    #[test]
    fn test_lower_case_with_dashes() {
        assert_eq!(
            LowerCaseWithDashesStrategy.translate_name("createdAt"),
            "created-at"
        );
    }

    #[test]
    fn test_upper_camel_case() {
        assert_eq!(UpperCamelCaseStrategy.translate_name("firstName"), "FirstName");
        assert_eq!(UpperCamelCaseStrategy.translate_name(""), "");
    }

    #[test]
    fn test_strategies_are_stable() {
        // Names are cached at model build time, so repeated calls must agree.
        let strategy = LowerCaseWithUnderscoresStrategy;
        let first = strategy.translate_name("firstName");
        let second = strategy.translate_name("firstName");
        assert_eq!(first, second);
    }

    #[test]
    fn test_strategy_lookup_by_name() {
        for name in STRATEGY_NAMES {
            assert!(strategy_for(name).is_some(), "missing strategy: {name}");
        }
        assert!(strategy_for("screaming_snake").is_none());
    }
}
