use std::sync::Arc;

use crate::config::metadata::DeclaredMetadata;
use crate::config::BindingConfig;
use crate::core::matcher::ComponentRegistry;
use crate::core::naming;
use crate::domain::model::DateFormatPolicy;
use crate::domain::ports::{ComponentMatcher, MetadataIntrospector, NamingStrategy};
use crate::utils::error::Result;

/// Shared configuration context for building class and property models.
///
/// Assembled once, then treated as read-only while models are built.
#[derive(Clone)]
pub struct BindingContext {
    introspector: Arc<dyn MetadataIntrospector>,
    naming_strategy: Arc<dyn NamingStrategy>,
    matcher: Arc<dyn ComponentMatcher>,
    date_format_policy: DateFormatPolicy,
}

impl BindingContext {
    pub fn new(
        introspector: Arc<dyn MetadataIntrospector>,
        naming_strategy: Arc<dyn NamingStrategy>,
        matcher: Arc<dyn ComponentMatcher>,
        date_format_policy: DateFormatPolicy,
    ) -> Self {
        Self {
            introspector,
            naming_strategy,
            matcher,
            date_format_policy,
        }
    }

    /// Builds a context from a loaded configuration: naming strategy by name,
    /// config-declared property metadata, and an empty component registry.
    pub fn from_config(config: &BindingConfig) -> Result<Self> {
        Ok(Self {
            introspector: Arc::new(DeclaredMetadata::from_config(config)),
            naming_strategy: config.naming_strategy()?,
            matcher: Arc::new(ComponentRegistry::new()),
            date_format_policy: config.date_format_policy()?,
        })
    }

    pub fn with_introspector(mut self, introspector: Arc<dyn MetadataIntrospector>) -> Self {
        self.introspector = introspector;
        self
    }

    pub fn with_naming_strategy(mut self, naming_strategy: Arc<dyn NamingStrategy>) -> Self {
        self.naming_strategy = naming_strategy;
        self
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn ComponentMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_date_format_policy(mut self, policy: DateFormatPolicy) -> Self {
        self.date_format_policy = policy;
        self
    }

    pub fn introspector(&self) -> &Arc<dyn MetadataIntrospector> {
        &self.introspector
    }

    pub fn naming_strategy(&self) -> &Arc<dyn NamingStrategy> {
        &self.naming_strategy
    }

    pub fn matcher(&self) -> &Arc<dyn ComponentMatcher> {
        &self.matcher
    }

    pub fn date_format_policy(&self) -> DateFormatPolicy {
        self.date_format_policy
    }
}

impl Default for BindingContext {
    fn default() -> Self {
        Self {
            introspector: Arc::new(DeclaredMetadata::default()),
            naming_strategy: Arc::new(naming::IdentityStrategy),
            matcher: Arc::new(ComponentRegistry::new()),
            date_format_policy: DateFormatPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_uses_identity_naming() {
        let ctx = BindingContext::default();
        assert_eq!(ctx.naming_strategy().translate_name("firstName"), "firstName");
        assert_eq!(ctx.date_format_policy(), DateFormatPolicy::Iso8601);
    }

    #[test]
    fn test_context_from_config_resolves_strategy() {
        let config = BindingConfig::from_toml_str(
            r#"
[binding]
naming_strategy = "lower_case_with_underscores"
date_format = "epoch-millis"
"#,
        )
        .unwrap();

        let ctx = BindingContext::from_config(&config).unwrap();
        assert_eq!(ctx.naming_strategy().translate_name("firstName"), "first_name");
        assert_eq!(ctx.date_format_policy(), DateFormatPolicy::EpochMillis);
    }
}
