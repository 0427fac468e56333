pub mod metadata;

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::naming::{self, STRATEGY_NAMES};
use crate::domain::model::DateFormatPolicy;
use crate::domain::ports::NamingStrategy;
use crate::utils::error::{BindingError, Result};
use crate::utils::validation::{validate_one_of, Validate};

pub use metadata::DeclaredMetadata;

const DATE_FORMAT_VALUES: [&str; 2] = ["iso8601", "epoch-millis"];

/// Binding-engine configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BindingConfig {
    pub binding: BindingSection,
    pub properties: Option<HashMap<String, PropertyOverrides>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BindingSection {
    pub naming_strategy: Option<String>,
    pub date_format: Option<String>,
    pub nillable: Option<bool>,
}

/// Declarative per-property overrides, surfaced through [`DeclaredMetadata`].
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PropertyOverrides {
    pub read_name: Option<String>,
    pub write_name: Option<String>,
    pub nillable: Option<bool>,
    pub transient: Option<bool>,
    pub date_format: Option<String>,
    pub number_format: Option<String>,
}

impl BindingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BindingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| BindingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values. Unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(strategy) = &self.binding.naming_strategy {
            validate_one_of("binding.naming_strategy", strategy, &STRATEGY_NAMES)?;
        }
        if let Some(date_format) = &self.binding.date_format {
            validate_one_of("binding.date_format", date_format, &DATE_FORMAT_VALUES)?;
        }
        Ok(())
    }

    /// Resolves the configured naming strategy; identity when unset.
    pub fn naming_strategy(&self) -> Result<Arc<dyn NamingStrategy>> {
        match self.binding.naming_strategy.as_deref() {
            None => Ok(Arc::new(naming::IdentityStrategy)),
            Some(name) => {
                naming::strategy_for(name).ok_or_else(|| BindingError::InvalidConfigValueError {
                    field: "binding.naming_strategy".to_string(),
                    value: name.to_string(),
                    reason: format!("Allowed values: {}", STRATEGY_NAMES.join(", ")),
                })
            }
        }
    }

    /// Resolves the configured default date mode; ISO-8601 when unset.
    pub fn date_format_policy(&self) -> Result<DateFormatPolicy> {
        match self.binding.date_format.as_deref() {
            None | Some("iso8601") => Ok(DateFormatPolicy::Iso8601),
            Some("epoch-millis") => Ok(DateFormatPolicy::EpochMillis),
            Some(other) => Err(BindingError::InvalidConfigValueError {
                field: "binding.date_format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", DATE_FORMAT_VALUES.join(", ")),
            }),
        }
    }

    pub fn nillable_default(&self) -> bool {
        self.binding.nillable.unwrap_or(false)
    }
}

impl Validate for BindingConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
