//! Generation settings.
//!
//! [`GenerationConfig`] is supplied whole by the caller and never mutated
//! by the generator. It deserializes from YAML or JSON; missing keys take
//! the defaults of [`GenerationConfig::default`].
//!
//! ```yaml
//! module_name: Contoso
//! module_notes: Generated client for the Contoso org
//! language_code: 1033
//! entity_types: Custom
//! include_virtual_attributes: false
//! script_template: templates/axios.xml
//! logging_level: Information
//! entity_filters:
//!   - pattern: "_bpf_"
//!     match_kind: Contains
//! attribute_filters:
//!   - pattern: versionnumber
//!     match_kind: Equals
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use xrm2ts_filter::{FilterRule, FilterSet};
use xrm2ts_metadata::EntityMetadata;

use crate::log::LoggingLevel;

/// Which entities an `<entity>` block iterates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityTypes {
    /// Only entities flagged as custom.
    Custom,
    /// Only entities not flagged as custom.
    System,
    /// Every entity.
    #[default]
    #[serde(alias = "BothCustomAndSystem")]
    Both,
}

impl EntityTypes {
    /// Returns `true` if `entity` falls inside this scope.
    pub fn includes(self, entity: &EntityMetadata) -> bool {
        match self {
            EntityTypes::Custom => entity.is_custom(),
            EntityTypes::System => !entity.is_custom(),
            EntityTypes::Both => true,
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Substituted for `{#module_name#}`.
    pub module_name: String,
    /// Substituted for `{#module_notes#}`.
    pub module_notes: String,
    /// Language code used to pick localized labels.
    pub language_code: i32,
    pub entity_types: EntityTypes,
    pub include_virtual_attributes: bool,
    /// Matched against entity logical names.
    pub entity_filters: FilterSet,
    /// Matched against attribute schema names.
    pub attribute_filters: FilterSet,
    /// Path of the template document.
    pub script_template: PathBuf,
    pub logging_level: LoggingLevel,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            module_name: "MyProject".to_string(),
            module_notes: "A CRM Typescript Project".to_string(),
            language_code: 1033,
            entity_types: EntityTypes::Both,
            include_virtual_attributes: false,
            entity_filters: FilterSet::from(vec![
                FilterRule::equals("syncerror"),
                FilterRule::contains("_bpf_"),
            ]),
            attribute_filters: FilterSet::from(vec![
                FilterRule::equals("versionnumber"),
                FilterRule::contains("yominame"),
                FilterRule::equals("importsequencenumber"),
                FilterRule::equals("timezoneruleversionnumber"),
                FilterRule::equals("utcconversiontimezonecode"),
                FilterRule::contains("onbehalf"),
                FilterRule::equals("overriddencreatedon"),
            ]),
            script_template: PathBuf::from("template.xml"),
            logging_level: LoggingLevel::None,
        }
    }
}

impl GenerationConfig {
    /// Returns `true` if the entity with this logical name is excluded.
    pub fn filter_entity(&self, logical_name: &str) -> bool {
        self.entity_filters.is_filtered(logical_name)
    }

    /// Returns `true` if the attribute with this schema name is excluded.
    pub fn filter_attribute(&self, schema_name: &str) -> bool {
        self.attribute_filters.is_filtered(schema_name)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serializes this configuration as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Errors raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}
