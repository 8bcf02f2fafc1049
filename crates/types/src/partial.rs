//! Partially populated configuration drafts

use crate::ITestConfig;
use itest_errors::{ConfigError, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// In-progress configuration record
///
/// Every field is optional; unset fields are filled in when the draft is
/// finalized. A draft can be seeded from a TOML document whose keys are the
/// snake_case field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maven_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_test_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_test_base_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_test_inclusion_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_test_exclusion_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_test_expected_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_test_dependencies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_provided_dependencies: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_start_component: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_dependencies: Option<BTreeSet<String>>,
}

impl PartialConfig {
    /// Parse a draft from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a value has the
    /// wrong type for its field.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            ConfigError::Invalid {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load a draft from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain a
    /// valid draft.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
                .into()
            } else {
                Error::io_with_path(&e, path)
            }
        })?;

        Self::from_toml_str(&contents)
    }

    /// Whether no field has been set yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ITestConfig> for PartialConfig {
    fn from(config: ITestConfig) -> Self {
        Self {
            module_name: Some(config.module_name),
            maven_group: Some(config.maven_group),
            maven_version: config.maven_version,
            modules_path: Some(config.modules_path),
            unit_test_enabled: Some(config.unit_test_enabled),
            unit_test_base_package: Some(config.unit_test_base_package),
            unit_test_inclusion_pattern: Some(config.unit_test_inclusion_pattern),
            unit_test_exclusion_pattern: Some(config.unit_test_exclusion_pattern),
            unit_test_expected_number: config.unit_test_expected_number,
            include_test_dependencies: Some(config.include_test_dependencies),
            include_provided_dependencies: Some(config.include_provided_dependencies),
            auto_start_component: Some(config.auto_start_component),
            resources: Some(config.resources),
            additional_dependencies: Some(config.additional_dependencies),
        }
    }
}
