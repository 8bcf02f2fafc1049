//! Finalized integration-test module configuration

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Describes how an integration-test module is discovered, built and run.
///
/// Produced once by a builder and treated as immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ITestConfig {
    pub module_name: String,
    pub maven_group: String,
    pub maven_version: Option<String>,
    pub modules_path: String,
    pub unit_test_enabled: bool,
    pub unit_test_base_package: String,
    pub unit_test_inclusion_pattern: String,
    pub unit_test_exclusion_pattern: String,
    pub unit_test_expected_number: Option<u32>,
    pub include_test_dependencies: bool,
    pub include_provided_dependencies: bool,
    pub auto_start_component: bool,
    /// Source file path -> destination path
    pub resources: BTreeMap<String, String>,
    /// Canonical dependency identifiers (e.g. `group:artifact:version`)
    pub additional_dependencies: BTreeSet<String>,
}

impl ITestConfig {
    /// Maven coordinates of the module under test, `group:artifact[:version]`
    #[must_use]
    pub fn coordinates(&self) -> String {
        match &self.maven_version {
            Some(version) => format!("{}:{}:{}", self.maven_group, self.module_name, version),
            None => format!("{}:{}", self.maven_group, self.module_name),
        }
    }
}

impl fmt::Display for ITestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ITestConfig{{module={}, group={}, version={}, modules_path={}, \
             unit_tests={}, base_package={}, include={}, exclude={}, expected={}, \
             test_deps={}, provided_deps={}, autostart={}, resources={}, dependencies={}}}",
            self.module_name,
            self.maven_group,
            self.maven_version.as_deref().unwrap_or("-"),
            self.modules_path,
            self.unit_test_enabled,
            self.unit_test_base_package,
            self.unit_test_inclusion_pattern,
            self.unit_test_exclusion_pattern,
            self.unit_test_expected_number
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
            self.include_test_dependencies,
            self.include_provided_dependencies,
            self.auto_start_component,
            self.resources.len(),
            self.additional_dependencies.len(),
        )
    }
}
