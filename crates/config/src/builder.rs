//! Fluent builder for integration-test module configuration

use crate::constants::{
    keys, DEFAULT_AUTOSTART_COMPONENT, DEFAULT_INCLUDE_PROVIDED_DEPENDENCIES, DEFAULT_MAVEN_GROUP,
    DEFAULT_MODULES_PATH, DEFAULT_UNIT_TEST_BASE_PACKAGE, DEFAULT_UNIT_TEST_ENABLED,
    DEFAULT_UNIT_TEST_EXCLUSION_PATTERN, DEFAULT_UNIT_TEST_INCLUSION_PATTERN,
};
use crate::defaults::{Defaults, DefaultsSource};
use itest_errors::ConfigError;
use itest_types::{ITestConfig, PartialConfig};
use tracing::debug;

/// Builds an [`ITestConfig`], filling unset fields from the defaults
/// resource or from fixed fallbacks.
///
/// Setters overwrite earlier values, except [`resource`](Self::resource),
/// [`resource_to`](Self::resource_to) and [`dependency`](Self::dependency)
/// which accumulate. Whether unit tests run is only taken from a seeded
/// draft or from the `unitTestEnabled` default; there is no setter for it.
///
/// ```no_run
/// use itest_config::ITestConfigBuilder;
///
/// let config = ITestConfigBuilder::new()
///     .module("camel-ftp")
///     .resource("ftp-test.xml")
///     .dependency("com.jcraft:jsch:0.1.54")
///     .build()?;
/// assert_eq!(config.maven_group, "org.apache.camel");
/// # Ok::<(), itest_config::Error>(())
/// ```
///
/// Unit tests cannot be switched on from the builder:
///
/// ```compile_fail
/// use itest_config::ITestConfigBuilder;
///
/// let _ = ITestConfigBuilder::new().module("camel-ftp").unit_test_enabled(true);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ITestConfigBuilder {
    config: PartialConfig,
    defaults: Defaults,
}

impl ITestConfigBuilder {
    /// Start from an empty draft, reading defaults from the resource root
    /// selected by the environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a pre-populated draft
    #[must_use]
    pub fn with_config(config: PartialConfig) -> Self {
        Self {
            config,
            defaults: Defaults::default(),
        }
    }

    /// Read defaults from `source` instead of the environment-selected
    /// resource root
    #[must_use]
    pub fn defaults_source(mut self, source: DefaultsSource) -> Self {
        self.defaults = Defaults::new(source);
        self
    }

    /// The draft as configured so far
    #[must_use]
    pub fn config(&self) -> &PartialConfig {
        &self.config
    }

    #[must_use]
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.config.module_name = Some(module.into());
        self
    }

    #[must_use]
    pub fn maven_group(mut self, maven_group: impl Into<String>) -> Self {
        self.config.maven_group = Some(maven_group.into());
        self
    }

    #[must_use]
    pub fn maven_version(mut self, maven_version: impl Into<String>) -> Self {
        self.config.maven_version = Some(maven_version.into());
        self
    }

    #[must_use]
    pub fn modules_path(mut self, path: impl Into<String>) -> Self {
        self.config.modules_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn unit_test_expected_number(mut self, number: u32) -> Self {
        self.config.unit_test_expected_number = Some(number);
        self
    }

    #[must_use]
    pub fn unit_test_base_package(mut self, package: impl Into<String>) -> Self {
        self.config.unit_test_base_package = Some(package.into());
        self
    }

    #[must_use]
    pub fn unit_test_inclusion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.unit_test_inclusion_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn unit_test_exclusion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.unit_test_exclusion_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn include_test_dependencies(mut self, include: bool) -> Self {
        self.config.include_test_dependencies = Some(include);
        self
    }

    #[must_use]
    pub fn include_provided_dependencies(mut self, include: bool) -> Self {
        self.config.include_provided_dependencies = Some(include);
        self
    }

    #[must_use]
    pub fn autostart(mut self, autostart: bool) -> Self {
        self.config.auto_start_component = Some(autostart);
        self
    }

    /// Copy `file` to `dest` when the module is assembled
    #[must_use]
    pub fn resource_to(mut self, file: impl Into<String>, dest: impl Into<String>) -> Self {
        self.config
            .resources
            .get_or_insert_with(Default::default)
            .insert(file.into(), dest.into());
        self
    }

    /// Copy `file` to the same relative path
    #[must_use]
    pub fn resource(self, file: impl Into<String>) -> Self {
        let file = file.into();
        self.resource_to(file.clone(), file)
    }

    /// Add a dependency in canonical `group:artifact:version` form
    #[must_use]
    pub fn dependency(mut self, canonical_form: impl Into<String>) -> Self {
        self.config
            .additional_dependencies
            .get_or_insert_with(Default::default)
            .insert(canonical_form.into());
        self
    }

    /// Apply defaults and validate the draft
    ///
    /// Resolved values are written back into the draft, so calling `build`
    /// again without further changes returns an equal record without
    /// reading the defaults resource a second time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Incomplete` if no module name was set, or
    /// `ConfigError::DefaultsLoad` if a default is needed and the defaults
    /// resource cannot be read or parsed.
    pub fn build(&mut self) -> itest_errors::Result<ITestConfig> {
        let Some(module_name) = self.config.module_name.clone() else {
            return Err(ConfigError::Incomplete {
                field: "module_name".to_string(),
            }
            .into());
        };

        let defaults = &mut self.defaults;
        let config = &mut self.config;

        let unit_test_enabled = fill_bool(
            &mut config.unit_test_enabled,
            defaults,
            keys::UNIT_TEST_ENABLED,
            DEFAULT_UNIT_TEST_ENABLED,
        )?;
        let maven_group = fill_string(
            &mut config.maven_group,
            defaults,
            keys::MAVEN_GROUP,
            DEFAULT_MAVEN_GROUP,
        )?;
        if config.maven_version.is_none() {
            config.maven_version = defaults.property(keys::MAVEN_VERSION)?;
        }
        let unit_test_inclusion_pattern = fill_string(
            &mut config.unit_test_inclusion_pattern,
            defaults,
            keys::UNIT_TEST_INCLUSION_PATTERN,
            DEFAULT_UNIT_TEST_INCLUSION_PATTERN,
        )?;
        let unit_test_exclusion_pattern = fill_string(
            &mut config.unit_test_exclusion_pattern,
            defaults,
            keys::UNIT_TEST_EXCLUSION_PATTERN,
            DEFAULT_UNIT_TEST_EXCLUSION_PATTERN,
        )?;
        // Falls back to the resolved unit test switch, not a literal
        let include_test_dependencies = fill_bool(
            &mut config.include_test_dependencies,
            defaults,
            keys::INCLUDE_TEST_DEPENDENCIES,
            unit_test_enabled,
        )?;
        let include_provided_dependencies = fill_bool(
            &mut config.include_provided_dependencies,
            defaults,
            keys::INCLUDE_PROVIDED_DEPENDENCIES,
            DEFAULT_INCLUDE_PROVIDED_DEPENDENCIES,
        )?;
        let modules_path = fill_string(
            &mut config.modules_path,
            defaults,
            keys::MODULES_PATH,
            DEFAULT_MODULES_PATH,
        )?;
        let unit_test_base_package = fill_string(
            &mut config.unit_test_base_package,
            defaults,
            keys::UNIT_TEST_BASE_PACKAGE,
            DEFAULT_UNIT_TEST_BASE_PACKAGE,
        )?;
        let auto_start_component = fill_bool(
            &mut config.auto_start_component,
            defaults,
            keys::AUTOSTART_COMPONENT,
            DEFAULT_AUTOSTART_COMPONENT,
        )?;
        let resources = config.resources.get_or_insert_with(Default::default).clone();
        let additional_dependencies = config
            .additional_dependencies
            .get_or_insert_with(Default::default)
            .clone();

        let built = ITestConfig {
            module_name,
            maven_group,
            maven_version: config.maven_version.clone(),
            modules_path,
            unit_test_enabled,
            unit_test_base_package,
            unit_test_inclusion_pattern,
            unit_test_exclusion_pattern,
            unit_test_expected_number: config.unit_test_expected_number,
            include_test_dependencies,
            include_provided_dependencies,
            auto_start_component,
            resources,
            additional_dependencies,
        };
        debug!(module = %built.module_name, "built integration test config");
        Ok(built)
    }
}

impl From<PartialConfig> for ITestConfigBuilder {
    fn from(config: PartialConfig) -> Self {
        Self::with_config(config)
    }
}

impl From<ITestConfig> for ITestConfigBuilder {
    fn from(config: ITestConfig) -> Self {
        Self::with_config(config.into())
    }
}

fn fill_string(
    slot: &mut Option<String>,
    defaults: &mut Defaults,
    key: &str,
    fallback: &str,
) -> Result<String, ConfigError> {
    if let Some(value) = slot {
        return Ok(value.clone());
    }
    let value = defaults.string_or(key, fallback)?;
    Ok(slot.insert(value).clone())
}

fn fill_bool(
    slot: &mut Option<bool>,
    defaults: &mut Defaults,
    key: &str,
    fallback: bool,
) -> Result<bool, ConfigError> {
    if let Some(value) = *slot {
        return Ok(value);
    }
    let value = defaults.bool_or(key, fallback)?;
    *slot = Some(value);
    Ok(value)
}
