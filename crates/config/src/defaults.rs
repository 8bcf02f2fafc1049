//! Defaults resource lookup with a lazily populated per-builder cache

use crate::constants::{DEFAULT_RESOURCES_DIR, PROPERTIES_FILE, RESOURCES_DIR_ENV};
use crate::properties::Properties;
use itest_errors::ConfigError;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Where the defaults resource is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultsSource {
    /// `root/spring-boot-itest.properties`
    Resource { root: PathBuf },
    /// An explicit properties file
    File(PathBuf),
    /// Properties text held in memory, e.g. from `include_str!`
    Inline(String),
}

impl DefaultsSource {
    /// Resource lookup under the given root directory
    pub fn resource(root: impl Into<PathBuf>) -> Self {
        Self::Resource { root: root.into() }
    }

    /// Resource lookup rooted at `ITEST_RESOURCES_DIR`, falling back to
    /// `src/test/resources` when the variable is unset or empty
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(RESOURCES_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::resource(dir),
            _ => Self::resource(DEFAULT_RESOURCES_DIR),
        }
    }

    /// File path this source reads, if it is backed by a file
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        match self {
            Self::Resource { root } => Some(root.join(PROPERTIES_FILE)),
            Self::File(path) => Some(path.clone()),
            Self::Inline(_) => None,
        }
    }

    /// Human-readable location used in log and error messages
    #[must_use]
    pub fn location(&self) -> String {
        self.path()
            .map_or_else(|| format!("<inline {PROPERTIES_FILE}>"), |p| p.display().to_string())
    }

    /// Read and parse the resource
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DefaultsLoad` if the resource cannot be read or
    /// is not a valid properties file.
    pub fn load(&self) -> Result<Properties, ConfigError> {
        let location = self.location();
        let text = match self {
            Self::Inline(contents) => Cow::Borrowed(contents.as_str()),
            Self::Resource { root } => {
                Cow::Owned(read_resource(&root.join(PROPERTIES_FILE), &location)?)
            }
            Self::File(path) => Cow::Owned(read_resource(path, &location)?),
        };
        let properties =
            Properties::parse(&text).map_err(|e| ConfigError::defaults_load(&location, e))?;

        debug!(
            source = %location,
            keys = properties.len(),
            "loaded integration test defaults"
        );
        Ok(properties)
    }
}

impl Default for DefaultsSource {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Read a properties file as ISO-8859-1; every byte maps to one char.
fn read_resource(path: &Path, location: &str) -> Result<String, ConfigError> {
    let bytes = std::fs::read(path).map_err(|e| ConfigError::defaults_load(location, e))?;
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Defaults resource bound to a single builder
///
/// The resource is read on the first lookup and cached for the lifetime of
/// this value. A failed read is not cached, so the next lookup retries and
/// fails the same way.
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    source: DefaultsSource,
    properties: Option<Properties>,
}

impl Defaults {
    #[must_use]
    pub fn new(source: DefaultsSource) -> Self {
        Self {
            source,
            properties: None,
        }
    }

    #[must_use]
    pub fn source(&self) -> &DefaultsSource {
        &self.source
    }

    /// Whether the resource has been read already
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.properties.is_some()
    }

    fn properties(&mut self) -> Result<&Properties, ConfigError> {
        let properties = match self.properties.take() {
            Some(properties) => properties,
            None => self.source.load()?,
        };
        Ok(self.properties.insert(properties))
    }

    /// Raw value of `key`, `None` when the resource does not define it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DefaultsLoad` if the resource cannot be loaded.
    pub fn property(&mut self, key: &str) -> Result<Option<String>, ConfigError> {
        let value = self.properties()?.get(key).map(str::to_string);
        trace!(key, found = value.is_some(), "looked up default");
        Ok(value)
    }

    /// Value of `key`, or `fallback` when the resource does not define it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DefaultsLoad` if the resource cannot be loaded.
    pub fn string_or(&mut self, key: &str, fallback: &str) -> Result<String, ConfigError> {
        Ok(self.property(key)?.unwrap_or_else(|| fallback.to_string()))
    }

    /// Boolean value of `key`, or `fallback` when the resource does not
    /// define it
    ///
    /// `true` in any ASCII case reads as true, any other value as false.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DefaultsLoad` if the resource cannot be loaded.
    pub fn bool_or(&mut self, key: &str, fallback: bool) -> Result<bool, ConfigError> {
        Ok(match self.property(key)? {
            Some(value) => parse_bool(key, &value),
            None => fallback,
        })
    }
}

fn parse_bool(key: &str, value: &str) -> bool {
    if value.eq_ignore_ascii_case("true") {
        return true;
    }
    if !value.eq_ignore_ascii_case("false") {
        warn!(key, value, "non-boolean default value, reading it as false");
    }
    false
}
