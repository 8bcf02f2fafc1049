//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A mandatory field was never set on the builder.
    #[error("configuration is not complete: {field} is required")]
    Incomplete { field: String },

    /// The defaults resource could not be opened or parsed.
    #[error("unable to load property file: {path}: {reason}")]
    DefaultsLoad { path: String, reason: String },

    #[error("parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("invalid config: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Wrap an underlying cause into a defaults load failure for `path`
    pub fn defaults_load(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::DefaultsLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Incomplete { field } => Some(match field.as_str() {
                "module_name" => "Call `module(..)` on the builder before `build()`.",
                _ => "Set the missing field noted in the error message.",
            }),
            Self::DefaultsLoad { .. } => Some(
                "Make sure spring-boot-itest.properties exists under the resource root \
                 (ITEST_RESOURCES_DIR) and is a valid properties file.",
            ),
            Self::ParseError { .. } | Self::Invalid { .. } => {
                Some("Fix the configuration value and retry.")
            }
            Self::NotFound { .. } => Some("Check the path of the configuration seed file."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::Incomplete { .. } => "config.incomplete",
            Self::DefaultsLoad { .. } => "config.defaults_load",
            Self::ParseError { .. } => "config.parse",
            Self::NotFound { .. } => "config.not_found",
            Self::Invalid { .. } => "config.invalid",
        })
    }
}
