#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration assembly for integration-test modules
//!
//! An [`ITestConfig`] is built in layers:
//! - Values set on the [`ITestConfigBuilder`] (or on a seeded draft)
//! - The `spring-boot-itest.properties` defaults resource
//! - Hard-coded fallbacks from [`constants`]
//!
//! The defaults resource is read lazily, at most once per builder, and only
//! when some field is still unset at build time.

pub mod builder;
pub mod constants;
pub mod defaults;
pub mod properties;

pub use builder::ITestConfigBuilder;
pub use defaults::{Defaults, DefaultsSource};
pub use itest_errors::{ConfigError, Error};
pub use itest_types::{ITestConfig, PartialConfig};
pub use properties::Properties;
