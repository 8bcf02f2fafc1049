#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for integration-test module configuration
//!
//! [`ITestConfig`] is the finalized record handed to test discovery and build
//! tooling. [`PartialConfig`] is the in-progress draft a builder mutates
//! before defaults are applied.

pub mod partial;
pub mod record;

pub use partial::PartialConfig;
pub use record::ITestConfig;
