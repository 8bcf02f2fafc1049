//! Fixed names and fallback values for integration-test configuration
//!
//! The resource name and property keys are shared with the build tooling
//! that ships the defaults file, so they are not configurable.

/// Well-known name of the defaults resource
pub const PROPERTIES_FILE: &str = "spring-boot-itest.properties";

/// Environment variable selecting the directory holding [`PROPERTIES_FILE`]
pub const RESOURCES_DIR_ENV: &str = "ITEST_RESOURCES_DIR";

/// Resource root used when [`RESOURCES_DIR_ENV`] is unset
pub const DEFAULT_RESOURCES_DIR: &str = "src/test/resources";

pub const DEFAULT_MAVEN_GROUP: &str = "org.apache.camel";
pub const DEFAULT_MODULES_PATH: &str = "../../components/";
pub const DEFAULT_UNIT_TEST_ENABLED: bool = false;
pub const DEFAULT_UNIT_TEST_BASE_PACKAGE: &str = "org.apache.camel";
/// Every class whose name ends in `Test`
pub const DEFAULT_UNIT_TEST_INCLUSION_PATTERN: &str = "^.*Test$";
/// Integration tests and the `XXXTest` placeholder
pub const DEFAULT_UNIT_TEST_EXCLUSION_PATTERN: &str = r".*(\.integration\..*|XXXTest$)";
pub const DEFAULT_INCLUDE_PROVIDED_DEPENDENCIES: bool = true;
pub const DEFAULT_AUTOSTART_COMPONENT: bool = true;

/// Keys looked up in the defaults resource
pub mod keys {
    pub const UNIT_TEST_ENABLED: &str = "unitTestEnabled";
    pub const MAVEN_GROUP: &str = "mavenGroup";
    pub const MAVEN_VERSION: &str = "mavenVersion";
    pub const UNIT_TEST_INCLUSION_PATTERN: &str = "unitTestInclusionPattern";
    pub const UNIT_TEST_EXCLUSION_PATTERN: &str = "unitTestExclusionPattern";
    pub const INCLUDE_TEST_DEPENDENCIES: &str = "includeTestDependencies";
    pub const INCLUDE_PROVIDED_DEPENDENCIES: &str = "includeProvidedDependencies";
    pub const MODULES_PATH: &str = "modulesPath";
    pub const UNIT_TEST_BASE_PACKAGE: &str = "unitTestBasePackage";
    pub const AUTOSTART_COMPONENT: &str = "autostartComponent";
}
