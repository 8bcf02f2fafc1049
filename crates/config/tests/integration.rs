//! Integration tests for config

#[cfg(test)]
mod tests {
    use itest_config::constants::*;
    use itest_config::*;
    use proptest::prelude::*;
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::Mutex;

    // Mutex to ensure env var tests don't run concurrently
    static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());

    fn empty_defaults() -> DefaultsSource {
        DefaultsSource::Inline(String::new())
    }

    fn builder() -> ITestConfigBuilder {
        ITestConfigBuilder::new().defaults_source(empty_defaults())
    }

    #[test]
    fn test_module_only_applies_fallbacks() {
        let config = builder().module("foo").build().unwrap();

        assert_eq!(config.module_name, "foo");
        assert_eq!(config.maven_group, "org.apache.camel");
        assert_eq!(config.maven_version, None);
        assert_eq!(config.modules_path, "../../components/");
        assert!(!config.unit_test_enabled);
        assert_eq!(config.unit_test_base_package, "org.apache.camel");
        assert_eq!(config.unit_test_inclusion_pattern, "^.*Test$");
        assert_eq!(
            config.unit_test_exclusion_pattern,
            r".*(\.integration\..*|XXXTest$)"
        );
        assert_eq!(config.unit_test_expected_number, None);
        assert!(!config.include_test_dependencies);
        assert!(config.include_provided_dependencies);
        assert!(config.auto_start_component);
        assert!(config.resources.is_empty());
        assert!(config.additional_dependencies.is_empty());
    }

    #[test]
    fn test_missing_module_is_incomplete() {
        let err = builder()
            .maven_group("org.example")
            .resource("a.xml")
            .build()
            .unwrap_err();

        assert!(err.is_incomplete());
        assert!(matches!(
            err,
            Error::Config(ConfigError::Incomplete { ref field }) if field == "module_name"
        ));
    }

    #[test]
    fn test_properties_override_fallbacks() {
        let mut builder = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::Inline(
                "# shipped with the itest module\n\
                 mavenGroup = org.example\n\
                 mavenVersion = 2.18.0\n\
                 modulesPath = ../components/\n\
                 unitTestBasePackage = org.example.camel\n\
                 unitTestInclusionPattern = ^.*IT$\n\
                 unitTestExclusionPattern = .*Slow.*\n\
                 includeProvidedDependencies = False\n\
                 autostartComponent = FALSE\n"
                    .to_string(),
            ))
            .module("camel-ftp");
        let config = builder.build().unwrap();

        assert_eq!(config.maven_group, "org.example");
        assert_eq!(config.maven_version.as_deref(), Some("2.18.0"));
        assert_eq!(config.modules_path, "../components/");
        assert_eq!(config.unit_test_base_package, "org.example.camel");
        assert_eq!(config.unit_test_inclusion_pattern, "^.*IT$");
        assert_eq!(config.unit_test_exclusion_pattern, ".*Slow.*");
        assert!(!config.include_provided_dependencies);
        assert!(!config.auto_start_component);
    }

    #[test]
    fn test_setters_win_over_properties() {
        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::Inline(
                "mavenGroup = org.example\nautostartComponent = false\n".to_string(),
            ))
            .module("camel-ftp")
            .maven_group("org.apache.camel.springboot")
            .maven_version("2.18.0")
            .modules_path("../../components-starter/")
            .unit_test_base_package("org.apache.camel.component.ftp")
            .unit_test_inclusion_pattern("^.*FtpTest$")
            .unit_test_exclusion_pattern("^$")
            .unit_test_expected_number(7)
            .include_provided_dependencies(false)
            .autostart(true)
            .build()
            .unwrap();

        assert_eq!(config.maven_group, "org.apache.camel.springboot");
        assert_eq!(config.maven_version.as_deref(), Some("2.18.0"));
        assert_eq!(config.modules_path, "../../components-starter/");
        assert_eq!(config.unit_test_base_package, "org.apache.camel.component.ftp");
        assert_eq!(config.unit_test_inclusion_pattern, "^.*FtpTest$");
        assert_eq!(config.unit_test_exclusion_pattern, "^$");
        assert_eq!(config.unit_test_expected_number, Some(7));
        assert!(!config.include_provided_dependencies);
        assert!(config.auto_start_component);
    }

    #[test]
    fn test_setters_overwrite_previous_values() {
        let config = builder()
            .module("first")
            .module("second")
            .maven_group("a")
            .maven_group("b")
            .autostart(false)
            .autostart(true)
            .build()
            .unwrap();

        assert_eq!(config.module_name, "second");
        assert_eq!(config.maven_group, "b");
        assert!(config.auto_start_component);
    }

    #[test]
    fn test_include_test_dependencies_follows_unit_test_enabled() {
        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::Inline("unitTestEnabled = true\n".to_string()))
            .module("camel-jms")
            .build()
            .unwrap();
        assert!(config.unit_test_enabled);
        assert!(config.include_test_dependencies);

        let seeded = PartialConfig {
            unit_test_enabled: Some(true),
            ..PartialConfig::default()
        };
        let config = ITestConfigBuilder::with_config(seeded)
            .defaults_source(empty_defaults())
            .module("camel-jms")
            .build()
            .unwrap();
        assert!(config.unit_test_enabled);
        assert!(config.include_test_dependencies);
    }

    #[test]
    fn test_include_test_dependencies_explicit_value_wins() {
        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::Inline(
                "unitTestEnabled = true\nincludeTestDependencies = false\n".to_string(),
            ))
            .module("camel-jms")
            .build()
            .unwrap();
        assert!(config.unit_test_enabled);
        assert!(!config.include_test_dependencies);

        let config = builder()
            .module("camel-jms")
            .include_test_dependencies(true)
            .build()
            .unwrap();
        assert!(!config.unit_test_enabled);
        assert!(config.include_test_dependencies);
    }

    #[test]
    fn test_non_boolean_property_reads_as_false() {
        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::Inline(
                "unitTestEnabled = yes\nautostartComponent = 1\n".to_string(),
            ))
            .module("camel-jms")
            .build()
            .unwrap();
        assert!(!config.unit_test_enabled);
        assert!(!config.auto_start_component);
    }

    #[test]
    fn test_single_argument_resource_maps_to_itself() {
        let single = builder().module("m").resource("ftp.xml").build().unwrap();
        let pair = builder()
            .module("m")
            .resource_to("ftp.xml", "ftp.xml")
            .build()
            .unwrap();

        assert_eq!(single.resources, pair.resources);
        assert_eq!(
            single.resources,
            BTreeMap::from([("ftp.xml".to_string(), "ftp.xml".to_string())])
        );
    }

    #[test]
    fn test_resources_and_dependencies_accumulate() {
        let config = builder()
            .module("camel-ftp")
            .resource("a.xml")
            .resource_to("b.xml", "META-INF/b.xml")
            .resource_to("a.xml", "conf/a.xml")
            .dependency("com.jcraft:jsch:0.1.54")
            .dependency("commons-net:commons-net:3.5")
            .dependency("com.jcraft:jsch:0.1.54")
            .build()
            .unwrap();

        assert_eq!(
            config.resources,
            BTreeMap::from([
                ("a.xml".to_string(), "conf/a.xml".to_string()),
                ("b.xml".to_string(), "META-INF/b.xml".to_string()),
            ])
        );
        assert_eq!(
            config.additional_dependencies,
            BTreeSet::from([
                "com.jcraft:jsch:0.1.54".to_string(),
                "commons-net:commons-net:3.5".to_string(),
            ])
        );
    }

    #[test]
    fn test_missing_resource_fails_build() {
        let dir = tempfile::tempdir().unwrap();
        let err = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::resource(dir.path()))
            .module("foo")
            .build()
            .unwrap_err();

        assert!(err.is_defaults_load());
        assert!(err.to_string().contains(PROPERTIES_FILE));
    }

    #[test]
    fn test_malformed_resource_fails_build() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROPERTIES_FILE), "mavenGroup = \\u00\n").unwrap();

        let err = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::resource(dir.path()))
            .module("foo")
            .build()
            .unwrap_err();
        assert!(err.is_defaults_load());
    }

    #[test]
    fn test_latin1_resource_builds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROPERTIES_FILE),
            b"# Caf\xE9\nmavenGroup = org.example\n",
        )
        .unwrap();

        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::resource(dir.path()))
            .module("foo")
            .build()
            .unwrap();
        assert_eq!(config.maven_group, "org.example");
    }

    #[test]
    fn test_bare_cr_resource_builds() {
        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::Inline(
                "mavenGroup=org.example\rautostartComponent=false\r".to_string(),
            ))
            .module("foo")
            .build()
            .unwrap();
        assert_eq!(config.maven_group, "org.example");
        assert!(!config.auto_start_component);
    }

    #[test]
    fn test_resource_root_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROPERTIES_FILE),
            "unitTestEnabled=true\nmavenVersion=2.18.0\n",
        )
        .unwrap();

        let config = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::resource(dir.path()))
            .module("camel-ftp")
            .build()
            .unwrap();

        assert!(config.unit_test_enabled);
        assert_eq!(config.coordinates(), "org.apache.camel:camel-ftp:2.18.0");
    }

    #[test]
    fn test_resource_root_from_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PROPERTIES_FILE), "mavenGroup=org.from.env\n").unwrap();

        std::env::set_var(RESOURCES_DIR_ENV, dir.path());
        let source = DefaultsSource::from_env();
        let config = ITestConfigBuilder::new().module("m").build();
        std::env::remove_var(RESOURCES_DIR_ENV);

        assert_eq!(source, DefaultsSource::resource(dir.path()));
        assert_eq!(config.unwrap().maven_group, "org.from.env");
    }

    #[test]
    fn test_resource_root_without_env() {
        let _guard = ENV_TEST_MUTEX.lock().unwrap();

        std::env::remove_var(RESOURCES_DIR_ENV);
        assert_eq!(
            DefaultsSource::from_env(),
            DefaultsSource::resource(DEFAULT_RESOURCES_DIR)
        );

        std::env::set_var(RESOURCES_DIR_ENV, "");
        assert_eq!(
            DefaultsSource::from_env(),
            DefaultsSource::resource(DEFAULT_RESOURCES_DIR)
        );
        std::env::remove_var(RESOURCES_DIR_ENV);
    }

    #[test]
    fn test_repeated_build_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROPERTIES_FILE);
        std::fs::write(&path, "mavenGroup = org.first\n").unwrap();

        let mut builder = ITestConfigBuilder::new()
            .defaults_source(DefaultsSource::File(path.clone()))
            .module("camel-ftp")
            .resource("a.xml");
        let first = builder.build().unwrap();

        std::fs::remove_file(&path).unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first, second);
        assert_eq!(second.maven_group, "org.first");
    }

    #[test]
    fn test_builder_from_seed_file() {
        let dir = tempfile::tempdir().unwrap();
        let seed = dir.path().join("itest.toml");
        std::fs::write(
            &seed,
            "module_name = \"camel-mail\"\nauto_start_component = false\n\
             additional_dependencies = [\"com.icegreen:greenmail:1.5.2\"]\n",
        )
        .unwrap();

        let config = ITestConfigBuilder::from(PartialConfig::load_from_file(&seed).unwrap())
            .defaults_source(empty_defaults())
            .dependency("javax.mail:mail:1.4.7")
            .build()
            .unwrap();

        assert_eq!(config.module_name, "camel-mail");
        assert!(!config.auto_start_component);
        assert_eq!(config.additional_dependencies.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_missing_module_always_incomplete(
            group in proptest::option::of("[a-z.]{1,20}"),
            autostart in proptest::option::of(any::<bool>()),
            expected in proptest::option::of(any::<u32>()),
            resources in proptest::collection::vec("[a-z]{1,8}\\.xml", 0..4),
        ) {
            let mut builder = builder();
            if let Some(group) = group {
                builder = builder.maven_group(group);
            }
            if let Some(autostart) = autostart {
                builder = builder.autostart(autostart);
            }
            if let Some(expected) = expected {
                builder = builder.unit_test_expected_number(expected);
            }
            for resource in resources {
                builder = builder.resource(resource);
            }

            let err = builder.build().unwrap_err();
            prop_assert!(err.is_incomplete());
        }

        #[test]
        fn prop_unit_tests_drive_test_dependencies(
            module in "[a-z][a-z0-9-]{0,20}",
            enabled in any::<bool>(),
        ) {
            let config = ITestConfigBuilder::new()
                .defaults_source(DefaultsSource::Inline(format!("unitTestEnabled = {enabled}\n")))
                .module(module.clone())
                .build()
                .unwrap();

            prop_assert_eq!(config.module_name, module);
            prop_assert_eq!(config.unit_test_enabled, enabled);
            prop_assert_eq!(config.include_test_dependencies, enabled);
        }

        #[test]
        fn prop_resource_accumulation(
            files in proptest::collection::btree_set("[a-z]{1,8}\\.xml", 0..8),
        ) {
            let mut builder = builder().module("m");
            for file in &files {
                builder = builder.resource(file.clone());
            }
            let config = builder.build().unwrap();

            prop_assert_eq!(config.resources.len(), files.len());
            for file in &files {
                prop_assert_eq!(config.resources.get(file), Some(file));
            }
        }
    }
}
