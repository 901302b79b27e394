//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use hub_config::{ConfigError, HubConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_database_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/workhub/hub.db"
call_timeout_ms = 250
retry_max_attempts = 5
retry_base_delay_ms = 10
retry_max_delay_ms = 80
"#,
        )?;

        let config: HubConfig = Figment::from(Serialized::defaults(HubConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/workhub/hub.db");
        assert_eq!(config.database.call_timeout_ms, 250);
        assert_eq!(config.database.retry_max_attempts, 5);
        assert_eq!(config.database.retry_base_delay_ms, 10);
        assert_eq!(config.database.retry_max_delay_ms, 80);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_limit = 10
"#,
        )?;

        let config: HubConfig = Figment::from(Serialized::defaults(HubConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_limit, 10);
        assert_eq!(config.database.path, "workhub.db");
        assert_eq!(config.database.call_timeout_ms, 5_000);
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".workhub")?;
        jail.create_file(
            ".workhub/config.toml",
            r#"
[database]
path = ":memory:"
"#,
        )?;

        let config = HubConfig::load().expect("config loads");
        assert!(config.database.is_in_memory());
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[database]
call_timeout_ms = 0
",
        )?;

        let figment = Figment::from(Serialized::defaults(HubConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = HubConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[database\npath = 1")?;

        let figment = Figment::from(Serialized::defaults(HubConfig::default()))
            .merge(Toml::file("config.toml"));
        let err = HubConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn config_file_on_disk_with_tempfile() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\ndefault_limit = 7\n").expect("write config");

    let figment =
        Figment::from(Serialized::defaults(HubConfig::default())).merge(Toml::file(&path));
    let config = HubConfig::from_figment(&figment).expect("config loads");
    assert_eq!(config.general.default_limit, 7);
}
