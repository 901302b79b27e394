use figment::Jail;
use hub_config::HubConfig;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("WORKHUB_DATABASE__PATH", "/tmp/env.db");
        jail.set_env("WORKHUB_DATABASE__RETRY_MAX_ATTEMPTS", "7");

        let config = HubConfig::load().expect("config loads");
        assert_eq!(config.database.path, "/tmp/env.db");
        assert_eq!(config.database.retry_max_attempts, 7);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".workhub")?;
        jail.create_file(
            ".workhub/config.toml",
            r"
[general]
default_limit = 10
",
        )?;
        jail.set_env("WORKHUB_GENERAL__DEFAULT_LIMIT", "25");

        let config = HubConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 25);
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("WORKHUB_DATABASE__RETRY_MAX_ATTEMPTS", "0");
        assert!(HubConfig::load().is_err());
        Ok(())
    });
}
