//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env vars.

use std::path::Path;

use figment::Jail;
use lists_config::{ConfigError, ListsConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_local_superlists_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "superlists.toml",
            r#"
[server]
bind_addr = "0.0.0.0:9000"
shutdown_grace_secs = 1

[database]
path = "/var/lib/superlists/db.sqlite"
"#,
        )?;

        let config = ListsConfig::load(None).expect("config loads");
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.server.shutdown_grace_secs, 1);
        assert_eq!(config.database.path, "/var/lib/superlists/db.sqlite");
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "superlists.toml",
            r#"
[database]
path = ":memory:"
"#,
        )?;

        let config = ListsConfig::load(None).expect("config loads");
        assert!(config.database.is_in_memory());
        assert_eq!(config.server.bind_addr, "127.0.0.1:8000");
        Ok(())
    });
}

#[test]
fn explicit_file_beats_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file("superlists.toml", "[server]\nbind_addr = \"127.0.0.1:1111\"\n")?;
        jail.create_file("staging.toml", "[server]\nbind_addr = \"127.0.0.1:2222\"\n")?;

        let config = ListsConfig::load(Some(Path::new("staging.toml"))).expect("config loads");
        assert_eq!(config.server.bind_addr, "127.0.0.1:2222");
        Ok(())
    });
}

#[test]
fn missing_explicit_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let result = ListsConfig::load(Some(Path::new("does-not-exist.toml")));
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn wrong_type_is_reported() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "superlists.toml",
            "[server]\nshutdown_grace_secs = \"soon\"\n",
        )?;

        let err = ListsConfig::load(None).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
        Ok(())
    });
}
