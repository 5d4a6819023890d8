use chat_widget::config::AppConfig;
use serial_test::serial;
use std::env;
use std::fs;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        for key in [
            "CONFIG_FILE",
            "CHAT_HOST",
            "PORT",
            "STATIC_DIR",
            "CHAT_UPSTREAM_URL",
            "CHAT_WIDGET_SERVER__PORT",
            "CHAT_WIDGET_SERVER__ALLOWED_ORIGINS",
            "CHAT_WIDGET_RELAY__UPSTREAM_URL",
            "CHAT_WIDGET_WIDGET__TITLE",
        ] {
            env::remove_var(key);
        }
    }
}

fn load(extra: &[&str]) -> AppConfig {
    let args = std::iter::once("chat-widget").chain(extra.iter().copied());
    AppConfig::load_from_args(args).expect("Failed to load config")
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let config = load(&[]);
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.static_dir, "static");
    assert!(config.server.allowed_origins.is_empty());
    assert_eq!(config.relay.upstream_url, None);
    assert_eq!(config.relay.timeout_secs, 120);
    assert_eq!(config.widget.endpoint, "/chat");
    assert_eq!(config.bind_address(), "127.0.0.1:3000");
}

#[test]
#[serial]
fn test_env_override() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_WIDGET_SERVER__PORT", "9090");
        env::set_var(
            "CHAT_WIDGET_SERVER__ALLOWED_ORIGINS",
            "http://a.test,http://b.test",
        );
        env::set_var("CHAT_WIDGET_WIDGET__TITLE", "Support");
    }

    let config = load(&[]);
    assert_eq!(config.server.port, 9090);
    assert_eq!(
        config.server.allowed_origins,
        vec!["http://a.test".to_string(), "http://b.test".to_string()]
    );
    assert_eq!(config.widget.title, "Support");

    clear_env_vars();
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("widget.yaml");
    fs::write(
        &path,
        r#"
server:
  port: 7070
relay:
  upstream_url: "http://127.0.0.1:9/chat"
widget:
  labels:
    busy: "Working..."
"#,
    )
    .expect("Failed to write temp config");

    let path = path.to_string_lossy().to_string();
    let config = load(&["--config", &path]);
    assert_eq!(config.server.port, 7070);
    assert_eq!(
        config.relay.upstream_url.as_deref(),
        Some("http://127.0.0.1:9/chat")
    );
    assert_eq!(config.widget.labels.busy, "Working...");
    // Unset label fields keep their defaults
    assert_eq!(config.widget.labels.ready, "Ready");
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("CHAT_WIDGET_SERVER__PORT", "9090");
    }

    let config = load(&[
        "--port",
        "8181",
        "--host",
        "0.0.0.0",
        "--upstream-url",
        "http://upstream.test/chat",
    ]);
    assert_eq!(config.server.port, 8181);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(
        config.relay.upstream_url.as_deref(),
        Some("http://upstream.test/chat")
    );

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_config_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["chat-widget", "--config", "/nonexistent/widget.yaml"]);
    assert!(result.is_err());
}
