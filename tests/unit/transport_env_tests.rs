//! Environment-override tests for transport selection.
//!
//! These mutate process environment variables, so every test is serialized
//! with `serial_test`.

use mcp_scaffold::config::{ServerConfig, TransportKind, PORT_ENV, TRANSPORT_ENV};
use mcp_scaffold::AppError;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(TRANSPORT_ENV);
    std::env::remove_var(PORT_ENV);
}

fn resolve_with(transport: Option<&str>, port: Option<&str>) -> Result<ServerConfig, AppError> {
    clear_env();
    if let Some(value) = transport {
        std::env::set_var(TRANSPORT_ENV, value);
    }
    if let Some(value) = port {
        std::env::set_var(PORT_ENV, value);
    }
    let result = ServerConfig::resolve(None);
    clear_env();
    result
}

#[test]
#[serial]
fn no_env_defaults_to_stdio() {
    let config = resolve_with(None, None).expect("resolve succeeds");

    assert_eq!(config.transport, TransportKind::Stdio);
    assert_eq!(config.port, 3000);
}

#[test]
#[serial]
fn env_selects_stdio() {
    let config = resolve_with(Some("stdio"), None).expect("resolve succeeds");

    assert_eq!(config.transport, TransportKind::Stdio);
}

#[test]
#[serial]
fn env_selects_sse() {
    let config = resolve_with(Some("sse"), None).expect("resolve succeeds");

    assert_eq!(config.transport, TransportKind::Sse);
}

#[test]
#[serial]
fn env_selects_http() {
    let config = resolve_with(Some("http"), None).expect("resolve succeeds");

    assert_eq!(config.transport, TransportKind::Http);
}

#[test]
#[serial]
fn bogus_transport_fails_startup() {
    let result = resolve_with(Some("bogus"), None);

    assert!(matches!(result, Err(AppError::Config(_))));
    let message = result.expect_err("resolve fails").to_string();
    assert!(message.contains("bogus"), "names the bad value: {message}");
}

#[test]
#[serial]
fn port_env_overrides_default() {
    let config = resolve_with(Some("http"), Some("9090")).expect("resolve succeeds");

    assert_eq!(config.port, 9090);
}

#[test]
#[serial]
fn invalid_port_env_fails_startup() {
    let result = resolve_with(Some("http"), Some("not-a-port"));

    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
#[serial]
fn out_of_range_port_env_fails_startup() {
    let result = resolve_with(Some("http"), Some("70000"));

    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
#[serial]
fn env_transport_wins_over_toml() {
    clear_env();
    std::env::set_var(TRANSPORT_ENV, "http");
    let mut config = ServerConfig::from_toml_str("transport = \"sse\"\nport = 8080\n")
        .expect("config parses");
    config.apply_env_overrides().expect("overrides apply");
    clear_env();

    assert_eq!(config.transport, TransportKind::Http);
    assert_eq!(config.port, 8080, "port untouched when PORT is unset");
}
