//! Commands Module Integration Tests
//!
//! Routing of parsed arguments to commands and the behavior of the commands
//! that do not bind a socket.

use clap::Parser;
use iptags::commands::{
    ApiServerCommand, CheckCommand, Command, CommandRouter, ConfigExampleCommand, LookupCommand,
};
use iptags::Args;
use std::path::PathBuf;

fn fixture() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/ip_base.json")
        .to_string_lossy()
        .into_owned()
}

// ============================================================================
// Command Creation and Naming Tests
// ============================================================================

#[test]
fn test_command_names() {
    assert_eq!(ApiServerCommand::new(Args::default()).name(), "ApiServerCommand");
    assert_eq!(LookupCommand::new(Args::default()).name(), "LookupCommand");
    assert_eq!(CheckCommand::new(Args::default()).name(), "CheckCommand");
    assert_eq!(
        ConfigExampleCommand::new(Args::default()).name(),
        "ConfigExampleCommand"
    );
}

#[test]
fn test_router_priority() {
    let args = Args::parse_from(["iptags", "--lookup", "192.0.2.1", "--config-example", "x.toml"]);
    assert_eq!(CommandRouter::route(args).unwrap().name(), "ConfigExampleCommand");
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_lookup_against_fixture() {
    let args = Args::parse_from(["iptags", "-d", fixture().as_str(), "--lookup", "192.0.2.10"]);
    let tags = LookupCommand::new(args).run_lookup().unwrap();
    assert_eq!(tags, ["bar", "foo"]);
}

#[test]
fn test_lookup_invalid_address_fails() {
    let args = Args::parse_from(["iptags", "-d", fixture().as_str(), "--lookup", "198.51..22"]);
    let err = LookupCommand::new(args).run_lookup().unwrap_err();
    assert!(err.downcast_ref::<iptags::AddressError>().is_some());
}

#[test]
fn test_lookup_missing_database_fails() {
    let args = Args::parse_from(["iptags", "-d", "/nonexistent/ip_base.json", "--lookup", "192.0.2.10"]);
    let err = LookupCommand::new(args).run_lookup().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<iptags::LoadError>(),
        Some(iptags::LoadError::NotFound { .. })
    ));
}

// ============================================================================
// Check and config example
// ============================================================================

#[tokio::test]
async fn test_check_succeeds_with_malformed_entries() {
    let args = Args::parse_from(["iptags", "-d", fixture().as_str(), "--check"]);
    CheckCommand::new(args).execute().await.unwrap();
}

#[tokio::test]
async fn test_check_fails_on_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "not json").unwrap();

    let args = Args::parse_from(["iptags", "-d", path.to_str().unwrap(), "--check"]);
    assert!(CheckCommand::new(args).execute().await.is_err());
}

#[tokio::test]
async fn test_config_example_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("iptags.toml");

    let args = Args::parse_from(["iptags", "--config-example", path.to_str().unwrap()]);
    ConfigExampleCommand::new(args).execute().await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("database_path"));
    assert!(content.contains("port = 8080"));
}
