//! Integration tests for the `biadmin` CLI binary.
//!
//! Argument parsing, help output, completions, and exit codes run without
//! a network. The paging tests point the binary at a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `biadmin` binary with env isolation.
///
/// Clears all `BIADMIN_*` env vars and points config directories at a
/// fresh temp dir so tests never touch the user's real configuration.
fn biadmin_cmd(home: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("biadmin");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("BIADMIN_PROFILE")
        .env_remove("BIADMIN_API_URL")
        .env_remove("BIADMIN_TOKEN")
        .env_remove("BIADMIN_OUTPUT")
        .env_remove("BIADMIN_TIMEOUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

const WORKSPACE: &str = "f089354e-8366-4e18-aea3-4cb4a3a50b48";

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Usage"));
}

#[test]
fn help_lists_command_groups() {
    let home = tempfile::tempdir().unwrap();
    biadmin_cmd(&home).arg("--help").assert().success().stdout(
        predicate::str::contains("activity-events")
            .and(predicate::str::contains("gateways"))
            .and(predicate::str::contains("workspaces")),
    );
}

#[test]
fn version_flag() {
    let home = tempfile::tempdir().unwrap();
    biadmin_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("biadmin"));
}

#[test]
fn completions_zsh() {
    let home = tempfile::tempdir().unwrap();
    biadmin_cmd(&home)
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn config_path_needs_no_token() {
    let home = tempfile::tempdir().unwrap();
    biadmin_cmd(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn missing_token_is_auth_exit() {
    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["gateways", "list", "--api-url", "http://127.0.0.1:9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("No access token"));
}

#[test]
fn invalid_start_date_is_usage_exit() {
    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["activity-events", "get", "--start", "yesterday", "--end", "2019-08-15T21:00:00Z"])
        .args(["--token", "t", "--api-url", "http://127.0.0.1:9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("StartDateTime"));
}

#[test]
fn set_installers_without_ids_is_usage_exit() {
    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["gateways", "set-installers", "--operation", "add", "--gateway-type", "resource"])
        .args(["--token", "t", "--api-url", "http://127.0.0.1:9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("Ids"));
}

#[test]
fn remove_without_yes_fails_non_interactively() {
    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["gateways", "set-installers", "-i", "a@contoso.com", "--operation", "remove"])
        .args(["--gateway-type", "resource", "--token", "t", "--api-url", "http://127.0.0.1:9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
    assert!(combined_output(&output).contains("--yes"));
}

#[test]
fn bad_workspace_guid_is_usage_exit() {
    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["reports", "list", "--workspace", "not-a-guid"])
        .args(["--token", "t", "--api-url", "http://127.0.0.1:9"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "{}", combined_output(&output));
}

// ── Against a mock service ──────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn activity_events_follow_continuation_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/activityevents"))
        .and(query_param("startDateTime", "'2019-08-15T20:00:00Z'"))
        .and(query_param_is_missing("continuationToken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activityEventEntities": [{"Id": "evt-1"}, {"Id": "evt-2"}],
            "continuationToken": "next-page",
            "lastResultSet": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/activityevents"))
        .and(query_param("continuationToken", "'next-page'"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activityEventEntities": [{"Id": "evt-3"}],
            "continuationToken": null,
            "lastResultSet": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["activity-events", "get"])
        .args(["--start", "2019-08-15T20:00:00Z", "--end", "2019-08-15T21:00:00Z"])
        .args(["--token", "t", "--api-url", &server.uri(), "-o", "plain"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "evt-1\nevt-2\nevt-3\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn workspaces_json_is_one_array_across_pages() {
    let server = MockServer::start().await;
    let group = |n: u8| {
        json!({
            "id": format!("f089354e-8366-4e18-aea3-4cb4a3a50b4{n}"),
            "name": format!("ws-{n}"),
            "isReadOnly": false,
            "isOnDedicatedCapacity": false
        })
    };
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/groups"))
        .and(query_param("$top", "2"))
        .and(query_param_is_missing("$skip"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"value": [group(1), group(2)]})),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/groups"))
        .and(query_param("$skip", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"value": [group(3)]})))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["workspaces", "list", "--scope", "organization", "--first", "2", "--all"])
        .args(["--token", "t", "--api-url", &server.uri(), "-o", "json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", combined_output(&output));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["ws-1", "ws-2", "ws-3"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn unauthorized_response_is_auth_exit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v1.0/myorg/groups/{WORKSPACE}/reports")))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"code": "TokenExpired", "message": "Access token has expired"}
        })))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = biadmin_cmd(&home)
        .args(["reports", "list", "--workspace", WORKSPACE])
        .args(["--token", "t", "--api-url", &server.uri()])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3), "{}", combined_output(&output));
}
