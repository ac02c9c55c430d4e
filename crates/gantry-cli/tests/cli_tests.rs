use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Write an empty config file so the user's real config is never read
fn empty_config(temp_dir: &TempDir) -> String {
    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, "{}").expect("Failed to write config file");
    config_path.to_string_lossy().into_owned()
}

/// Helper function to create a Command with --no-color and a scrubbed
/// environment so host configuration cannot leak into tests
fn gantry_cmd() -> Command {
    let mut cmd = Command::cargo_bin("gy").expect("Failed to find gy binary");
    cmd.arg("--no-color")
        .env_remove("GANTRY_API_URL")
        .env_remove("GANTRY_API_TOKEN")
        .env_remove("GANTRY_PROJECT");
    cmd
}

#[test]
fn test_cli_help_output() {
    gantry_cmd()
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("construction timeline"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_timeline_help() {
    gantry_cmd()
        .args(["timeline", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("update"))
        .stdout(predicate::str::contains("progress"))
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("phases"));
}

#[test]
fn test_cli_version_output() {
    gantry_cmd()
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("gy "));
}

#[test]
fn test_cli_phases_needs_no_configuration() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);

    gantry_cmd()
        .args(["--config-file", &config, "timeline", "phases"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Construction Phases"))
        .stdout(predicate::str::contains("1. Foundation"))
        .stdout(predicate::str::contains("2. Structural Work"))
        .stdout(predicate::str::contains("3. Interior Work"))
        .stdout(predicate::str::contains("4. Finishing"))
        .stdout(predicate::str::contains("5. Handover"));
}

#[test]
fn test_cli_missing_api_url_fails() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);

    gantry_cmd()
        .args(["--config-file", &config, "timeline", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API base URL not set"));
}

#[test]
fn test_cli_update_requires_status_flag() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "timeline",
            "update",
            "Foundation",
            "Slab poured",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--status"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_timeline_show() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "evt-1",
                "title": "Foundation - slab poured",
                "description": "Cured over the weekend",
                "status": "completed",
                "createdAt": "2024-03-04T09:00:00Z"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "show",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Construction Timeline"))
        .stdout(predicate::str::contains("### 1. Foundation (✓ Completed)"))
        .stdout(predicate::str::contains("### 2. Structural Work (○ Pending)"))
        .stdout(predicate::str::contains(
            "### 3. Interior Work (○ Pending, 🔒 locked)",
        ))
        .stdout(predicate::str::contains(
            "- Progress: 1/5 phases completed (20%)",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_default_command_shows_timeline() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Construction Timeline"))
        .stdout(predicate::str::contains("- Current phase: Foundation (1 of 5)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_timeline_update_records_event() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    // One snapshot for the lock check, one for the auto-completion check.
    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "evt-9",
            "title": "Foundation - Slab poured",
            "description": "Concrete cured",
            "status": "completed",
            "createdAt": "2024-03-04T09:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/projects/site-9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "update",
            "Foundation",
            "Slab poured",
            "--description",
            "Concrete cured",
            "--status",
            "completed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Recorded update: Foundation - Slab poured",
        ))
        .stdout(predicate::str::contains("✓ Completed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_timeline_update_rejects_locked_phase() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "update",
            "Structural Work",
            "Framing started",
            "--description",
            "First floor walls up",
            "--status",
            "in-progress",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("complete 'Foundation' first"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_timeline_update_rejects_unknown_phase() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    // Validation fails locally; nothing may reach the API.
    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "update",
            "Landscaping",
            "Hedges planted",
            "--description",
            "Front garden done",
            "--status",
            "completed",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown phase 'Landscaping'"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_timeline_progress() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "title": "Foundation - done",
                "status": "completed",
                "createdAt": "2024-02-01T09:00:00Z"
            },
            {
                "title": "Structural Work - framing",
                "status": "in-progress",
                "createdAt": "2024-03-01T09:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "progress",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Progress"))
        .stdout(predicate::str::contains("- Phases completed: 1/5 (20%)"))
        .stdout(predicate::str::contains("- Current phase: 2. Structural Work"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_timeline_events_empty() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "events",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Timeline Events"))
        .stdout(predicate::str::contains("No timeline events found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_project_show() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "site-9",
            "title": "Harbor House",
            "description": "Two-storey residential build",
            "status": "in-progress",
            "createdAt": "2024-01-15T08:00:00Z",
            "updatedAt": "2024-03-04T10:30:00Z"
        })))
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "project",
            "show",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Harbor House"))
        .stdout(predicate::str::contains("- ID: site-9"))
        .stdout(predicate::str::contains("- Status: in-progress"))
        .stdout(predicate::str::contains("Two-storey residential build"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_command_aliases() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "t",
            "p",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Progress"))
        .stdout(predicate::str::contains("- Phases completed: 0/5 (0%)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_server_error_is_reported() {
    let temp_dir = create_cli_test_environment();
    let config = empty_config(&temp_dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/site-9/timeline-events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    gantry_cmd()
        .args([
            "--config-file",
            &config,
            "--api-url",
            &server.uri(),
            "--project",
            "site-9",
            "timeline",
            "show",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Server returned 500"));
}
