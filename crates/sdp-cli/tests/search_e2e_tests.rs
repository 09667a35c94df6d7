//! End-to-end tests for the sdp binary
//!
//! These tests validate the full command workflows including:
//! - Non-interactive search output formats
//! - Severity ordering and filtering
//! - Empty-result suggestions
//! - The show command against mocked external services
//! - Error handling for missing datasets and unknown species

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Helper to create a test dataset CSV
fn create_test_dataset(dir: &TempDir) -> PathBuf {
    let dataset_path = dir.path().join("species.csv");
    let content = "\
Scientific Name,Common Name,Class,Category
Hexanchus griseus,Bluntnose Sixgill Shark,CHONDRICHTHYES,NT
Loxodonta africana,African Elephant,MAMMALIA,EN
Chamaeleo africanus,,REPTILIA,LC
Pedaria durandi,,INSECTA,EX
";
    fs::write(&dataset_path, content).expect("Failed to create test dataset");
    dataset_path
}

fn sdp() -> Command {
    let mut cmd = Command::cargo_bin("sdp").unwrap();
    // Keep lookups away from the real services even when unset in the test
    cmd.env("SDP_REDLIST_URL", "http://127.0.0.1:9")
        .env("SDP_WIKI_URL", "http://127.0.0.1:9")
        .env("SDP_REDLIST_TOKEN", "test-token");
    cmd
}

#[test]
fn test_search_compact_format() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    sdp()
        .arg("search")
        .arg("african")
        .arg("--no-interactive")
        .arg("--format")
        .arg("compact")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loxodonta africana"))
        .stdout(predicate::str::contains("African Elephant"))
        .stdout(predicate::str::contains("Chamaeleo africanus"))
        .stdout(predicate::str::contains("Hexanchus griseus").not());
}

#[test]
fn test_search_json_format() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    let output = sdp()
        .arg("search")
        .arg("shark")
        .arg("--no-interactive")
        .arg("--format")
        .arg("json")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value =
        serde_json::from_slice(&output).expect("JSON output should parse");
    let results = parsed.as_array().expect("JSON output should be an array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["scientific_name"], "Hexanchus griseus");
    assert_eq!(results[0]["common_name"], "Bluntnose Sixgill Shark");
}

#[test]
fn test_search_orders_by_severity() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    let output = sdp()
        .arg("search")
        .arg("--no-interactive")
        .arg("--format")
        .arg("compact")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let extinct = stdout.find("Pedaria durandi").unwrap();
    let endangered = stdout.find("Loxodonta africana").unwrap();
    let near_threatened = stdout.find("Hexanchus griseus").unwrap();
    let least_concern = stdout.find("Chamaeleo africanus").unwrap();
    assert!(extinct < endangered);
    assert!(endangered < near_threatened);
    assert!(near_threatened < least_concern);
}

#[test]
fn test_search_status_filter() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    sdp()
        .arg("search")
        .arg("--status")
        .arg("Endangered")
        .arg("--no-interactive")
        .arg("--format")
        .arg("compact")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loxodonta africana"))
        .stdout(predicate::str::contains("Pedaria durandi").not());
}

#[test]
fn test_search_no_results_suggests_similar() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    sdp()
        .arg("search")
        .arg("african elephannt")
        .arg("--no-interactive")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("No results found"))
        .stdout(predicate::str::contains("African Elephant"));
}

#[test]
fn test_search_missing_dataset_fails() {
    let dir = TempDir::new().unwrap();

    sdp()
        .arg("search")
        .arg("shark")
        .arg("--no-interactive")
        .arg("--dataset")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dataset not found"));
}

#[tokio::test]
async fn test_show_renders_threats_and_summary() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/taxa/scientific_name/Hexanchus%20griseus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "assessments": [
                {"assessment_id": 42, "latest": true}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v4/assessment/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "threats": [
                {"title": "Fishing & harvesting aquatic resources"}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Hexanchus_griseus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "extract": "The bluntnose sixgill shark is a deepwater shark."
        })))
        .mount(&server)
        .await;

    let output = tokio::task::spawn_blocking({
        let uri = server.uri();
        let dataset = dataset.clone();
        move || {
            let mut cmd = Command::cargo_bin("sdp").unwrap();
            cmd.env("SDP_REDLIST_URL", &uri)
                .env("SDP_WIKI_URL", &uri)
                .env("SDP_REDLIST_TOKEN", "test-token")
                .arg("show")
                .arg("Hexanchus griseus")
                .arg("--dataset")
                .arg(&dataset);
            cmd.assert().success().get_output().stdout.clone()
        }
    })
    .await
    .unwrap();

    let stdout = String::from_utf8(output).unwrap();
    assert!(stdout.contains("Bluntnose Sixgill Shark"));
    assert!(stdout.contains("Near Threatened"));
    assert!(stdout.contains("Fishing & harvesting aquatic resources"));
    assert!(stdout.contains("deepwater shark"));
}

#[test]
fn test_show_unknown_species_fails() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    sdp()
        .arg("show")
        .arg("Tyrannosaurus rex")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tyrannosaurus rex"));
}

#[test]
fn test_show_survives_unreachable_services() {
    let dir = TempDir::new().unwrap();
    let dataset = create_test_dataset(&dir);

    // Lookups are total: unreachable services degrade to fallback text
    sdp()
        .arg("show")
        .arg("Loxodonta africana")
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("African Elephant"))
        .stdout(predicate::str::contains("Connection error"));
}
