//! HTTP Tests
//!
//! Full runs against a local listener speaking just enough HTTP/1.1.

use std::time::Duration;

use docseed::{SeedFile, Seeder, WriteError, WriteMode};

use crate::*;

fn http_seeder(base_url: &str, mode: WriteMode) -> Seeder {
    let seed = SeedFile::from_toml_str(SMALL_SEED).unwrap();
    let target = seed
        .target
        .clone()
        .with_base_url(base_url)
        .with_write_mode(mode)
        .with_timeout_secs(5);
    Seeder::builder().target(&target).unwrap().build().unwrap()
}

#[test]
fn test_upsert_run_sends_patches() {
    let server = RecordingServer::start(vec![(200, "{}"); 3]);
    let seeder = http_seeder(&server.base_url, WriteMode::Upsert);

    let report = seeder.seed(SeedFile::from_toml_str(SMALL_SEED).unwrap().collections());
    let requests = server.finish();

    assert!(report.is_success());
    let lines: Vec<_> = requests
        .iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        lines,
        vec![
            "PATCH /v1/projects/demo/databases/(default)/documents/usuarios/1042",
            "PATCH /v1/projects/demo/databases/(default)/documents/usuarios/2033",
            "PATCH /v1/projects/demo/databases/(default)/documents/salones/MONITOR",
        ]
    );

    let body: serde_json::Value = serde_json::from_str(&requests[2].body).unwrap();
    assert_eq!(
        body["fields"]["capacidad"],
        serde_json::json!({"integerValue": "20"})
    );
}

#[test]
fn test_create_run_posts_with_document_id() {
    let server = RecordingServer::start(vec![(200, "{}"); 3]);
    let seeder = http_seeder(&server.base_url, WriteMode::Create);

    seeder.seed(SeedFile::from_toml_str(SMALL_SEED).unwrap().collections());
    let requests = server.finish();

    assert!(requests.iter().all(|r| r.method == "POST"));
    assert_eq!(
        requests[0].path,
        "/v1/projects/demo/databases/(default)/documents/usuarios?documentId=1042"
    );
}

#[test]
fn test_rejection_is_reported_and_run_continues() {
    let denied = r#"{"error":{"code":403,"message":"Missing or insufficient permissions.","status":"PERMISSION_DENIED"}}"#;
    let server = RecordingServer::start(vec![(200, "{}"), (403, denied), (200, "{}")]);
    let seeder = http_seeder(&server.base_url, WriteMode::Upsert);

    let report = seeder.seed(SeedFile::from_toml_str(SMALL_SEED).unwrap().collections());
    assert_eq!(server.finish().len(), 3);

    assert_eq!(report.succeeded(), 2);
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.doc_id.as_str(), "2033");
    assert_eq!(
        failure.error,
        Some(WriteError::Rejected {
            status: 403,
            body: denied.to_string()
        })
    );
}

#[test]
fn test_non_200_success_status_is_rejected() {
    let server = RecordingServer::start(vec![(201, "{}"), (200, "{}"), (200, "{}")]);
    let seeder = http_seeder(&server.base_url, WriteMode::Upsert);

    let report = seeder.seed(SeedFile::from_toml_str(SMALL_SEED).unwrap().collections());
    server.finish();

    assert_eq!(report.failed(), 1);
    assert!(report.failures().all(|f| f
        .error
        .as_ref()
        .is_some_and(|e| matches!(e, WriteError::Rejected { status: 201, .. }))));
}

#[test]
fn test_unreachable_host_is_transport_failure() {
    let seeder = Seeder::builder()
        .base_url(&unreachable_base_url())
        .unwrap()
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let report = seeder.seed(SeedFile::from_toml_str(SMALL_SEED).unwrap().collections());

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.succeeded(), 0);
    assert!(report
        .failures()
        .all(|f| f.error.as_ref().is_some_and(WriteError::is_transport)));
}
