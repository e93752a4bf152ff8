//! Upload Tests
//!
//! Best-effort bulk upload through the in-memory writer.

use docseed::{SeedFile, Value, WriteError, WriteMode};

use crate::*;

fn small_seed() -> SeedFile {
    SeedFile::from_toml_str(SMALL_SEED).unwrap()
}

// =============================================================================
// ORDER AND CONTENT
// =============================================================================

#[test]
fn test_writes_follow_file_order() {
    let (seeder, store) = memory_seeder(WriteMode::Upsert);
    let seed = small_seed();

    let report = seeder.seed(seed.collections());
    assert!(report.is_success());
    assert_eq!(report.attempted(), 3);

    let order: Vec<_> = store
        .writes()
        .into_iter()
        .map(|w| format!("{}/{}", w.collection, w.doc_id))
        .collect();
    assert_eq!(order, vec!["usuarios/1042", "usuarios/2033", "salones/MONITOR"]);
}

#[test]
fn test_stored_documents_decode_to_records() {
    let (seeder, store) = memory_seeder(WriteMode::Upsert);
    let seed = small_seed();
    seeder.seed(seed.collections());

    for collection in seed.collections() {
        for (doc_id, record) in collection.documents() {
            let stored = store
                .record(collection.name().as_str(), doc_id.as_str())
                .unwrap()
                .unwrap();
            assert_eq!(&stored, record);
        }
    }
    assert_eq!(
        store.field("salones", "MONITOR", "horario"),
        Some(Value::Array(vec![Value::Int(5), Value::Int(6)]))
    );
}

#[test]
fn test_seed_only_selected_collections() {
    let (seeder, store) = memory_seeder(WriteMode::Upsert);
    let seed = small_seed();

    let report = seeder.seed_only(&seed, &["salones"]).unwrap();
    assert_eq!(report.attempted(), 1);
    assert!(store.ids("usuarios").is_empty());
    assert_eq!(store.ids("salones"), vec!["MONITOR".to_string()]);
}

#[test]
fn test_seed_only_unknown_collection_writes_nothing() {
    let (seeder, store) = memory_seeder(WriteMode::Upsert);
    let seed = small_seed();

    assert!(seeder.seed_only(&seed, &["salones", "profesores"]).is_err());
    assert!(store.writes().is_empty());
}

// =============================================================================
// WRITE MODES
// =============================================================================

#[test]
fn test_upsert_is_repeatable() {
    let (seeder, store) = memory_seeder(WriteMode::Upsert);
    let seed = small_seed();

    assert!(seeder.seed(seed.collections()).is_success());
    let first = store.body("usuarios", "1042");
    assert!(seeder.seed(seed.collections()).is_success());

    assert_eq!(store.len(), 3);
    assert_eq!(store.body("usuarios", "1042"), first);
}

#[test]
fn test_create_twice_is_rejected() {
    let (seeder, store) = memory_seeder(WriteMode::Create);
    let seed = small_seed();

    assert!(seeder.seed(seed.collections()).is_success());
    let second = seeder.seed(seed.collections());

    assert_eq!(second.failed(), 3);
    assert!(second
        .failures()
        .all(|f| matches!(f.error, Some(WriteError::Rejected { status: 409, .. }))));
    assert_eq!(store.len(), 3);
    assert!(store.writes().iter().all(|w| w.mode == WriteMode::Create));
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_failure_does_not_stop_run() {
    let (seeder, store) = memory_seeder(WriteMode::Upsert);
    store.fail_with(
        "usuarios",
        "1042",
        WriteError::Rejected {
            status: 400,
            body: r#"{"error":{"code":400,"status":"INVALID_ARGUMENT"}}"#.into(),
        },
    );
    store.fail_with(
        "salones",
        "MONITOR",
        WriteError::Transport("connection reset".into()),
    );

    let report = seeder.seed(small_seed().collections());

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.succeeded(), 1);
    assert!(!report.is_success());
    assert_eq!(store.ids("usuarios"), vec!["2033".to_string()]);
    assert_eq!(
        report.summary(),
        "3 attempted, 1 written, 2 failed (1 rejected, 1 transport)"
    );

    let failed: Vec<_> = report
        .failures()
        .map(|f| (f.collection.as_str(), f.doc_id.as_str()))
        .collect();
    assert_eq!(failed, vec![("usuarios", "1042"), ("salones", "MONITOR")]);
}
