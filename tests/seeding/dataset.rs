//! Seed File Loading Tests
//!
//! Tests for SeedFile parsing, validation and digest fields.

use std::collections::HashMap;

use docseed::{SeedFile, Value, WriteMode};

use crate::*;

const MARIO_DIGEST: &str = "b4728a4cdc82644eb648f4f4a26844e94557d56356b1b615c6698e81f7907601";
const PASS1234_DIGEST: &str = "bd94dcda26fccb4e68d6a31f9b5aac0b571ae266d822620e901ef7ebe3a11d4f";

// =============================================================================
// DEMO DATASET
// =============================================================================

#[test]
fn test_classroom_dataset_loads() {
    let seed = SeedFile::from_path(classroom_path()).unwrap();

    assert_eq!(seed.target.project_id.as_deref(), Some("smartclassroom-b40d1"));
    assert_eq!(seed.target.write_mode, WriteMode::Upsert);

    let counts: Vec<_> = seed
        .collections()
        .iter()
        .map(|c| (c.name().as_str(), c.len()))
        .collect();
    assert_eq!(counts, vec![("usuarios", 8), ("salones", 4), ("alumnos", 4)]);
    assert_eq!(seed.document_count(), 16);
}

#[test]
fn test_classroom_passwords_are_digested() {
    let seed = SeedFile::from_path(classroom_path()).unwrap();
    let usuarios = seed.collection("usuarios").unwrap();

    let hash = |id: &str| {
        usuarios
            .get(id)
            .and_then(|r| r.get("contrasena_hash"))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    assert_eq!(hash("1042").as_deref(), Some(MARIO_DIGEST));
    assert_eq!(hash("1001").as_deref(), Some(PASS1234_DIGEST));
    assert_eq!(hash("1001"), hash("1005"));
}

#[test]
fn test_classroom_nested_subjects() {
    let seed = SeedFile::from_path(classroom_path()).unwrap();
    let david = seed.collection("alumnos").unwrap().get("20231245").unwrap();

    assert_eq!(david.get("rfid"), Some(&Value::from("CA 31 48 01")));

    let mut subject = HashMap::new();
    subject.insert("horario".to_string(), Value::from(vec![5i64, 6]));
    subject.insert("maestro".to_string(), Value::from("1042"));
    subject.insert("salon".to_string(), Value::from("MONITOR"));
    let mut materias = HashMap::new();
    materias.insert("Sistemas Embebidos".to_string(), Value::Object(subject));

    assert_eq!(david.get("materias"), Some(&Value::Object(materias)));
}

// =============================================================================
// FORMATS AND VALIDATION
// =============================================================================

#[test]
fn test_json_seed_file() {
    let (_dir, path) = write_seed(
        "seed.json",
        r#"{
            "target": {"project_id": "demo"},
            "collections": [
                {"name": "salones", "documents": {
                    "S1": {"nombre": "Aula 101", "capacidad": 40, "activo": true}
                }}
            ]
        }"#,
    );

    let seed = SeedFile::from_path(&path).unwrap();
    let s1 = seed.collection("salones").unwrap().get("S1").unwrap();
    assert_eq!(s1.get("capacidad"), Some(&Value::Int(40)));
    assert_eq!(s1.get("activo"), Some(&Value::Bool(true)));
}

#[test]
fn test_bad_document_id_fails_before_any_write() {
    let (_dir, path) = write_seed(
        "seed.toml",
        r#"
        [[collections]]
        name = "salones"
        [collections.documents.".."]
        nombre = "x"
        "#,
    );

    let err = docseed::Error::from(SeedFile::from_path(&path).unwrap_err());
    assert!(err.is_dataset());
    assert!(err.to_string().contains("document id"), "{}", err);
}

#[test]
fn test_ambiguous_target_rejected() {
    let (_dir, path) = write_seed(
        "seed.toml",
        r#"
        [target]
        project_id = "demo"
        base_url = "http://localhost:8080/documents"
        "#,
    );

    let err = docseed::Error::from(SeedFile::from_path(&path).unwrap_err());
    assert!(err.is_config());
}

#[test]
fn test_unknown_collection_selection() {
    let (_dir, path) = write_seed("seed.toml", SMALL_SEED);
    let seed = SeedFile::from_path(&path).unwrap();

    assert!(seed.select(&["usuarios", "salones"]).is_ok());
    assert!(seed.select(&["profesores"]).is_err());
}
