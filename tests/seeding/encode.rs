//! Encoding Tests
//!
//! Dry-run rendering of seed files into request bodies.

use docseed::{decode_document, encode_json, Record, SeedFile, Seeder, Value};

use crate::*;

#[test]
fn test_reference_document() {
    let record = Record::new()
        .with("nombre", "Ana")
        .with("activo", true)
        .with("horario", vec![1i64, 2]);

    let json: serde_json::Value = serde_json::from_str(&encode_json(&record).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "fields": {
                "nombre": {"stringValue": "Ana"},
                "activo": {"booleanValue": true},
                "horario": {"arrayValue": {"values": [
                    {"integerValue": "1"},
                    {"integerValue": "2"}
                ]}}
            }
        })
    );
}

#[test]
fn test_render_classroom_students() {
    let seed = SeedFile::from_path(classroom_path()).unwrap();
    let alumnos = seed.collection("alumnos").unwrap();

    let rendered = Seeder::render(alumnos).unwrap();
    let ids: Vec<_> = rendered.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["20231245", "20239901", "20239902", "20239903"]);

    let body: serde_json::Value = serde_json::from_str(&rendered[0].1).unwrap();
    assert_eq!(
        body["fields"]["materias"]["mapValue"]["fields"]["Sistemas Embebidos"]["mapValue"]
            ["fields"]["maestro"],
        serde_json::json!({"stringValue": "1042"})
    );
    assert_eq!(
        body["fields"]["activo"],
        serde_json::json!({"booleanValue": true})
    );
}

#[test]
fn test_rendered_bodies_decode_back() {
    let seed = SeedFile::from_path(classroom_path()).unwrap();

    for collection in seed.collections() {
        for ((id, body), (doc_id, record)) in Seeder::render_pretty(collection)
            .unwrap()
            .into_iter()
            .zip(collection.documents())
        {
            assert_eq!(&id, doc_id);
            assert_eq!(&decode_document(&body).unwrap(), record);
        }
    }
}

#[test]
fn test_null_and_float_fields() {
    let (_dir, path) = write_seed(
        "seed.json",
        r#"{"collections": [{"name": "alumnos", "documents": {
            "1": {"tutor": null, "promedio": 9.25}
        }}]}"#,
    );
    let seed = SeedFile::from_path(&path).unwrap();
    let rendered = Seeder::render(seed.collection("alumnos").unwrap()).unwrap();

    assert_eq!(
        rendered[0].1,
        r#"{"fields":{"promedio":{"doubleValue":9.25},"tutor":{"nullValue":null}}}"#
    );
    let record = decode_document(&rendered[0].1).unwrap();
    assert_eq!(record.get("tutor"), Some(&Value::Null));
}
