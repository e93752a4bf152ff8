//! Field digests
//!
//! Fields listed in a collection's `digest_fields` hold plaintext in the
//! seed file and are stored as the lowercase hex SHA-256 of their bytes.

use crate::error::{DatasetError, Result};
use docseed_core::{Record, Value};
use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of a UTF-8 string
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Replace each listed string field with its digest
///
/// Absent fields are skipped; a present non-string field is an error.
pub fn apply_digests(
    collection: &str,
    doc_id: &str,
    record: &mut Record,
    fields: &[String],
) -> Result<()> {
    for field in fields {
        match record.get_mut(field) {
            None => {}
            Some(Value::String(plain)) => *plain = sha256_hex(plain),
            Some(other) => {
                return Err(DatasetError::DigestField {
                    collection: collection.to_string(),
                    doc_id: doc_id.to_string(),
                    field: field.clone(),
                    actual: other.type_name(),
                })
            }
        }
    }
    Ok(())
}
