//! Seed files
//!
//! A seed file declares the write target and the collections to upload:
//!
//! ```toml
//! [target]
//! project_id = "smartclassroom-b40d1"
//! write_mode = "upsert"
//!
//! [[collections]]
//! name = "usuarios"
//! digest_fields = ["contrasena_hash"]
//!
//! [collections.documents."1042"]
//! nombre = "Mario López"
//! contrasena_hash = "mario123"
//! horario = [5, 6]
//! activo = true
//! ```
//!
//! The same layout is accepted as JSON. Collections and documents keep the
//! order they appear in the file.

use crate::digest::apply_digests;
use crate::error::{DatasetError, Result};
use crate::target::TargetConfig;
use docseed_core::{Collection, CollectionName, DocumentId, Record, Value, ValueError};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "D: Deserialize<'de> + Default"))]
struct RawSeedFile<D> {
    #[serde(default)]
    target: TargetConfig,
    #[serde(default)]
    collections: Vec<RawCollection<D>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "D: Deserialize<'de> + Default"))]
struct RawCollection<D> {
    name: String,
    #[serde(default)]
    digest_fields: Vec<String>,
    #[serde(default)]
    documents: D,
}

/// A loaded, validated seed file
#[derive(Debug, Clone, PartialEq)]
pub struct SeedFile {
    /// Write target, possibly incomplete until overridden
    pub target: TargetConfig,
    collections: Vec<Collection>,
}

impl SeedFile {
    /// Build a seed file from already-constructed collections
    pub fn new(target: TargetConfig, collections: Vec<Collection>) -> Result<Self> {
        target.validate()?;
        let mut seen = HashSet::new();
        for c in &collections {
            if !seen.insert(c.name().as_str().to_string()) {
                return Err(DatasetError::DuplicateCollection(c.name().to_string()));
            }
        }
        Ok(Self {
            target,
            collections,
        })
    }

    /// Load a `.toml` or `.json` seed file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(DatasetError::UnknownFormat(path.to_path_buf())),
        };

        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = parse(&text)?;
        debug!(
            path = %path.display(),
            collections = seed.collections.len(),
            documents = seed.document_count(),
            "loaded seed file"
        );
        Ok(seed)
    }

    /// Parse a TOML seed file
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let raw: RawSeedFile<toml::Table> =
            toml::from_str(text).map_err(|e| DatasetError::Parse {
                format: "TOML",
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Parse a JSON seed file
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: RawSeedFile<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(text).map_err(|e| DatasetError::Parse {
                format: "JSON",
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    fn from_raw<D, V>(raw: RawSeedFile<D>) -> Result<Self>
    where
        D: IntoIterator<Item = (String, V)>,
        Value: TryFrom<V, Error = ValueError>,
    {
        let collections = raw
            .collections
            .into_iter()
            .map(build_collection)
            .collect::<Result<Vec<_>>>()?;
        Self::new(raw.target, collections)
    }

    /// Collections in file order
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Look up a collection by name
    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name().as_str() == name)
    }

    /// Collections named in `names`, in the order given
    ///
    /// An empty list selects every collection.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&Collection>> {
        if names.is_empty() {
            return Ok(self.collections.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.collection(name.as_ref())
                    .ok_or_else(|| DatasetError::UnknownCollection(name.as_ref().to_string()))
            })
            .collect()
    }

    /// Total documents across collections
    pub fn document_count(&self) -> usize {
        self.collections.iter().map(Collection::len).sum()
    }
}

fn build_collection<D, V>(raw: RawCollection<D>) -> Result<Collection>
where
    D: IntoIterator<Item = (String, V)>,
    Value: TryFrom<V, Error = ValueError>,
{
    let name = CollectionName::new(raw.name).map_err(DatasetError::InvalidCollectionName)?;
    let mut collection = Collection::new(name.clone());

    for (id, body) in raw.documents {
        let doc_id = DocumentId::new(id).map_err(|source| DatasetError::InvalidDocumentId {
            collection: name.to_string(),
            source,
        })?;
        let invalid = |source| DatasetError::InvalidRecord {
            collection: name.to_string(),
            doc_id: doc_id.to_string(),
            source,
        };
        let mut record = Value::try_from(body)
            .and_then(Record::try_from)
            .map_err(invalid)?;
        apply_digests(
            name.as_str(),
            doc_id.as_str(),
            &mut record,
            &raw.digest_fields,
        )?;
        collection.insert(doc_id, record);
    }

    Ok(collection)
}
