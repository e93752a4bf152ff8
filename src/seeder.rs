//! Main seeding entry point for docseed.
//!
//! This module provides the `Seeder` struct, which pairs a
//! [`DocumentWriter`] with a write mode and pushes collections through it.

use crate::error::{Error, Result};
use docseed_client::{
    upload_collection, DocumentWriter, Endpoint, HttpWriter, UploadReport, WriteMode,
    DEFAULT_TIMEOUT,
};
use docseed_core::{Collection, DocumentId};
use docseed_dataset::{SeedFile, TargetConfig};
use docseed_wire::{encode_document, to_json, to_json_pretty, Document, EncodeError};
use std::time::Duration;
use tracing::info;

/// Uploads collections to a document store.
///
/// Create one from a seed file with [`Seeder::from_seed_file`] or configure
/// it with [`Seeder::builder`].
///
/// # Example
///
/// ```no_run
/// use docseed::prelude::*;
///
/// let seed = SeedFile::from_path("data/classroom.toml")?;
/// let seeder = Seeder::from_seed_file(&seed)?;
///
/// let report = seeder.seed(seed.collections());
/// println!("{}", report.summary());
/// # Ok::<(), docseed::Error>(())
/// ```
pub struct Seeder {
    writer: Box<dyn DocumentWriter>,
    mode: WriteMode,
}

impl Seeder {
    /// Create a builder for seeder configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use docseed::prelude::*;
    /// use std::time::Duration;
    ///
    /// let seeder = Seeder::builder()
    ///     .base_url("http://localhost:8080/documents")?
    ///     .write_mode(WriteMode::Create)
    ///     .timeout(Duration::from_secs(5))
    ///     .build()?;
    /// assert_eq!(seeder.write_mode(), WriteMode::Create);
    /// # Ok::<(), docseed::Error>(())
    /// ```
    pub fn builder() -> SeederBuilder {
        SeederBuilder::new()
    }

    /// Build an HTTP seeder from a seed file's `[target]` table.
    pub fn from_seed_file(seed: &SeedFile) -> Result<Self> {
        Self::builder().target(&seed.target)?.build()
    }

    /// Write mode used for every document.
    pub fn write_mode(&self) -> WriteMode {
        self.mode
    }

    /// Upload collections in order, one document at a time.
    ///
    /// Failed writes are recorded in the report and never stop the run.
    pub fn seed<'a, I>(&self, collections: I) -> UploadReport
    where
        I: IntoIterator<Item = &'a Collection>,
    {
        let mut report = UploadReport::new();
        for collection in collections {
            report.merge(upload_collection(self.writer.as_ref(), self.mode, collection));
        }
        info!(mode = %self.mode, "seeding finished: {}", report.summary());
        report
    }

    /// Upload only the named collections of a seed file.
    ///
    /// An empty `names` uploads everything. Unknown names fail before any
    /// write is attempted.
    pub fn seed_only<S: AsRef<str>>(&self, seed: &SeedFile, names: &[S]) -> Result<UploadReport> {
        let selected = seed.select(names)?;
        Ok(self.seed(selected))
    }

    /// Encode every document of a collection without sending anything.
    pub fn render(collection: &Collection) -> Result<Vec<(DocumentId, String)>> {
        render_with(collection, to_json)
    }

    /// Like [`Seeder::render`], with indented JSON.
    pub fn render_pretty(collection: &Collection) -> Result<Vec<(DocumentId, String)>> {
        render_with(collection, to_json_pretty)
    }
}

fn render_with<F>(collection: &Collection, to_text: F) -> Result<Vec<(DocumentId, String)>>
where
    F: Fn(&Document) -> std::result::Result<String, EncodeError>,
{
    collection
        .documents()
        .iter()
        .map(|(id, record)| -> Result<(DocumentId, String)> {
            Ok((id.clone(), to_text(&encode_document(record))?))
        })
        .collect()
}

/// Builder for seeder configuration.
///
/// Either an endpoint or a custom writer must be set. A custom writer
/// takes precedence, and the endpoint and timeout are then ignored.
pub struct SeederBuilder {
    endpoint: Option<Endpoint>,
    mode: WriteMode,
    timeout: Duration,
    writer: Option<Box<dyn DocumentWriter>>,
}

impl SeederBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: None,
            mode: WriteMode::default(),
            timeout: DEFAULT_TIMEOUT,
            writer: None,
        }
    }

    /// Set the documents root.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Parse and set the documents root.
    pub fn base_url(self, url: &str) -> Result<Self> {
        Ok(self.endpoint(Endpoint::parse(url)?))
    }

    /// Target a project on the hosted document API.
    pub fn project(self, project_id: &str) -> Result<Self> {
        Ok(self.endpoint(Endpoint::for_project(project_id)?))
    }

    /// Apply a `[target]` table: endpoint, write mode and timeout.
    pub fn target(self, target: &TargetConfig) -> Result<Self> {
        let endpoint = target.endpoint()?;
        Ok(self
            .endpoint(endpoint)
            .write_mode(target.write_mode)
            .timeout(target.timeout()))
    }

    /// Set the write mode (default: upsert).
    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the per-request timeout for the HTTP writer.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom writer instead of HTTP.
    pub fn writer(mut self, writer: Box<dyn DocumentWriter>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Build the seeder.
    pub fn build(self) -> Result<Seeder> {
        let writer = match (self.writer, self.endpoint) {
            (Some(writer), _) => writer,
            (None, Some(endpoint)) => {
                info!(endpoint = %endpoint, timeout_secs = self.timeout.as_secs(), "using HTTP writer");
                Box::new(HttpWriter::with_timeout(endpoint, self.timeout))
            }
            (None, None) => {
                return Err(Error::Config(
                    "no endpoint or writer configured".to_string(),
                ))
            }
        };
        Ok(Seeder {
            writer,
            mode: self.mode,
        })
    }
}

impl Default for SeederBuilder {
    fn default() -> Self {
        Self::new()
    }
}
