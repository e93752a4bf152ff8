//! # docseed
//!
//! Bulk seeding of document databases through their HTTP document API.
//!
//! Records are built from a closed [`Value`] model, encoded into the
//! store's field-tagged JSON wire format and written one document at a
//! time. A failed write is reported and never stops the rest of the run.
//!
//! ## Quick Start
//!
//! ```
//! use docseed::prelude::*;
//! use std::sync::Arc;
//!
//! let seed = SeedFile::from_toml_str(r#"
//!     [[collections]]
//!     name = "salones"
//!
//!     [collections.documents.MONITOR]
//!     nombre = "Laboratorio IoT"
//!     capacidad = 20
//!     horario = [5, 6]
//! "#)?;
//!
//! // In-memory writer; use `Seeder::from_seed_file` for HTTP
//! let store = Arc::new(MemoryWriter::new());
//! let seeder = Seeder::builder().writer(Box::new(store.clone())).build()?;
//!
//! let report = seeder.seed(seed.collections());
//! assert!(report.is_success());
//! assert_eq!(store.field("salones", "MONITOR", "capacidad"), Some(Value::Int(20)));
//! # Ok::<(), docseed::Error>(())
//! ```
//!
//! ## Layers
//!
//! | Crate | Role |
//! |-------|------|
//! | `docseed-core` | [`Value`], [`Record`], [`Collection`], validated ids |
//! | `docseed-wire` | Field-tagged JSON encoding and decoding |
//! | `docseed-client` | Endpoints, write modes, HTTP writer, bulk upload |
//! | `docseed-dataset` | TOML / JSON seed files and `[target]` config |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod seeder;
mod types;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use seeder::{Seeder, SeederBuilder};

// Re-export types
pub use types::*;

// Wire format functions
pub use docseed_wire::{decode_document, encode_document, encode_json, encode_value};
