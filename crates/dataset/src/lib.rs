//! Seed file loading for docseed
//!
//! | Type | Role |
//! |------|------|
//! | [`SeedFile`] | Validated collections plus the `[target]` table |
//! | [`TargetConfig`] | Base URL or project id, write mode, timeout |
//! | [`DatasetError`] | Everything that can go wrong before a write |
//!
//! ```
//! use docseed_dataset::SeedFile;
//!
//! let seed = SeedFile::from_toml_str(r#"
//!     [target]
//!     base_url = "http://localhost:8080/documents"
//!
//!     [[collections]]
//!     name = "salones"
//!
//!     [collections.documents.S1]
//!     capacidad = 30
//! "#).unwrap();
//!
//! assert_eq!(seed.document_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod digest;
mod error;
mod seed;
mod target;

pub use digest::{apply_digests, sha256_hex};
pub use error::{DatasetError, Result};
pub use seed::SeedFile;
pub use target::TargetConfig;
