//! Value model for docseed
//!
//! Every record written to the document store is built from the closed
//! [`Value`] enum. Identifiers are validated newtypes so malformed ids are
//! rejected while a dataset is loaded.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use error::{IdError, ValueError};
pub use record::{Collection, Record};
pub use types::{CollectionName, DocumentId, MAX_ID_BYTES};
pub use value::{SpecialFloatKind, Value};
