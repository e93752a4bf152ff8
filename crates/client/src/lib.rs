//! Document API client for docseed
//!
//! - [`Endpoint`]: documents root and request URL layout
//! - [`WriteMode`]: upsert (`PATCH`) or create (`POST ?documentId=`)
//! - [`DocumentWriter`]: transport seam, implemented by [`HttpWriter`]
//!   (blocking `ureq`) and [`MemoryWriter`]
//! - [`upload_collection`]: sequential best-effort upload with an
//!   [`UploadReport`]

#![warn(missing_docs)]
#![warn(clippy::all)]

mod endpoint;
mod memory;
mod mode;
mod upload;
mod writer;

pub use endpoint::{Endpoint, EndpointError, DEFAULT_API_ROOT};
pub use memory::{MemoryWriter, RecordedWrite};
pub use mode::WriteMode;
pub use upload::{upload_collection, RecordOutcome, UploadReport};
pub use writer::{DocumentWriter, HttpWriter, WriteError, WriteRequest, DEFAULT_TIMEOUT};
