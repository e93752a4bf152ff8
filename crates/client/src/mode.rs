//! Write semantics supported by the document API

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a document is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// `PATCH <base>/<collection>/<id>`: create, or replace an existing document
    Upsert,
    /// `POST <base>/<collection>?documentId=<id>`: create, fail if the id exists
    Create,
}

impl Default for WriteMode {
    fn default() -> Self {
        WriteMode::Upsert
    }
}

impl WriteMode {
    /// HTTP method used for this mode
    pub fn method(&self) -> &'static str {
        match self {
            WriteMode::Upsert => "PATCH",
            WriteMode::Create => "POST",
        }
    }

    /// Lowercase name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteMode::Upsert => "upsert",
            WriteMode::Create => "create",
        }
    }
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WriteMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" | "patch" => Ok(WriteMode::Upsert),
            "create" | "post" => Ok(WriteMode::Create),
            other => Err(format!(
                "unknown write mode '{}' (expected 'upsert' or 'create')",
                other
            )),
        }
    }
}
