//! Versioned Structured-Output Records
//!
//! ## Overview
//!
//! Every protocol descriptor can be rendered as a flat record: the generic
//! URL fields (`href`, `protocol`, `username`, ... `hash`) followed by the
//! fields its protocol adds (`mailbox`, `database`, `will`, ...). The shape of
//! each record is fixed per protocol and published as a versioned layout, so
//! a consumer reading serialized records knows exactly what to expect.
//!
//! ## Layout Evolution
//!
//! 1. **Always Append**: new fields go after existing ones
//! 2. **Version in Name**: `redis_url_v1`, `redis_url_v2`
//! 3. **Never Edit**: a published layout is frozen
//!
//! ## Usage Example
//!
//! ```rust
//! use protourl_schemas::GLOBAL_REGISTRY;
//! use serde_json::json;
//!
//! let record = json!({
//!     "href": "smtps://mail.example.com:2345/",
//!     "protocol": "smtps:",
//!     "username": "",
//!     "password": "",
//!     "host": "mail.example.com:2345",
//!     "hostname": "mail.example.com",
//!     "port": "2345",
//!     "origin": "smtps://mail.example.com:2345",
//!     "pathname": "/",
//!     "search": "",
//!     "searchParams": {},
//!     "hash": "",
//!     "useTLS": true,
//! });
//!
//! GLOBAL_REGISTRY.validate("smtp_url_v1", &record)?;
//! # Ok::<(), protourl_schemas::SchemaError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde::Serialize;

pub mod record;
pub mod registry;
pub mod schemas;
pub mod validation;

pub use record::UrlRecord;
pub use registry::{SchemaRegistry, GLOBAL_REGISTRY};
pub use schemas::{FieldKind, FieldSpec, RecordSchema};
pub use validation::{RecordValidator, ValidationReport};

/// Layout version every record currently serializes as
pub const RECORD_VERSION: &str = "v1";

/// Schema-related errors
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// No layout registered under the name
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// A record or registration didn't pass validation
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A record couldn't be serialized
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Serialization interface shared by every protocol descriptor
pub trait ToRecord {
    /// The statically-known record shape
    type Record: Serialize;

    /// Base name of the record layout, e.g. `"imap_url"`
    const SCHEMA: &'static str;

    /// Build the record
    fn to_record(&self) -> Self::Record;

    /// Qualified layout name for the current version, e.g. `"imap_url_v1"`
    fn schema_name() -> String {
        format!("{}_{}", Self::SCHEMA, RECORD_VERSION)
    }

    /// Render the record as JSON
    fn to_json(&self) -> Result<serde_json::Value, SchemaError> {
        Ok(serde_json::to_value(self.to_record())?)
    }
}
