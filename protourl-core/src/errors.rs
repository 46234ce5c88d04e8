//! Error Types for Connection URL Construction
//!
//! ## Design Philosophy
//!
//! Every failure happens while a descriptor is being built. Once a
//! [`ProtocolUrl`](crate::ProtocolUrl) exists, none of its accessors can fail:
//! malformed or missing query parameters degrade to `None` instead.
//!
//! The split mirrors which parts of a connection string are structural:
//!
//! - **Scheme**: a string that does not start with an accepted protocol prefix
//!   can't be interpreted at all (`InvalidScheme`).
//! - **Authority / syntax**: the generic decomposer rejected the remainder
//!   (`Malformed`), e.g. `imap://` with no host.
//! - **Path identifiers**: a Redis database segment that is not a number
//!   (`InvalidDatabaseFormat`) or falls outside the server's range
//!   (`DatabaseOutOfRange`).
//!
//! Query parameters are optional by nature and never produce an error.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use protourl_core::{ProtocolError, ProtocolUrl, Profile};
//!
//! struct Smtp;
//! impl Profile for Smtp {
//!     const NAME: &'static str = "SMTP";
//!     const SCHEMES: &'static [&'static str] = &["smtps:", "smtp:"];
//!     const SECURE_SCHEME: &'static str = "smtps:";
//!     const DEFAULT_PORT: u16 = 25;
//!     const SECURE_PORT: u16 = 587;
//! }
//!
//! match ProtocolUrl::parse::<Smtp>("http://mail.example.com") {
//!     Ok(_) => unreachable!(),
//!     Err(ProtocolError::InvalidScheme { protocol }) => assert_eq!(protocol, "SMTP"),
//!     Err(other) => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror::Error;

/// Result type for descriptor construction
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Construction errors for protocol connection URLs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Input does not begin with any of the profile's accepted scheme prefixes
    #[error("Not a valid {protocol} URL")]
    InvalidScheme {
        /// Display name of the profile that rejected the input
        protocol: &'static str,
    },

    /// The generic URL decomposer rejected the input after scheme substitution
    #[error("Malformed connection URL: {0}")]
    Malformed(#[from] url::ParseError),

    /// Redis database segment is not a base-10 integer
    #[error("Invalid database numeric format: {segment:?}")]
    InvalidDatabaseFormat {
        /// The offending path segment, verbatim
        segment: String,
    },

    /// Redis database index outside `[0, max)`
    #[error("Invalid database number {database}, expected 0..{max}")]
    DatabaseOutOfRange {
        /// The parsed database index
        database: i64,
        /// Exclusive upper bound that was in effect
        max: u32,
    },
}
