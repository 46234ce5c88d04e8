//! Redis connection URLs
//!
//! Follows the IANA `redis` / `rediss` provisional schemes and extends them
//! with a key (or pub/sub channel) suffix after the database number:
//!
//! ```text
//! redis[s]://[user[:pass]@]host[:port][/db[/key]]
//! ```
//!
//! - No path: database `0`, path rewritten to `/0`, key present but empty
//! - `/4`: database `4`, no key
//! - `/4/orders`: database `4`, key and channel `orders`
//!
//! The database segment must start with a base-10 integer (trailing
//! characters are ignored, so `/4abc` selects database `4`) below the
//! server's database count (16 unless configured otherwise with
//! [`RedisConfig`]).
//!
//! ```rust
//! use protourl_connectors::RedisUrl;
//!
//! let url = RedisUrl::parse("redis://cache.local/4/demokey")?;
//! assert_eq!(url.database(), 4);
//! assert_eq!(url.key(), Some("demokey"));
//! assert_eq!(url.to_connection_string(), "redis://cache.local/4");
//! # Ok::<(), protourl_core::ProtocolError>(())
//! ```

use std::num::IntErrorKind;

use protourl_core::constants::{
    schemes::{REDISS_SCHEME, REDIS_SCHEME},
    REDIS_DEFAULT_DATABASE, REDIS_MAX_DATABASE, REDIS_PORT,
};
use protourl_core::params::int_prefix;
use protourl_core::{Profile, ProtocolError, ProtocolResult, ProtocolUrl};
use protourl_schemas::{ToRecord, UrlRecord};
use serde::Serialize;

/// Key-value profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redis;

impl Profile for Redis {
    const NAME: &'static str = "Redis";
    const SCHEMES: &'static [&'static str] = &[REDIS_SCHEME, REDISS_SCHEME];
    const SECURE_SCHEME: &'static str = REDISS_SCHEME;
    const DEFAULT_PORT: u16 = REDIS_PORT;
    const SECURE_PORT: u16 = REDIS_PORT;
}

/// Parse options for Redis connection strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedisConfig {
    /// Number of databases the server exposes; valid indices are `0..max_database`
    pub max_database: u32,
}

impl RedisConfig {
    /// Configuration for a stock server
    pub fn new() -> Self {
        Self {
            max_database: REDIS_MAX_DATABASE,
        }
    }

    /// Set the server's database count (`databases` directive)
    pub fn max_database(mut self, count: u32) -> Self {
        self.max_database = count;
        self
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parsed Redis connection string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RedisUrl {
    url: ProtocolUrl,
    database: u32,
    key: Option<String>,
}

impl RedisUrl {
    /// Parse a `redis://` or `rediss://` connection string for a stock server
    pub fn parse(raw: &str) -> ProtocolResult<Self> {
        Self::parse_with(raw, &RedisConfig::default())
    }

    /// Parse with explicit options
    pub fn parse_with(raw: &str, config: &RedisConfig) -> ProtocolResult<Self> {
        let mut draft = ProtocolUrl::decompose::<Redis>(raw)?;

        if draft.path_tail().is_empty() {
            draft.set_path(&format!("/{REDIS_DEFAULT_DATABASE}"));
            return Ok(Self {
                url: draft.finish(),
                database: REDIS_DEFAULT_DATABASE,
                key: Some(String::new()),
            });
        }

        let (database, key) = match draft.path_tail().split_once('/') {
            Some((segment, key)) => (segment, Some(key.trim().to_owned())),
            None => (draft.path_tail(), None),
        };
        let database = parse_database(database, config.max_database)?;

        Ok(Self {
            url: draft.finish(),
            database,
            key,
        })
    }

    /// Selected database index
    pub fn database(&self) -> u32 {
        self.database
    }

    /// Key named after the database segment.
    ///
    /// `Some("")` when the URL had no path at all; `None` when it named a
    /// database without a key segment.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Pub/sub channel; the same value as [`key`](Self::key)
    pub fn channel(&self) -> Option<&str> {
        self.key()
    }

    /// Whether the connection should use TLS
    pub fn use_tls(&self) -> bool {
        self.url.is_secure()
    }

    /// String form without the key/channel suffix, as Redis clients expect
    pub fn to_connection_string(&self) -> String {
        let href = self.url.href();

        if let Some(key) = self.key().filter(|key| !key.is_empty()) {
            if let Some(base) = href.strip_suffix(key).and_then(|rest| rest.strip_suffix('/')) {
                return base.to_owned();
            }
        }

        href
    }
}

fn parse_database(segment: &str, max: u32) -> ProtocolResult<u32> {
    let database = int_prefix(segment).parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => out_of_range(i64::MAX, max),
        IntErrorKind::NegOverflow => out_of_range(i64::MIN, max),
        _ => {
            log::warn!("Redis database segment {:?} is not a number", segment);
            ProtocolError::InvalidDatabaseFormat {
                segment: segment.to_owned(),
            }
        }
    })?;

    match u32::try_from(database) {
        Ok(index) if index < max => Ok(index),
        _ => Err(out_of_range(database, max)),
    }
}

fn out_of_range(database: i64, max: u32) -> ProtocolError {
    log::warn!("Redis database {} outside 0..{}", database, max);
    ProtocolError::DatabaseOutOfRange { database, max }
}

descriptor_impls!(RedisUrl);

/// Structured form of a [`RedisUrl`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RedisRecord {
    /// Generic URL fields
    #[serde(flatten)]
    pub url: UrlRecord,
    /// TLS
    #[serde(rename = "useTLS")]
    pub use_tls: bool,
    /// Database index
    pub database: u32,
    /// Key suffix
    pub key: Option<String>,
    /// Channel suffix (same as key)
    pub channel: Option<String>,
}

impl ToRecord for RedisUrl {
    type Record = RedisRecord;
    const SCHEMA: &'static str = "redis_url";

    fn to_record(&self) -> RedisRecord {
        RedisRecord {
            url: UrlRecord::from(&self.url),
            use_tls: self.use_tls(),
            database: self.database,
            key: self.key.clone(),
            channel: self.key.clone(),
        }
    }
}
