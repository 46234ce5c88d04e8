//! Protocol Connection URLs
//!
//! ## Overview
//!
//! Typed descriptors for the connection strings services hand to their mail,
//! messaging and cache clients. Each protocol is a [`Profile`](protourl_core::Profile)
//! plus a descriptor type that adds the protocol's own fields on top of the
//! generic URL surface.
//!
//! ## Protocol Guide
//!
//! ### IMAP
//!
//! - Schemes: `imap` (143), `imaps` (993)
//! - Path: mailbox name, `INBOX` when absent
//!
//! ### MQTT
//!
//! - Schemes: `mqtt` (1883), `mqtts` (8883)
//! - Query: `mqttversion`, `defaultqos`, `will_*` last-will settings
//!
//! ### Redis
//!
//! - Schemes: `redis`, `rediss` (both 6379)
//! - Path: `/db[/key]`, database validated against the server's count
//!
//! ### SMTP
//!
//! - Schemes: `smtp` (25), `smtps` (587)
//!
//! ## Shared Surface
//!
//! Every descriptor dereferences to [`ProtocolUrl`](protourl_core::ProtocolUrl)
//! for the generic accessors (`href`, `host`, `port`, `param_*`, ...),
//! displays as its `href`, parses with [`str::parse`], and serializes as its
//! versioned record.
//!
//! ## Example Usage
//!
//! ```rust
//! use protourl_connectors::ConnectionUrl;
//! use protourl_schemas::GLOBAL_REGISTRY;
//!
//! let url: ConnectionUrl = "rediss://:secret@cache.example.com/3/sessions".parse()?;
//! assert!(url.use_tls());
//! assert_eq!(url.port(), 6379);
//!
//! let record = url.to_json()?;
//! GLOBAL_REGISTRY.validate(&url.schema_name(), &record)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Shared trait surface for a descriptor wrapping a `url: ProtocolUrl` field
/// with a `parse` constructor and a [`ToRecord`](protourl_schemas::ToRecord)
/// impl.
macro_rules! descriptor_impls {
    ($descriptor:ty) => {
        impl ::std::ops::Deref for $descriptor {
            type Target = ::protourl_core::ProtocolUrl;

            fn deref(&self) -> &Self::Target {
                &self.url
            }
        }

        impl ::std::convert::AsRef<::protourl_core::ProtocolUrl> for $descriptor {
            fn as_ref(&self) -> &::protourl_core::ProtocolUrl {
                &self.url
            }
        }

        impl ::std::fmt::Display for $descriptor {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.url, f)
            }
        }

        impl ::std::str::FromStr for $descriptor {
            type Err = ::protourl_core::ProtocolError;

            fn from_str(raw: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(raw)
            }
        }

        impl ::serde::Serialize for $descriptor {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                ::serde::Serialize::serialize(
                    &::protourl_schemas::ToRecord::to_record(self),
                    serializer,
                )
            }
        }
    };
}

#[cfg(feature = "imap")]
pub mod imap;

#[cfg(feature = "mqtt")]
pub mod mqtt;

#[cfg(feature = "redis")]
pub mod redis;

#[cfg(feature = "smtp")]
pub mod smtp;

#[cfg(any(feature = "imap", feature = "mqtt", feature = "redis", feature = "smtp"))]
pub mod connection;

// Re-export common types
#[cfg(any(feature = "imap", feature = "mqtt", feature = "redis", feature = "smtp"))]
pub use connection::ConnectionUrl;

#[cfg(feature = "imap")]
pub use imap::{Imap, ImapRecord, ImapUrl};

#[cfg(feature = "mqtt")]
pub use mqtt::{LastWill, Mqtt, MqttRecord, MqttUrl, QoS};

#[cfg(feature = "redis")]
pub use redis::{Redis, RedisConfig, RedisRecord, RedisUrl};

#[cfg(feature = "smtp")]
pub use smtp::{Smtp, SmtpRecord, SmtpUrl};
