//! Scheme-dispatched connection URLs
//!
//! For configuration values that may name any supported service, e.g. a
//! `BACKEND_URL` that is either Redis or MQTT. The scheme picks the profile;
//! the matching descriptor's own validation then applies unchanged.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use protourl_core::scheme::match_scheme;
use protourl_core::{Profile, ProtocolError, ProtocolResult, ProtocolUrl};
use protourl_schemas::{SchemaError, ToRecord};
use serde::{Serialize, Serializer};

#[cfg(feature = "imap")]
use crate::imap::{Imap, ImapUrl};
#[cfg(feature = "mqtt")]
use crate::mqtt::{Mqtt, MqttUrl};
#[cfg(feature = "redis")]
use crate::redis::{Redis, RedisUrl};
#[cfg(feature = "smtp")]
use crate::smtp::{Smtp, SmtpUrl};

/// Name reported when no enabled profile accepts the scheme
pub const CONNECTION_PROFILE: &str = "connection";

/// A connection string for any enabled protocol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionUrl {
    /// `imap://` or `imaps://`
    #[cfg(feature = "imap")]
    Imap(ImapUrl),
    /// `mqtt://` or `mqtts://`
    #[cfg(feature = "mqtt")]
    Mqtt(MqttUrl),
    /// `redis://` or `rediss://`
    #[cfg(feature = "redis")]
    Redis(RedisUrl),
    /// `smtp://` or `smtps://`
    #[cfg(feature = "smtp")]
    Smtp(SmtpUrl),
}

impl ConnectionUrl {
    /// Parse with the profile selected by the scheme
    pub fn parse(raw: &str) -> ProtocolResult<Self> {
        #[cfg(feature = "imap")]
        if match_scheme(raw, Imap::SCHEMES).is_some() {
            return ImapUrl::parse(raw).map(Self::Imap);
        }
        #[cfg(feature = "mqtt")]
        if match_scheme(raw, Mqtt::SCHEMES).is_some() {
            return MqttUrl::parse(raw).map(Self::Mqtt);
        }
        #[cfg(feature = "redis")]
        if match_scheme(raw, Redis::SCHEMES).is_some() {
            return RedisUrl::parse(raw).map(Self::Redis);
        }
        #[cfg(feature = "smtp")]
        if match_scheme(raw, Smtp::SCHEMES).is_some() {
            return SmtpUrl::parse(raw).map(Self::Smtp);
        }

        log::debug!("no enabled profile accepts {:?}", raw);
        Err(ProtocolError::InvalidScheme {
            protocol: CONNECTION_PROFILE,
        })
    }

    /// The generic descriptor underneath
    pub fn descriptor(&self) -> &ProtocolUrl {
        match self {
            #[cfg(feature = "imap")]
            Self::Imap(url) => url.as_ref(),
            #[cfg(feature = "mqtt")]
            Self::Mqtt(url) => url.as_ref(),
            #[cfg(feature = "redis")]
            Self::Redis(url) => url.as_ref(),
            #[cfg(feature = "smtp")]
            Self::Smtp(url) => url.as_ref(),
        }
    }

    /// Whether the connection should use TLS
    pub fn use_tls(&self) -> bool {
        self.descriptor().is_secure()
    }

    /// Render the protocol's record as JSON
    pub fn to_json(&self) -> Result<serde_json::Value, SchemaError> {
        match self {
            #[cfg(feature = "imap")]
            Self::Imap(url) => url.to_json(),
            #[cfg(feature = "mqtt")]
            Self::Mqtt(url) => url.to_json(),
            #[cfg(feature = "redis")]
            Self::Redis(url) => url.to_json(),
            #[cfg(feature = "smtp")]
            Self::Smtp(url) => url.to_json(),
        }
    }

    /// Qualified layout name of the protocol's record, e.g. `"redis_url_v1"`
    pub fn schema_name(&self) -> String {
        match self {
            #[cfg(feature = "imap")]
            Self::Imap(_) => ImapUrl::schema_name(),
            #[cfg(feature = "mqtt")]
            Self::Mqtt(_) => MqttUrl::schema_name(),
            #[cfg(feature = "redis")]
            Self::Redis(_) => RedisUrl::schema_name(),
            #[cfg(feature = "smtp")]
            Self::Smtp(_) => SmtpUrl::schema_name(),
        }
    }
}

impl Deref for ConnectionUrl {
    type Target = ProtocolUrl;

    fn deref(&self) -> &ProtocolUrl {
        self.descriptor()
    }
}

impl fmt::Display for ConnectionUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.descriptor(), f)
    }
}

impl FromStr for ConnectionUrl {
    type Err = ProtocolError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl Serialize for ConnectionUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            #[cfg(feature = "imap")]
            Self::Imap(url) => url.serialize(serializer),
            #[cfg(feature = "mqtt")]
            Self::Mqtt(url) => url.serialize(serializer),
            #[cfg(feature = "redis")]
            Self::Redis(url) => url.serialize(serializer),
            #[cfg(feature = "smtp")]
            Self::Smtp(url) => url.serialize(serializer),
        }
    }
}
