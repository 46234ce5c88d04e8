//! Scheme Tokens
//!
//! Every token includes its trailing colon, matching what
//! [`ProtocolUrl::protocol`](crate::ProtocolUrl::protocol) returns.

/// Scheme handed to the generic decomposer in place of the protocol's own.
///
/// It must be a "special" scheme so the decomposer applies authority parsing,
/// host normalization and the `/` root path.
pub const PLACEHOLDER_SCHEME: &str = "http:";

/// Port the decomposer treats as implied for [`PLACEHOLDER_SCHEME`] and drops
/// from its serialization.
pub const PLACEHOLDER_DEFAULT_PORT: u16 = 80;

/// Separator between a scheme token and the authority.
pub const AUTHORITY_PREFIX: &str = "//";

/// Mail retrieval.
pub const IMAP_SCHEME: &str = "imap:";
/// Mail retrieval over TLS.
pub const IMAPS_SCHEME: &str = "imaps:";

/// Message telemetry.
pub const MQTT_SCHEME: &str = "mqtt:";
/// Message telemetry over TLS.
pub const MQTTS_SCHEME: &str = "mqtts:";

/// Key-value / pub-sub.
pub const REDIS_SCHEME: &str = "redis:";
/// Key-value / pub-sub over TLS.
pub const REDISS_SCHEME: &str = "rediss:";

/// Mail submission.
pub const SMTP_SCHEME: &str = "smtp:";
/// Mail submission over TLS.
pub const SMTPS_SCHEME: &str = "smtps:";
