//! Default Port Numbers
//!
//! IANA-registered (or de facto) ports used when a connection string carries
//! no explicit `:port`. Each protocol has an insecure and a secure default;
//! Redis uses the same port for both.

// ===== MAIL RETRIEVAL =====

/// IMAP over plain TCP (STARTTLS upgrade happens in-band).
///
/// Source: RFC 9051
pub const IMAP_PORT: u16 = 143;

/// IMAP over implicit TLS.
///
/// Source: RFC 8314
pub const IMAPS_PORT: u16 = 993;

// ===== MESSAGE TELEMETRY =====

/// MQTT over plain TCP.
///
/// Source: IANA service name registry, "mqtt"
pub const MQTT_PORT: u16 = 1883;

/// MQTT over TLS.
///
/// Source: IANA service name registry, "secure-mqtt"
pub const MQTTS_PORT: u16 = 8883;

// ===== KEY-VALUE =====

/// Redis, with or without TLS.
///
/// TLS-enabled servers conventionally keep the same port, so `rediss:` does
/// not switch defaults.
pub const REDIS_PORT: u16 = 6379;

// ===== MAIL SUBMISSION =====

/// SMTP relay.
///
/// Source: RFC 5321
pub const SMTP_PORT: u16 = 25;

/// Secure SMTP submission.
///
/// Source: RFC 6409
pub const SMTPS_PORT: u16 = 587;
