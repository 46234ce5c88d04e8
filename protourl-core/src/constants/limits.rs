//! Protocol Limits and Defaults
//!
//! Values applied when a connection string leaves a protocol-level setting
//! unspecified.

// ===== REDIS =====

/// Number of logical databases a stock Redis server exposes (`databases 16`).
///
/// Valid indices are `0..REDIS_MAX_DATABASE`. Servers with a custom
/// `databases` directive need a matching override at parse time.
pub const REDIS_MAX_DATABASE: u32 = 16;

/// Database selected when the path is empty.
pub const REDIS_DEFAULT_DATABASE: u32 = 0;

// ===== IMAP =====

/// Mailbox selected when the path is empty.
///
/// `INBOX` is the only mailbox name every IMAP server must provide.
///
/// Source: RFC 9051 section 5.1
pub const IMAP_DEFAULT_MAILBOX: &str = "INBOX";

// ===== MQTT =====

/// Protocol level assumed when `mqttversion` is absent (MQTT 3.1.1).
pub const MQTT_DEFAULT_VERSION: f64 = 4.0;

/// Delivery guarantee assumed when `defaultqos` is absent (exactly once).
pub const MQTT_DEFAULT_QOS: i64 = 2;

/// Query-parameter prefix collected into the last-will descriptor.
pub const MQTT_WILL_PREFIX: &str = "will";

// ===== QUERY VALUES =====

/// Lower-cased query values read as `true`. The empty string covers a
/// parameter present without a value (`?flag`).
pub const TRUTHY_VALUES: &[&str] = &["y", "yes", "t", "true", "1", ""];
