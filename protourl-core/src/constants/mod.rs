//! Constants for protourl Core
//!
//! Centralized, documented constants shared by every protocol profile.
//!
//! ## Organization
//!
//! - **Ports**: insecure and secure default ports per protocol
//! - **Schemes**: scheme tokens and the placeholder handed to the decomposer
//! - **Limits**: protocol defaults such as the Redis database range

/// Default port numbers per protocol.
pub mod ports;

/// Scheme tokens and substitution constants.
pub mod schemes;

/// Protocol defaults and limits.
pub mod limits;

pub use ports::{
    IMAP_PORT, IMAPS_PORT, MQTT_PORT, MQTTS_PORT, REDIS_PORT, SMTP_PORT, SMTPS_PORT,
};

pub use schemes::{PLACEHOLDER_DEFAULT_PORT, PLACEHOLDER_SCHEME};

pub use limits::{
    IMAP_DEFAULT_MAILBOX, MQTT_DEFAULT_QOS, MQTT_DEFAULT_VERSION, REDIS_DEFAULT_DATABASE,
    REDIS_MAX_DATABASE,
};
