//! Shared fixtures for protourl-connectors integration tests

#![allow(dead_code)]

use protourl_schemas::{ToRecord, GLOBAL_REGISTRY};

/// Hostnames the generic decomposer leaves untouched
pub const HOST_PATTERN: &str = "[a-z][a-z0-9]{0,9}(\\.[a-z]{2,6}){0,2}";

/// `(insecure, secure, default port, secure port)` for every protocol
pub const PROTOCOL_PORTS: [(&str, &str, u16, u16); 4] = [
    ("imap", "imaps", 143, 993),
    ("mqtt", "mqtts", 1883, 8883),
    ("redis", "rediss", 6379, 6379),
    ("smtp", "smtps", 25, 587),
];

/// Serialize `descriptor` and check it against its registered layout
pub fn assert_valid_record<T: ToRecord>(descriptor: &T) -> serde_json::Value {
    let record = descriptor.to_json().unwrap();
    if let Err(err) = GLOBAL_REGISTRY.validate(&T::schema_name(), &record) {
        panic!("{}: {}", T::schema_name(), err);
    }
    record
}
