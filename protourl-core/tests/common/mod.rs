//! Shared fixtures for protourl-core integration tests
//!
//! Provides throwaway profiles so the generic layer can be exercised without
//! depending on the connectors crate.

#![allow(dead_code)]

use protourl_core::Profile;

/// Two-variant profile with distinct default ports
pub struct Telemetry;

impl Profile for Telemetry {
    const NAME: &'static str = "Telemetry";
    const SCHEMES: &'static [&'static str] = &["telems:", "telem:"];
    const SECURE_SCHEME: &'static str = "telems:";
    const DEFAULT_PORT: u16 = 1883;
    const SECURE_PORT: u16 = 8883;
}

/// Profile whose secure variant keeps the same port
pub struct Store;

impl Profile for Store {
    const NAME: &'static str = "Store";
    const SCHEMES: &'static [&'static str] = &["store:", "stores:"];
    const SECURE_SCHEME: &'static str = "stores:";
    const DEFAULT_PORT: u16 = 6379;
    const SECURE_PORT: u16 = 6379;
}

/// Hostnames the generic decomposer leaves untouched
pub const HOST_PATTERN: &str = "[a-z][a-z0-9]{0,9}(\\.[a-z]{2,6}){0,2}";
