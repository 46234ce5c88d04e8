//! Generic record fields shared by every protocol
//!
//! Field names follow the structured surface consumers already know from
//! URL objects (`href`, `searchParams`, ...), so records serialize to the
//! same shape regardless of which profile produced them.

use protourl_core::{ProtocolUrl, SearchParams};
use serde::Serialize;

/// Flat, serializable view of a [`ProtocolUrl`].
///
/// Protocol records embed this with `#[serde(flatten)]` and append their own
/// fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecord {
    /// Canonical string form with the original scheme
    pub href: String,
    /// Scheme token including the colon
    pub protocol: String,
    /// Username, empty when absent
    pub username: String,
    /// Password, empty when absent
    pub password: String,
    /// Hostname plus explicit port
    pub host: String,
    /// Hostname only
    pub hostname: String,
    /// Effective port, as text
    pub port: String,
    /// `scheme//host`
    pub origin: String,
    /// Path
    pub pathname: String,
    /// `?query` or empty
    pub search: String,
    /// Decoded query parameters
    pub search_params: SearchParams,
    /// `#fragment` or empty
    pub hash: String,
}

impl From<&ProtocolUrl> for UrlRecord {
    fn from(url: &ProtocolUrl) -> Self {
        Self {
            href: url.href(),
            protocol: url.protocol().to_owned(),
            username: url.username().to_owned(),
            password: url.password().unwrap_or_default().to_owned(),
            host: url.host(),
            hostname: url.hostname().to_owned(),
            port: url.port().to_string(),
            origin: url.origin(),
            pathname: url.pathname().to_owned(),
            search: url.search(),
            search_params: url.search_params(),
            hash: url.hash(),
        }
    }
}
