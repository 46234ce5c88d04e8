//! Generic connection descriptor
//!
//! [`ProtocolUrl`] is the read-only view every protocol profile builds on. It
//! owns the decomposer's parse plus the retained scheme, and answers the
//! generic questions (credentials, host, effective port, path, query) with
//! the original scheme restored.
//!
//! Construction is two-phase. [`ProtocolUrl::decompose`] returns a [`Draft`]
//! whose path may be rewritten once to normalize a protocol default (the
//! IMAP `INBOX`, the Redis database `0`); [`Draft::finish`] seals it. A
//! finished descriptor has no mutators.

use std::fmt;
use std::ops::Deref;

use url::Url;

use crate::errors::{ProtocolError, ProtocolResult};
use crate::profile::Profile;
use crate::scheme::SchemeSubstitution;

/// Parsed, immutable connection string for one protocol profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProtocolUrl {
    url: Url,
    substitution: SchemeSubstitution,
    profile: &'static str,
    secure: bool,
    default_port: u16,
}

impl ProtocolUrl {
    /// First construction phase: validate the scheme and decompose the rest.
    pub fn decompose<P: Profile>(raw: &str) -> ProtocolResult<Draft> {
        let Some((substitution, substituted)) = SchemeSubstitution::apply(raw, P::SCHEMES) else {
            log_debug!("rejected {} URL: unrecognized scheme", P::NAME);
            return Err(ProtocolError::InvalidScheme { protocol: P::NAME });
        };

        let url = Url::parse(&substituted).map_err(|err| {
            log_debug!("rejected {} URL: {}", P::NAME, err);
            ProtocolError::Malformed(err)
        })?;

        let substitution = substitution.confirm(&url);
        let secure = P::is_secure(substitution.scheme());

        log_debug!(
            "decomposed {} URL for host {:?} (secure: {})",
            substitution.scheme(),
            url.host_str().unwrap_or_default(),
            secure
        );

        Ok(Draft {
            inner: Self {
                url,
                substitution,
                profile: P::NAME,
                secure,
                default_port: P::default_port(secure),
            },
        })
    }

    /// Decompose and finish in one step, for profiles with no path semantics.
    pub fn parse<P: Profile>(raw: &str) -> ProtocolResult<Self> {
        Self::decompose::<P>(raw).map(Draft::finish)
    }

    /// Canonical string form with the original scheme
    pub fn href(&self) -> String {
        self.substitution.restore_url(&self.url)
    }

    /// Original scheme token including the colon, e.g. `"redis:"`
    pub fn protocol(&self) -> &'static str {
        self.substitution.scheme()
    }

    /// Display name of the profile that parsed this descriptor
    pub fn profile(&self) -> &'static str {
        self.profile
    }

    /// Username as written (percent-encoded); empty when absent
    pub fn username(&self) -> &str {
        self.url.username()
    }

    /// Password as written (percent-encoded)
    pub fn password(&self) -> Option<&str> {
        self.url.password()
    }

    /// Host name or address, without port
    pub fn hostname(&self) -> &str {
        self.url.host_str().unwrap_or_default()
    }

    /// Host name plus the explicit port, if one was given
    pub fn host(&self) -> String {
        match self.explicit_port() {
            Some(port) => format!("{}:{}", self.hostname(), port),
            None => self.hostname().to_owned(),
        }
    }

    /// Port literally present in the connection string
    pub fn explicit_port(&self) -> Option<u16> {
        self.url.port().or(self.substitution.hidden_port())
    }

    /// Effective port: the explicit one, else the profile default
    pub fn port(&self) -> u16 {
        self.explicit_port().unwrap_or(self.default_port)
    }

    /// Port the profile falls back to for this scheme
    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// `scheme//host[:port]`
    pub fn origin(&self) -> String {
        format!("{}//{}", self.protocol(), self.host())
    }

    /// Path, always starting with `/`
    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// Raw query string without the `?`
    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    /// `?query`, or empty when there is no query
    pub fn search(&self) -> String {
        prefixed('?', self.url.query())
    }

    /// `#fragment`, or empty when there is no fragment
    pub fn hash(&self) -> String {
        prefixed('#', self.url.fragment())
    }

    /// Whether the scheme selects the TLS variant
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }
}

fn prefixed(marker: char, component: Option<&str>) -> String {
    match component {
        Some(value) if !value.is_empty() => format!("{marker}{value}"),
        _ => String::new(),
    }
}

impl fmt::Display for ProtocolUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// A decomposed descriptor whose path may still be normalized.
#[derive(Debug)]
pub struct Draft {
    inner: ProtocolUrl,
}

impl Draft {
    /// Replace the path, e.g. to spell out a protocol default
    pub fn set_path(&mut self, path: &str) {
        self.inner.url.set_path(path);
    }

    /// Path with the leading `/` removed
    pub fn path_tail(&self) -> &str {
        let path = self.inner.pathname();
        path.strip_prefix('/').unwrap_or(path)
    }

    /// Seal the descriptor
    pub fn finish(self) -> ProtocolUrl {
        self.inner
    }
}

impl Deref for Draft {
    type Target = ProtocolUrl;

    fn deref(&self) -> &ProtocolUrl {
        &self.inner
    }
}
