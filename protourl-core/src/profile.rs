//! Protocol profile trait
//!
//! A profile is the per-protocol configuration the shared machinery runs
//! with: which schemes it accepts, which of them is the secure variant, and
//! which ports apply when the connection string has none. Keep profiles to
//! constants; protocol-specific path and query semantics live with the
//! descriptor types that use them.

/// Static description of one protocol family.
///
/// ```rust
/// use protourl_core::Profile;
///
/// struct Mqtt;
///
/// impl Profile for Mqtt {
///     const NAME: &'static str = "MQTT";
///     const SCHEMES: &'static [&'static str] = &["mqtts:", "mqtt:"];
///     const SECURE_SCHEME: &'static str = "mqtts:";
///     const DEFAULT_PORT: u16 = 1883;
///     const SECURE_PORT: u16 = 8883;
/// }
///
/// assert!(Mqtt::is_secure("mqtts:"));
/// assert_eq!(Mqtt::default_port(false), 1883);
/// ```
pub trait Profile {
    /// Display name used in error messages and logs
    const NAME: &'static str;

    /// Accepted scheme tokens, each with its trailing colon.
    ///
    /// Matching walks the list in order and takes the first hit, so a token
    /// must never be listed after another token that is a prefix of it.
    const SCHEMES: &'static [&'static str];

    /// The scheme token that selects the TLS variant
    const SECURE_SCHEME: &'static str;

    /// Port used by insecure schemes when none is given
    const DEFAULT_PORT: u16;

    /// Port used by the secure scheme when none is given
    const SECURE_PORT: u16;

    /// Whether `scheme` selects the secure variant
    fn is_secure(scheme: &str) -> bool {
        scheme == Self::SECURE_SCHEME
    }

    /// Default port for the given transport security
    fn default_port(secure: bool) -> u16 {
        if secure {
            Self::SECURE_PORT
        } else {
            Self::DEFAULT_PORT
        }
    }
}

/// Returns the first pair `(earlier, later)` in `schemes` where `earlier` is a
/// strict prefix of `later` and would therefore shadow it.
pub fn shadowed_scheme(schemes: &[&'static str]) -> Option<(&'static str, &'static str)> {
    schemes.iter().enumerate().find_map(|(idx, earlier)| {
        schemes[idx + 1..]
            .iter()
            .find(|later| later.len() > earlier.len() && later.starts_with(earlier))
            .map(|later| (*earlier, *later))
    })
}
