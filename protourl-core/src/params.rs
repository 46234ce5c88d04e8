//! Typed query-parameter helpers
//!
//! Query parameters are optional configuration, so every accessor here
//! answers with `None` (the absent sentinel) for a missing or malformed value
//! rather than an error or a zero value. Accessors read the descriptor's query
//! on every call; nothing is cached.
//!
//! Values are form-url-decoded (`%2F` and `+` are decoded). When a name
//! repeats, the last value wins.

use std::collections::BTreeMap;

use crate::constants::limits::TRUTHY_VALUES;
use crate::descriptor::ProtocolUrl;

/// Ordered name → value mapping of a query string.
///
/// Names keep the position of their first occurrence; a repeated name takes
/// the value of its last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    entries: Vec<(String, String)>,
}

impl SearchParams {
    /// Parse a raw query string (without the leading `?`)
    pub fn parse(query: &str) -> Self {
        url::form_urlencoded::parse(query.as_bytes())
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Value for `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether `name` is present, with or without a value
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the query had no parameters
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collect every `<prefix>_<suffix>` parameter as `suffix → value`.
    ///
    /// Returns `None`, not an empty map, when no parameter carries the prefix.
    pub fn group(&self, prefix: &str) -> Option<BTreeMap<String, String>> {
        let prefix = format!("{prefix}_");
        let mut group: Option<BTreeMap<String, String>> = None;

        for (name, value) in &self.entries {
            if let Some(suffix) = name.strip_prefix(&prefix) {
                group
                    .get_or_insert_with(BTreeMap::new)
                    .insert(suffix.to_owned(), value.clone());
            }
        }

        group
    }
}

impl FromIterator<(String, String)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (name, value) in iter {
            match entries.iter_mut().find(|(key, _)| *key == name) {
                Some(entry) => entry.1 = value,
                None => entries.push((name, value)),
            }
        }
        Self { entries }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SearchParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Leading base-10 integer of `value`: optional sign, then digits.
///
/// Leading whitespace is skipped and anything after the digits is ignored,
/// so `"4abc"` and `"1.0"` both yield their integer part. Empty when `value`
/// does not start with a number.
pub fn int_prefix(value: &str) -> &str {
    let value = value.trim_start();
    let digits = signed_digits(value);
    &value[..digits]
}

/// Leading decimal number of `value`: optional sign, digits with an optional
/// fraction, and an optional exponent. Empty when `value` does not start
/// with a number.
pub fn float_prefix(value: &str) -> &str {
    let value = value.trim_start();
    let bytes = value.as_bytes();

    let mut end = sign_len(bytes);
    let whole = digit_run(&bytes[end..]);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digit_run(&bytes[end + 1..]);
        if whole + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent = signed_digits(&value[end + 1..]);
        if exponent > sign_len(&bytes[end + 1..]) {
            end += 1 + exponent;
        }
    }

    &value[..end]
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

fn signed_digits(value: &str) -> usize {
    let bytes = value.as_bytes();
    let sign = sign_len(bytes);
    match digit_run(&bytes[sign..]) {
        0 => 0,
        digits => sign + digits,
    }
}

/// Leading base-10 integer; `None` when there is none or it overflows `i64`
pub fn parse_int(value: &str) -> Option<i64> {
    int_prefix(value).parse().ok()
}

/// Leading decimal number; `None` when there is none or it is not finite
pub fn parse_float(value: &str) -> Option<f64> {
    float_prefix(value)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `true` for `y`, `yes`, `t`, `true`, `1` or an empty value (any case),
/// `false` for anything else
pub fn parse_bool(value: &str) -> bool {
    let lowered = value.to_lowercase();
    TRUTHY_VALUES.contains(&lowered.as_str())
}

impl ProtocolUrl {
    /// Snapshot of the query as an ordered mapping
    pub fn search_params(&self) -> SearchParams {
        self.url()
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    /// Raw value of a query parameter
    pub fn param(&self, name: &str) -> Option<String> {
        self.url()
            .query_pairs()
            .filter_map(|(key, value)| (key == name).then(|| value.into_owned()))
            .last()
    }

    /// Query parameter as a string, empty when absent
    pub fn param_string(&self, name: &str) -> String {
        self.param(name).unwrap_or_default()
    }

    /// Query parameter as a base-10 integer
    pub fn param_int(&self, name: &str) -> Option<i64> {
        self.param(name).as_deref().and_then(parse_int)
    }

    /// Query parameter as a floating-point number
    pub fn param_float(&self, name: &str) -> Option<f64> {
        self.param(name).as_deref().and_then(parse_float)
    }

    /// Query parameter as a boolean, see [`parse_bool`]
    pub fn param_bool(&self, name: &str) -> Option<bool> {
        self.param(name).as_deref().map(parse_bool)
    }

    /// Query parameters sharing `<prefix>_`, see [`SearchParams::group`]
    pub fn param_object(&self, prefix: &str) -> Option<BTreeMap<String, String>> {
        self.search_params().group(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Profile;

    struct Mqtt;

    impl Profile for Mqtt {
        const NAME: &'static str = "MQTT";
        const SCHEMES: &'static [&'static str] = &["mqtts:", "mqtt:"];
        const SECURE_SCHEME: &'static str = "mqtts:";
        const DEFAULT_PORT: u16 = 1883;
        const SECURE_PORT: u16 = 8883;
    }

    fn url(query: &str) -> ProtocolUrl {
        ProtocolUrl::parse::<Mqtt>(&format!("mqtt://broker.example.com/?{query}")).unwrap()
    }

    #[test]
    fn string_params() {
        let url = url("mqttversion=4");
        assert_eq!(url.param_string("mqttversion"), "4");
        assert_eq!(url.param_string("missingparam"), "");
    }

    #[test]
    fn int_params() {
        let url = url("a=4&b=-12&c=4.5&d=asdf&e=");
        assert_eq!(url.param_int("a"), Some(4));
        assert_eq!(url.param_int("b"), Some(-12));
        assert_eq!(url.param_int("c"), Some(4));
        assert_eq!(url.param_int("d"), None);
        assert_eq!(url.param_int("e"), None);
        assert_eq!(url.param_int("missing"), None);
    }

    #[test]
    fn float_params() {
        let url = url("pi=3.14&n=5&bad=x&nan=NaN");
        assert_eq!(url.param_float("pi"), Some(3.14));
        assert_eq!(url.param_float("n"), Some(5.0));
        assert_eq!(url.param_float("bad"), None);
        assert_eq!(url.param_float("nan"), None);
        assert_eq!(url.param_float("missing"), None);
    }

    #[test]
    fn numbers_are_read_from_the_leading_prefix() {
        let url = url("qos=1abc&level=1.0&version=5.0beta&exp=2e3x&neg=-3.5e-1&plus=+7");
        assert_eq!(url.param_int("qos"), Some(1));
        assert_eq!(url.param_int("level"), Some(1));
        assert_eq!(url.param_float("version"), Some(5.0));
        assert_eq!(url.param_float("exp"), Some(2000.0));
        assert_eq!(url.param_float("neg"), Some(-0.35));
        assert_eq!(url.param_int("plus"), Some(7));
    }

    #[test]
    fn prefixes() {
        assert_eq!(int_prefix("  42 apples"), "42");
        assert_eq!(int_prefix("-"), "");
        assert_eq!(int_prefix("x1"), "");
        assert_eq!(float_prefix(".5x"), ".5");
        assert_eq!(float_prefix("5."), "5.");
        assert_eq!(float_prefix("."), "");
        assert_eq!(float_prefix("3e"), "3");
        assert_eq!(float_prefix("3e+"), "3");
        assert_eq!(float_prefix("1.5E-2z"), "1.5E-2");
    }

    #[test]
    fn non_finite_floats_are_absent() {
        let url = url("a=inf&b=Infinity&c=-inf&d=1e999&e=NaN");
        for name in ["a", "b", "c", "d", "e"] {
            assert_eq!(url.param_float(name), None, "{name}");
        }
    }

    #[test]
    fn integer_overflow_is_absent() {
        assert_eq!(url("n=99999999999999999999").param_int("n"), None);
    }

    #[test]
    fn bool_params() {
        for truthy in ["true", "Y", "yes", "1", "T", "TRUE"] {
            assert_eq!(url(&format!("p={truthy}")).param_bool("p"), Some(true), "{truthy}");
        }
        for falsy in ["false", "N", "no", "0", "off"] {
            assert_eq!(url(&format!("p={falsy}")).param_bool("p"), Some(false), "{falsy}");
        }
        assert_eq!(url("p").param_bool("p"), Some(true));
        assert_eq!(url("p=").param_bool("p"), Some(true));
        assert_eq!(url("p=false").param_bool("missing"), None);
    }

    #[test]
    fn object_params() {
        let url = url("will_topic=a/b&will_payload=off&other=1&willing=no");
        let group = url.param_object("will").unwrap();
        assert_eq!(group.len(), 2);
        assert_eq!(group["topic"], "a/b");
        assert_eq!(group["payload"], "off");
        assert_eq!(url.param_object("nothing"), None);
    }

    #[test]
    fn duplicates_resolve_to_last() {
        let url = url("a=1&b=2&a=3");
        assert_eq!(url.param("a").as_deref(), Some("3"));

        let params = url.search_params();
        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn values_are_decoded() {
        let url = url("topic=devices%2F1%2Fstatus&msg=hello+world");
        assert_eq!(url.param_string("topic"), "devices/1/status");
        assert_eq!(url.param_string("msg"), "hello world");
    }

    #[test]
    fn empty_query() {
        let url = ProtocolUrl::parse::<Mqtt>("mqtt://broker.example.com").unwrap();
        assert!(url.search_params().is_empty());
        assert_eq!(url.param("a"), None);
        assert_eq!(url.param_object("will"), None);
    }
}
