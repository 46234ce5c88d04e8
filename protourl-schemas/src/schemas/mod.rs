//! Record layouts for every protocol descriptor
//!
//! Each layout lists the fields a serialized record carries and the JSON type
//! of each. Layouts are versioned by name (`imap_url_v1`); a new field means a
//! new version, never an edit to a published one.

use serde::Serialize;

/// Namespace shared by all protourl record layouts
pub const NAMESPACE: &str = "io.protourl.records";

/// JSON type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// JSON string
    String,
    /// JSON boolean
    Boolean,
    /// JSON integer
    Integer,
    /// Any JSON number
    Number,
    /// JSON object
    Object,
}

impl FieldKind {
    /// Whether `value` has this JSON type
    pub fn matches(self, value: &serde_json::Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Boolean => value.is_boolean(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Number => value.is_number(),
            Self::Object => value.is_object(),
        }
    }
}

/// One field of a record layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Serialized field name
    pub name: String,
    /// Expected JSON type
    pub kind: FieldKind,
    /// Whether `null` is allowed
    pub nullable: bool,
}

impl FieldSpec {
    fn required(name: &str, kind: FieldKind) -> Self {
        Self { name: name.to_string(), kind, nullable: false }
    }

    fn nullable(name: &str, kind: FieldKind) -> Self {
        Self { name: name.to_string(), kind, nullable: true }
    }
}

/// Versioned layout of one record type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    /// Record name, e.g. `"ImapUrl"`
    pub name: String,
    /// Layout version, e.g. `"v1"`
    pub version: String,
    /// Layout namespace
    pub namespace: String,
    /// Fields in serialization order
    pub fields: Vec<FieldSpec>,
}

impl RecordSchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn url_fields() -> Vec<FieldSpec> {
    use FieldKind::*;

    vec![
        FieldSpec::required("href", String),
        FieldSpec::required("protocol", String),
        FieldSpec::required("username", String),
        FieldSpec::required("password", String),
        FieldSpec::required("host", String),
        FieldSpec::required("hostname", String),
        FieldSpec::required("port", String),
        FieldSpec::required("origin", String),
        FieldSpec::required("pathname", String),
        FieldSpec::required("search", String),
        FieldSpec::required("searchParams", Object),
        FieldSpec::required("hash", String),
    ]
}

fn record_v1(name: &str, extra: Vec<FieldSpec>) -> RecordSchema {
    let mut fields = url_fields();
    fields.extend(extra);

    RecordSchema {
        name: name.to_string(),
        version: "v1".to_string(),
        namespace: NAMESPACE.to_string(),
        fields,
    }
}

/// Mail retrieval record v1
pub fn imap_url_v1() -> RecordSchema {
    record_v1(
        "ImapUrl",
        vec![
            FieldSpec::required("mailbox", FieldKind::String),
            FieldSpec::required("useTLS", FieldKind::Boolean),
        ],
    )
}

/// Message telemetry record v1
pub fn mqtt_url_v1() -> RecordSchema {
    record_v1(
        "MqttUrl",
        vec![
            FieldSpec::required("secure", FieldKind::Boolean),
            FieldSpec::required("mqttVersion", FieldKind::Number),
            FieldSpec::required("defaultQoS", FieldKind::Integer),
            FieldSpec::nullable("will", FieldKind::Object),
        ],
    )
}

/// Key-value record v1
pub fn redis_url_v1() -> RecordSchema {
    record_v1(
        "RedisUrl",
        vec![
            FieldSpec::required("useTLS", FieldKind::Boolean),
            FieldSpec::required("database", FieldKind::Integer),
            FieldSpec::nullable("key", FieldKind::String),
            FieldSpec::nullable("channel", FieldKind::String),
        ],
    )
}

/// Mail submission record v1
pub fn smtp_url_v1() -> RecordSchema {
    record_v1("SmtpUrl", vec![FieldSpec::required("useTLS", FieldKind::Boolean)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_layout_starts_with_url_fields() {
        let base = url_fields();
        for schema in [imap_url_v1(), mqtt_url_v1(), redis_url_v1(), smtp_url_v1()] {
            assert_eq!(&schema.fields[..base.len()], &base[..], "{}", schema.name);
            assert_eq!(schema.version, "v1");
        }
    }

    #[test]
    fn field_kinds_match_json() {
        assert!(FieldKind::Integer.matches(&json!(4)));
        assert!(!FieldKind::Integer.matches(&json!(4.5)));
        assert!(FieldKind::Number.matches(&json!(4.5)));
        assert!(FieldKind::Object.matches(&json!({})));
        assert!(!FieldKind::String.matches(&json!(null)));
    }

    #[test]
    fn lookup_by_name() {
        let schema = redis_url_v1();
        assert!(schema.field("key").unwrap().nullable);
        assert!(schema.field("mailbox").is_none());
    }
}
