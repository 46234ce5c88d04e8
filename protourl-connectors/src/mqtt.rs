//! MQTT connection URLs
//!
//! ## Overview
//!
//! Broker targets for message telemetry, with session preferences carried in
//! the query string:
//!
//! ```text
//! mqtt[s]://[user[:pass]@]host[:port][/][?query]
//! ```
//!
//! | Parameter      | Meaning                              | Default |
//! |----------------|--------------------------------------|---------|
//! | `mqttversion`  | Protocol level (3.1, 4, 5)           | 4       |
//! | `defaultqos`   | QoS for publishes without their own  | 2       |
//! | `will_topic`   | Last-will topic                      | -       |
//! | `will_payload` | Last-will payload                    | -       |
//! | `will_qos`     | Last-will QoS                        | -       |
//! | `will_retain`  | Last-will retain flag                | -       |
//!
//! Any other `will_*` parameter (MQTT 5 will properties) is kept on the
//! last-will descriptor as a property.
//!
//! ## Live Values
//!
//! Nothing here is cached. `mqtt_version`, `default_qos` and `will` read the
//! query each time they are called.
//!
//! ## Example Usage
//!
//! ```rust
//! use protourl_connectors::MqttUrl;
//!
//! let url = MqttUrl::parse(
//!     "mqtt://broker.local/?will_topic=devices/12345/onlinestatus&will_payload=offline&will_retain=true",
//! )?;
//! assert_eq!(url.port(), 1883);
//! assert_eq!(url.mqtt_version(), 4.0);
//!
//! let will = url.will().unwrap();
//! assert_eq!(will.topic.as_deref(), Some("devices/12345/onlinestatus"));
//! assert_eq!(will.retain, Some(true));
//! assert_eq!(will.qos, None);
//! # Ok::<(), protourl_core::ProtocolError>(())
//! ```

use std::collections::BTreeMap;

use protourl_core::constants::limits::MQTT_WILL_PREFIX;
use protourl_core::constants::{
    schemes::{MQTTS_SCHEME, MQTT_SCHEME},
    MQTTS_PORT, MQTT_DEFAULT_QOS, MQTT_DEFAULT_VERSION, MQTT_PORT,
};
use protourl_core::{Profile, ProtocolResult, ProtocolUrl};
use protourl_schemas::{ToRecord, UrlRecord};
use serde::{Serialize, Serializer};

/// Message telemetry profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mqtt;

impl Profile for Mqtt {
    const NAME: &'static str = "MQTT";
    const SCHEMES: &'static [&'static str] = &[MQTTS_SCHEME, MQTT_SCHEME];
    const SECURE_SCHEME: &'static str = MQTTS_SCHEME;
    const DEFAULT_PORT: u16 = MQTT_PORT;
    const SECURE_PORT: u16 = MQTTS_PORT;
}

/// MQTT delivery guarantee levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QoS {
    /// Fire and forget
    AtMostOnce = 0,
    /// Acknowledged delivery, duplicates possible
    AtLeastOnce = 1,
    /// Assured single delivery
    ExactlyOnce = 2,
}

impl QoS {
    /// Map a numeric level; `None` outside 0..=2
    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            0 => Some(Self::AtMostOnce),
            1 => Some(Self::AtLeastOnce),
            2 => Some(Self::ExactlyOnce),
            _ => None,
        }
    }
}

/// Last Will and Testament preferences
///
/// Published by the broker on the client's behalf if the connection drops.
/// Every field is optional; which ones a client requires is up to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LastWill {
    /// Topic the will is published to (`will_topic`)
    pub topic: Option<String>,
    /// Message body (`will_payload`)
    pub payload: Option<String>,
    /// Delivery level (`will_qos`), absent if missing or not an integer
    pub qos: Option<i64>,
    /// Retain flag (`will_retain`)
    pub retain: Option<bool>,
    /// Remaining `will_*` parameters keyed by suffix
    #[serde(flatten)]
    pub properties: BTreeMap<String, String>,
}

impl LastWill {
    /// Delivery level as [`QoS`], if it names a valid level
    pub fn qos_level(&self) -> Option<QoS> {
        self.qos.and_then(QoS::from_level)
    }
}

/// Parsed MQTT connection string
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MqttUrl {
    url: ProtocolUrl,
}

impl MqttUrl {
    /// Parse an `mqtt://` or `mqtts://` connection string
    pub fn parse(raw: &str) -> ProtocolResult<Self> {
        let url = ProtocolUrl::parse::<Mqtt>(raw)?;
        Ok(Self { url })
    }

    /// Whether the connection should use TLS
    pub fn secure(&self) -> bool {
        self.url.is_secure()
    }

    /// Requested protocol level (`mqttversion`), 4 when absent or malformed
    pub fn mqtt_version(&self) -> f64 {
        self.url
            .param_float("mqttversion")
            .unwrap_or(MQTT_DEFAULT_VERSION)
    }

    /// Requested default QoS (`defaultqos`), 2 when absent or malformed
    pub fn default_qos(&self) -> i64 {
        self.url.param_int("defaultqos").unwrap_or(MQTT_DEFAULT_QOS)
    }

    /// Last-will preferences, or `None` when no `will_*` parameter is present
    pub fn will(&self) -> Option<LastWill> {
        let mut properties = self.url.param_object(MQTT_WILL_PREFIX)?;

        let topic = properties.remove("topic");
        let payload = properties.remove("payload");
        properties.remove("qos");
        properties.remove("retain");

        Some(LastWill {
            topic,
            payload,
            qos: self.url.param_int(&format!("{MQTT_WILL_PREFIX}_qos")),
            retain: self.url.param_bool(&format!("{MQTT_WILL_PREFIX}_retain")),
            properties,
        })
    }
}

descriptor_impls!(MqttUrl);

/// Structured form of an [`MqttUrl`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MqttRecord {
    /// Generic URL fields
    #[serde(flatten)]
    pub url: UrlRecord,
    /// TLS
    pub secure: bool,
    /// Requested protocol level; whole levels serialize as integers
    #[serde(serialize_with = "serialize_level")]
    pub mqtt_version: f64,
    /// Default delivery level
    #[serde(rename = "defaultQoS")]
    pub default_qos: i64,
    /// Last-will preferences
    pub will: Option<LastWill>,
}

fn serialize_level<S: Serializer>(level: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // i64 range check in f64 space; 2^63 itself is excluded
    if level.fract() == 0.0 && level.abs() < 9.223_372_036_854_776e18 {
        serializer.serialize_i64(*level as i64)
    } else {
        serializer.serialize_f64(*level)
    }
}

impl ToRecord for MqttUrl {
    type Record = MqttRecord;
    const SCHEMA: &'static str = "mqtt_url";

    fn to_record(&self) -> MqttRecord {
        MqttRecord {
            url: UrlRecord::from(&self.url),
            secure: self.secure(),
            mqtt_version: self.mqtt_version(),
            default_qos: self.default_qos(),
            will: self.will(),
        }
    }
}
