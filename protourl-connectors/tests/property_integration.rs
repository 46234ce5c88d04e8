//! Port defaults, round trips and database bounds over generated inputs

mod common;

use common::{HOST_PATTERN, PROTOCOL_PORTS};
use proptest::prelude::*;
use protourl_connectors::{ConnectionUrl, MqttUrl, RedisConfig, RedisUrl, SmtpUrl};
use protourl_core::ProtocolError;
use protourl_schemas::ToRecord;

fn protocol() -> impl Strategy<Value = (&'static str, &'static str, u16, u16)> {
    prop::sample::select(PROTOCOL_PORTS.to_vec())
}

proptest! {
    #[test]
    fn insecure_default_port((insecure, _, port, _) in protocol(), host in HOST_PATTERN) {
        let url = ConnectionUrl::parse(&format!("{insecure}://{host}")).unwrap();
        prop_assert_eq!(url.port(), port);
        prop_assert!(!url.use_tls());
    }

    #[test]
    fn secure_default_port((_, secure, _, port) in protocol(), host in HOST_PATTERN) {
        let url = ConnectionUrl::parse(&format!("{secure}://{host}")).unwrap();
        prop_assert_eq!(url.port(), port);
        prop_assert!(url.use_tls());
    }

    #[test]
    fn explicit_port_wins(
        (insecure, secure, _, _) in protocol(),
        tls in any::<bool>(),
        host in HOST_PATTERN,
        port in 1u16..,
    ) {
        let scheme = if tls { secure } else { insecure };
        let url = ConnectionUrl::parse(&format!("{scheme}://{host}:{port}")).unwrap();
        prop_assert_eq!(url.port(), port);
        prop_assert_eq!(url.explicit_port(), Some(port));
    }

    #[test]
    fn canonical_strings_round_trip(host in HOST_PATTERN, port in 1u16.., tls in any::<bool>()) {
        let smtp = format!("{}://{host}:{port}/", if tls { "smtps" } else { "smtp" });
        prop_assert_eq!(SmtpUrl::parse(&smtp).unwrap().to_string(), smtp);

        let mqtt = format!("{}://{host}:{port}/", if tls { "mqtts" } else { "mqtt" });
        prop_assert_eq!(MqttUrl::parse(&mqtt).unwrap().to_string(), mqtt);
    }

    #[test]
    fn defaults_are_appended((insecure, _, _, _) in protocol(), host in HOST_PATTERN) {
        let raw = format!("{insecure}://{host}");
        let url = ConnectionUrl::parse(&raw).unwrap();
        prop_assert!(url.to_string().starts_with(&raw));
    }

    #[test]
    fn database_bounds(database in -1000i64..1000, max in 1u32..256) {
        let config = RedisConfig::new().max_database(max);
        let parsed = RedisUrl::parse_with(&format!("redis://host/{database}"), &config);

        if (0..i64::from(max)).contains(&database) {
            prop_assert_eq!(parsed.unwrap().database() as i64, database);
        } else {
            prop_assert_eq!(parsed.unwrap_err(), ProtocolError::DatabaseOutOfRange { database, max });
        }
    }

    #[test]
    fn reads_do_not_mutate(host in HOST_PATTERN, qos in 0i64..3) {
        let url = MqttUrl::parse(&format!("mqtt://{host}/?defaultqos={qos}&will_topic=t")).unwrap();
        let before = url.to_json().unwrap();
        let _ = (url.will(), url.default_qos(), url.mqtt_version(), url.search_params());
        prop_assert_eq!(url.to_json().unwrap(), before);
        prop_assert_eq!(url.default_qos(), qos);
    }
}
