//! Tests for missing-fact detection and derived aggregates.

use super::facts::{Fact, HostFacts, derive_aggregates, missing_facts};
use super::host::Host;

fn host(yaml: &str) -> Host {
    Host::from_raw(serde_yaml::from_str(yaml).unwrap()).unwrap()
}

mod missing {
    use super::*;

    #[test]
    fn master_with_only_ip_misses_three_facts_in_order() {
        let hosts = vec![host("ip: 10.0.0.1\nmaster: true")];
        let missing = missing_facts(&hosts);

        assert_eq!(missing.len(), 1);
        assert_eq!(
            missing["10.0.0.1"],
            vec![Fact::PublicIp, Fact::Hostname, Fact::PublicHostname]
        );
    }

    #[test]
    fn complete_hosts_are_omitted() {
        let hosts = vec![
            host("ip: 10.0.0.1\nhostname: a\npublic_ip: 1.1.1.1\npublic_hostname: a.example.com\nmaster: true"),
            host("hostname: b\nnode: true"),
        ];
        let missing = missing_facts(&hosts);

        assert!(!missing.contains_key("10.0.0.1"));
        assert_eq!(
            missing["b"],
            vec![Fact::Ip, Fact::PublicIp, Fact::PublicHostname]
        );
    }

    #[test]
    fn no_hosts_means_nothing_missing() {
        assert!(missing_facts(&[]).is_empty());
    }

    #[test]
    fn fact_names_match_settings_keys() {
        let names: Vec<&str> = Fact::REQUIRED.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["ip", "public_ip", "hostname", "public_hostname"]);
        assert_eq!(Fact::PublicHostname.to_string(), "public_hostname");
    }

    #[test]
    fn facts_serialize_as_snake_case() {
        let json = serde_json::to_string(&Fact::REQUIRED).unwrap();
        assert_eq!(json, r#"["ip","public_ip","hostname","public_hostname"]"#);
    }
}

mod aggregates {
    use super::*;

    #[test]
    fn masters_and_nodes_keep_host_order() {
        let hosts = vec![
            host("ip: 10.0.0.3\nmaster: true\nnode: true"),
            host("hostname: n1\nnode: true"),
            host("ip: 10.0.0.1\nmaster: true"),
        ];
        let aggregates = derive_aggregates(&hosts);

        assert_eq!(aggregates.masters, ["10.0.0.3", "10.0.0.1"]);
        assert_eq!(aggregates.nodes, ["10.0.0.3", "n1"]);
        assert_eq!(aggregates.validated_facts.len(), 3);
    }

    #[test]
    fn validated_facts_keep_public_ip_and_public_hostname_apart() {
        let hosts = vec![host(
            "ip: 10.0.0.1\nhostname: m1\npublic_ip: 1.2.3.4\npublic_hostname: m1.example.com\nmaster: true",
        )];
        let aggregates = derive_aggregates(&hosts);

        assert_eq!(
            aggregates.validated_facts["10.0.0.1"],
            HostFacts {
                ip: Some("10.0.0.1".into()),
                hostname: Some("m1".into()),
                public_ip: Some("1.2.3.4".into()),
                public_hostname: Some("m1.example.com".into()),
            }
        );
    }

    #[test]
    fn empty_host_list_gives_empty_aggregates() {
        let aggregates = derive_aggregates(&[]);

        assert!(aggregates.masters.is_empty());
        assert!(aggregates.nodes.is_empty());
        assert!(aggregates.validated_facts.is_empty());
    }
}
