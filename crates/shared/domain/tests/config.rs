use folio_domain::config::{ContactConfig, ServerConfig, SiteConfig};
use serde_json::json;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(server.port, 4583);
    assert!(server.ssl.is_none());

    let contact = ContactConfig::default();
    assert_eq!(contact.submit_delay(), Duration::from_secs(1));

    let site = SiteConfig::default();
    assert_eq!(site.site.owner, "Dev");
    assert_eq!(site.site.title, "Senior Software Engineer");
}

#[test]
fn site_config_deserializes_partial_sections() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "contact": { "submit_delay_ms": 250 }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.server.address.is_ipv6());
    assert_eq!(cfg.contact.submit_delay(), Duration::from_millis(250));
    assert_eq!(cfg.site.owner, "Dev");
}

#[test]
fn ssl_section_is_optional() {
    let raw = json!({ "server": { "ssl": { "cert": "/etc/tls/site.pem", "key": "/etc/tls/site.key" } } });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    let ssl = cfg.server.ssl.as_ref().expect("ssl section");
    assert_eq!(ssl.cert, std::path::PathBuf::from("/etc/tls/site.pem"));
    assert_eq!(cfg.server.port, 4583);
}

#[test]
fn mutation_does_not_leak_into_clones() {
    let original = SiteConfig::default();
    let mut tuned = original.clone();
    tuned.contact.submit_delay_ms = 10;

    assert_eq!(original.contact.submit_delay_ms, 1000);
    assert_eq!(tuned.contact.submit_delay_ms, 10);
}
