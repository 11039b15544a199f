use folio_kernel::config::load_config;
use folio_kernel::domain::config::SiteConfig;
use serial_test::serial;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
#[serial]
fn reads_sections_from_file() {
    let file = write_config(
        r#"
        [server]
        port = 9090

        [site]
        owner = "Ada"

        [contact]
        submit_delay_ms = 5
        "#,
    );

    let cfg: SiteConfig = load_config(Some(file.path())).expect("load");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.site.owner, "Ada");
    assert_eq!(cfg.site.title, "Senior Software Engineer");
    assert_eq!(cfg.contact.submit_delay_ms, 5);
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let cfg: SiteConfig = load_config(Some(dir.path().join("absent.toml"))).expect("load");
    assert_eq!(cfg.server.port, 4583);
    assert_eq!(cfg.contact.submit_delay_ms, 1000);
}

#[test]
#[serial]
fn malformed_values_are_reported() {
    let file = write_config("[server]\nport = \"not a port\"\n");

    let err = load_config::<SiteConfig>(Some(file.path())).expect_err("bad port");
    assert!(err.to_string().contains("Failed to deserialize config"), "{err}");
}
