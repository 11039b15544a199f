use folio_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let logger = Logger::builder()
        .name("folio-init-once")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");
    assert!(!logger.has_file_output(), "console-only logger keeps no file guard");

    let err = Logger::builder()
        .name("folio-init-twice")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "unexpected error: {err}");
}
