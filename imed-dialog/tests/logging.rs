use std::sync::Arc;

use imed_dialog::{
    imed_assert, imed_log, init_logging, set_backend, DebugMessageType, HeadlessBackend,
    LogConfig, LogInitError,
};
use simplelog::LevelFilter;

// Installing a logger is process-wide, so everything lives in one test.
#[test]
fn test_logging_to_file() {
    set_backend(Arc::new(HeadlessBackend));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("imed.log");
    let config = LogConfig::default()
        .console(false)
        .level(LevelFilter::Info)
        .file(&path);
    init_logging(&config).unwrap();

    imed_log!(DebugMessageType::Info, "loaded {} icons", 2);
    imed_assert!(1 + 1 == 2, "arithmetic works");
    imed_assert!(1 + 1 == 3, "expected {}", 3);
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[Info]"));
    assert!(contents.contains("loaded 2 icons"));
    assert!(contents.contains("logging.rs"));
    assert!(contents.contains("Assertion failed \"1 + 1 == 3\": expected 3"));
    assert!(!contents.contains("arithmetic works"));

    let again = init_logging(&LogConfig::default().console(false));
    assert!(matches!(again, Err(LogInitError::AlreadyInstalled(_))));
}

#[test]
fn test_unwritable_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogConfig::default()
        .console(false)
        .file(dir.path().join("missing").join("imed.log"));
    assert!(matches!(init_logging(&config), Err(LogInitError::Io { .. })));
}
