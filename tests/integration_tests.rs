//! Integration tests for the logger
//!
//! These tests verify:
//! - Prefix placeholders rendered through a real logger
//! - Level threshold filtering and ordering
//! - Fan-out to several destinations
//! - File destinations and configuration documents
//! - Custom handlers

use chrono::Local;
use parking_lot::Mutex;
use rust_prefix_logger::appenders::{Appender, FileAppender, MemoryAppender, WriterAppender};
use rust_prefix_logger::core::error::LoggerError;
use rust_prefix_logger::core::logger::{Logger, LoggerOptions};
use rust_prefix_logger::core::urgency_level::UrgencyLevel;
use rust_prefix_logger::{critical, error, info, notice, LoggerConfig};
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn logger_with_memory(level: UrgencyLevel, prefix: &str) -> (Logger, MemoryAppender) {
    let memory = MemoryAppender::new();
    let logger = Logger::builder()
        .level(level)
        .prefix(prefix)
        .destination(memory.clone())
        .build()
        .expect("Failed to build logger");
    (logger, memory)
}

#[test]
fn test_every_convenience_method_writes_plain_lines() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::Critical, "");

    logger.notice("Notice");
    notice!(logger, "Notice{}", "f");
    logger.info("Info");
    info!(logger, "Info{}", "f");
    logger.error("Error");
    error!(logger, "Error{}", "f");
    logger.critical("Critical");
    critical!(logger, "Critical{}", "f");

    assert_eq!(
        memory.lines(),
        vec!["Notice", "Noticef", "Info", "Infof", "Error", "Errorf", "Critical", "Criticalf"]
    );
}

#[test]
fn test_date_time_and_urgency_prefix() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::Critical, "{{.O}} [{{.Q}}]: ");

    let before = Local::now();
    logger.info("test info message");
    let after = Local::now();

    let prefix = logger.prefix();
    let candidates = [
        format!("{}test info message\n", prefix.render_at(&before, UrgencyLevel::Info)),
        format!("{}test info message\n", prefix.render_at(&after, UrgencyLevel::Info)),
    ];
    let content = memory.contents();
    assert!(
        candidates.contains(&content),
        "unexpected line {:?}, expected one of {:?}",
        content,
        candidates
    );

    let expected_start = before.format("%Y-%m-%d").to_string();
    let expected_after = after.format("%Y-%m-%d").to_string();
    assert!(content.starts_with(&expected_start) || content.starts_with(&expected_after));
    assert!(content.contains(" [info]: "));
}

#[test]
fn test_single_token_prefixes_match_local_clock() {
    let cases = [
        ("F", "%Y-%m-%d"),
        ("Y", "%Y"),
        ("y", "%y"),
        ("m", "%m"),
        ("b", "%b"),
        ("B", "%B"),
        ("d", "%d"),
        ("a", "%a"),
        ("p", "%p"),
    ];

    for (token, layout) in cases {
        let prefix = format!("{{{{.{}}}}} ", token);
        let (logger, memory) = logger_with_memory(UrgencyLevel::Critical, &prefix);

        let before = Local::now().format(layout).to_string();
        logger.info("test");
        let after = Local::now().format(layout).to_string();

        let line = memory.contents();
        assert!(
            line == format!("{} test\n", before) || line == format!("{} test\n", after),
            "token {} rendered {:?}",
            token,
            line
        );
    }
}

#[test]
fn test_unknown_placeholder_produces_no_logger() {
    let result = Logger::builder()
        .level(UrgencyLevel::Critical)
        .prefix("{{.F}} {{.z}} ")
        .build();

    match result {
        Err(LoggerError::UnknownPlaceholder(name)) => assert_eq!(name, "z"),
        other => panic!("expected UnknownPlaceholder, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_template_syntax_error_produces_no_logger() {
    let result = Logger::builder().prefix("{{.F}} {{.T").build();
    assert!(matches!(result, Err(LoggerError::TemplateSyntax { .. })));
}

#[test]
fn test_literal_prefix_is_stable_over_time() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::Critical, "app | ");

    logger.info("first");
    std::thread::sleep(Duration::from_millis(1100));
    logger.info("second");

    assert_eq!(memory.contents(), "app | first\napp | second\n");
}

#[test]
fn test_threshold_admits_up_to_its_level() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::Error, "[{{.Q}}] ");

    logger.notice("notice");
    logger.info("info");
    logger.error("error");
    logger.critical("critical");

    // Critical is above the Error threshold
    assert_eq!(
        memory.lines(),
        vec!["[notice] notice", "[info] info", "[error] error"]
    );
    assert_eq!(logger.metrics().filtered_count(), 1);
}

#[test]
fn test_critical_threshold_emits_in_call_order() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::Critical, "[{{.Q}}] ");

    logger.critical("c1");
    logger.error("e1");
    logger.critical("c2");
    logger.error("e2");

    assert_eq!(
        memory.lines(),
        vec!["[critical] c1", "[error] e1", "[critical] c2", "[error] e2"]
    );
}

#[test]
fn test_none_threshold_suppresses_critical() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::None, "{{.O}} ");

    logger.critical("never");
    logger.log(UrgencyLevel::Critical, "never");
    critical!(logger, "never {}", 1);

    assert!(memory.is_empty());
    assert_eq!(logger.metrics().emitted_count(), 0);
    assert_eq!(logger.metrics().filtered_count(), 3);
}

#[test]
fn test_fan_out_writes_identical_line_in_order() {
    let order = Arc::new(Mutex::new(Vec::new()));

    struct Recording {
        name: &'static str,
        order: Arc<Mutex<Vec<(&'static str, String)>>>,
    }

    impl Appender for Recording {
        fn append(&mut self, line: &str) -> rust_prefix_logger::Result<()> {
            self.order.lock().push((self.name, line.to_string()));
            Ok(())
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    let logger = Logger::builder()
        .level(UrgencyLevel::Critical)
        .prefix("[{{.Q}}] ")
        .destination(Recording { name: "first", order: Arc::clone(&order) })
        .destination(Recording { name: "second", order: Arc::clone(&order) })
        .build()
        .expect("Failed to build logger");

    logger.info("test");

    assert_eq!(
        *order.lock(),
        vec![
            ("first", "[info] test\n".to_string()),
            ("second", "[info] test\n".to_string()),
        ]
    );
}

#[test]
fn test_file_and_memory_destinations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("app.log");
    let memory = MemoryAppender::new();

    let logger = Logger::new(LoggerOptions {
        level: UrgencyLevel::Critical,
        prefix: "{{.Q}}: ".to_string(),
        destinations: vec![
            Box::new(FileAppender::new(&log_file).expect("Failed to create appender"))
                as Box<dyn Appender>,
            Box::new(memory.clone()),
        ],
        handler: None,
    })
    .expect("Failed to build logger");

    logger.info("test");
    logger.error("broken");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "info: test\nerror: broken\n");
    assert_eq!(memory.contents(), content);
}

#[test]
fn test_writer_destination() {
    let logger = Logger::builder()
        .level(UrgencyLevel::Info)
        .destination(WriterAppender::new(std::io::sink()))
        .build()
        .expect("Failed to build logger");

    logger.info("discarded by the sink");
    assert_eq!(logger.metrics().emitted_count(), 1);
    assert_eq!(logger.metrics().write_failures(), 0);
}

#[test]
fn test_custom_handler_sees_every_message() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let memory = MemoryAppender::new();

    let logger = Logger::builder()
        .level(UrgencyLevel::Notice)
        .prefix("ignored {{.Q}} ")
        .destination(memory.clone())
        .handler(move |level: UrgencyLevel, message: &str| {
            sink.lock().push(format!("{}={}", level, message));
        })
        .build()
        .expect("Failed to build logger");

    logger.notice("a");
    logger.critical("b");
    error!(logger, "{} {}", "formatted", "c");

    assert!(memory.is_empty());
    assert_eq!(*seen.lock(), vec!["notice=a", "critical=b", "error=formatted c"]);
}

#[test]
fn test_logger_from_json_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("configured.log");

    let json = format!(
        r#"{{
            "level": "error",
            "prefix": "[{{{{.Q}}}}] ",
            "destinations": [{{ "type": "file", "path": {} }}]
        }}"#,
        serde_json::to_string(&log_file).expect("path serializes")
    );

    let config = LoggerConfig::from_json(&json).expect("Failed to parse config");
    let logger = Logger::from_config(config).expect("Failed to build logger");

    logger.info("info");
    logger.error("error");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(content, "[info] info\n[error] error\n");
}

#[test]
fn test_concurrent_logging() {
    let (logger, memory) = logger_with_memory(UrgencyLevel::Critical, "[{{.Q}}] ");
    let logger = Arc::new(logger);

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger_clone = Arc::clone(&logger);
        handles.push(std::thread::spawn(move || {
            for i in 0..10 {
                logger_clone.info(format!("Thread {} - Message {}", thread_id, i));
            }
        }));
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let lines = memory.lines();
    assert_eq!(lines.len(), 50);
    assert!(lines.iter().all(|line| line.starts_with("[info] Thread ")));
}
