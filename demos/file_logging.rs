//! File logging example
//!
//! Demonstrates logging to both console and file destinations, configured
//! from a JSON document.
//!
//! Run with: cargo run --example file_logging

use rust_prefix_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Rust Prefix Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(
        r#"{
            "level": "critical",
            "prefix": "{{.F}} {{.r}} [{{.Q}}] ",
            "destinations": [
                { "type": "stdout" },
                { "type": "file", "path": "application.log" }
            ]
        }"#,
    )?;
    let logger = Logger::from_config(config)?;

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.notice("Loading configuration...");
    logger.info("Configuration loaded successfully");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");
    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.notice("Item 3 took longer than expected");
        }
    }
    logger.info("All operations completed");

    if logger.metrics().write_failures() > 0 {
        println!("\n{} writes failed", logger.metrics().write_failures());
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
