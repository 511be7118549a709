//! Basic logger usage example
//!
//! Demonstrates prefix templates, the urgency threshold and the formatting
//! macros on standard output.
//!
//! Run with: cargo run --example basic_usage

use rust_prefix_logger::prelude::*;
use rust_prefix_logger::{critical, error};

fn main() -> Result<()> {
    println!("=== Rust Prefix Logger - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .level(UrgencyLevel::Critical)
        .prefix("{{.O}} [{{.Q}}]: ")
        .destination(ConsoleAppender::stdout())
        .build()?;

    println!("1. Logging at every level:");
    logger.log(UrgencyLevel::Notice, "test notice message");
    logger.info("test info message");
    error!(logger, "{} {} {}", "test", "error", "message");
    critical!(logger, "disk usage at {}%", 97);

    println!("\n2. A lower threshold drops the more urgent levels:");
    let quiet = Logger::builder()
        .level(UrgencyLevel::Info)
        .prefix("{{.T}} {{.Q}} | ")
        .build()?;
    quiet.notice("Notice (visible)");
    quiet.info("Info (visible)");
    quiet.error("Error (hidden)");

    println!("\n3. Invalid prefixes are rejected up front:");
    match Logger::builder().prefix("{{.O}} {{.z}} ").build() {
        Ok(_) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
