// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! All diagnostic logging in Code Nexus goes through message structs that
//! implement `Display` and [`messages::StructuredLog`], so log text lives in
//! one place instead of being scattered across processors and the driver.
//!
//! Messages are organized by subsystem:
//! * `messages::processor` - processor validation, recovery and completion events
//! * `messages::demo` - demo driver and case file events
//!
//! # Usage
//!
//! ```rust
//! use code_nexus::observability::messages::{processor::ProcessorCompleted, StructuredLog};
//!
//! ProcessorCompleted {
//!     processor: "numeric",
//!     output_size: 48,
//! }
//! .log();
//! ```
//!
//! Nothing is printed unless a subscriber is installed; the binary installs a
//! `tracing-subscriber` fmt layer writing to stderr, filtered by `RUST_LOG`.

pub mod messages;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Installs the global subscriber used by the binary.
///
/// Output goes to stderr so the demo text on stdout is unaffected.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Ignore the error from a second initialization (tests, embedding).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
