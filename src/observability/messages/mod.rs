// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable text and
//! [`StructuredLog`] to emit itself at its own level with structured fields.
//!
//! * `processor` - processor validation, recovery and completion events
//! * `demo` - demo driver and case file events

use tracing::Span;

pub mod demo;
pub mod processor;

/// A log message that knows its level, its fields and how to open a span.
pub trait StructuredLog {
    /// Emit the message at its designated level.
    fn log(&self);

    /// Create a span carrying the message fields.
    fn span(&self, name: &str) -> Span;
}
