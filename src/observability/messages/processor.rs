// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor events.
//!
//! This module contains message types for logging events related to:
//! * Input rejected by a processor's validation gate
//! * Failures recovered inside `process` and rendered as text
//! * Processing completed

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A processor's `validate` rejected its input.
///
/// # Log Level
/// `debug!` - Expected during normal operation
///
/// # Example
/// ```
/// use code_nexus::observability::messages::processor::ProcessorInputRejected;
///
/// let msg = ProcessorInputRejected {
///     processor: "numeric",
///     input_kind: "string",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorInputRejected<'a> {
    pub processor: &'a str,
    pub input_kind: &'a str,
}

impl Display for ProcessorInputRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' rejected {} input",
            self.processor, self.input_kind
        )
    }
}

impl StructuredLog for ProcessorInputRejected<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            input_kind = self.input_kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_input_rejected",
            span_name = name,
            processor = self.processor,
            input_kind = self.input_kind,
        )
    }
}

/// `process` hit a failure and rendered it as diagnostic text.
///
/// # Log Level
/// `debug!` - The failure is part of the returned text, not an error
///
/// # Example
/// ```
/// use code_nexus::errors::NumericError;
/// use code_nexus::observability::messages::processor::ProcessorFailureRecovered;
///
/// let msg = ProcessorFailureRecovered {
///     processor: "numeric",
///     error: &NumericError::EmptyList,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ProcessorFailureRecovered<'a> {
    pub processor: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ProcessorFailureRecovered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' recovered from failure: {}",
            self.processor, self.error
        )
    }
}

impl StructuredLog for ProcessorFailureRecovered<'_> {
    fn log(&self) {
        tracing::debug!(
            processor = self.processor,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "processor_failure_recovered",
            span_name = name,
            processor = self.processor,
            error = %self.error,
        )
    }
}

/// A processor produced its summary.
///
/// # Log Level
/// `trace!` - Fires once per processed input
///
/// # Example
/// ```
/// use code_nexus::observability::messages::processor::ProcessorCompleted;
///
/// let msg = ProcessorCompleted {
///     processor: "text",
///     output_size: 22,
/// };
///
/// tracing::trace!("{}", msg);
/// ```
pub struct ProcessorCompleted<'a> {
    pub processor: &'a str,
    pub output_size: usize,
}

impl Display for ProcessorCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: output={} bytes",
            self.processor, self.output_size
        )
    }
}

impl StructuredLog for ProcessorCompleted<'_> {
    fn log(&self) {
        tracing::trace!(
            processor = self.processor,
            output_size = self.output_size,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "processor_completed",
            span_name = name,
            processor = self.processor,
            output_size = self.output_size,
        )
    }
}

/// Short name for the JSON shape of an input, for log fields.
pub fn input_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Object(_) => "mapping",
    }
}
