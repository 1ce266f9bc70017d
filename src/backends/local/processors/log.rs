// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::DataProcessor;

/// Rendered for lines without a recognized marker and for non-string input.
pub const INVALID_LOG_MESSAGE: &str = "ERROR ! Invalid Log";

/// Severity recognized in a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Info,
}

impl LogLevel {
    /// Classifies a line by marker substring. `ERROR` wins over `INFO`.
    pub fn classify(line: &str) -> Option<Self> {
        if line.contains("ERROR") {
            Some(LogLevel::Error)
        } else if line.contains("INFO") {
            Some(LogLevel::Info)
        } else {
            None
        }
    }

    fn render(self, line: &str) -> String {
        match self {
            LogLevel::Error => format!("[ALERT] ERROR level detected: {}", line),
            LogLevel::Info => format!("[INFO] INFO level detected: {}", line),
        }
    }
}

/// Log processor - classifies a log line by its level marker
pub struct LogProcessor;

impl LogProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProcessor for LogProcessor {
    fn name(&self) -> &'static str {
        "log"
    }

    fn validate(&self, data: &Value) -> bool {
        let valid = matches!(data, Value::String(line) if !line.is_empty());

        if !valid {
            ProcessorInputRejected {
                processor: self.name(),
                input_kind: input_kind(data),
            }
            .log();
        }
        valid
    }

    fn process(&self, data: &Value) -> String {
        let output = data
            .as_str()
            .and_then(|line| LogLevel::classify(line).map(|level| level.render(line)))
            .unwrap_or_else(|| INVALID_LOG_MESSAGE.to_string());

        ProcessorCompleted {
            processor: self.name(),
            output_size: output.len(),
        }
        .log();

        output
    }
}
