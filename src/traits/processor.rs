// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

/// Shared contract for every data processor variant.
///
/// Callers are expected to run `validate` before `process`. Every
/// implementation in this crate keeps `process` total anyway: an input of the
/// wrong shape produces a diagnostic text instead of a panic.
pub trait DataProcessor {
    /// Stable identifier used in logs and by the factory.
    fn name(&self) -> &'static str;

    /// Returns whether `data` has the shape this processor accepts.
    fn validate(&self, data: &Value) -> bool;

    /// Produces a human-readable summary of `data`.
    fn process(&self, data: &Value) -> String;

    /// Annotates a processed result. Identity unless overridden.
    fn format_output(&self, result: &str) -> String {
        result.to_string()
    }
}
