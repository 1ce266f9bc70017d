// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the demo driver and case files.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Polymorphic run started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PolymorphicRunStarted<'a> {
    pub source: &'a str,
    pub case_count: usize,
}

impl Display for PolymorphicRunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running {} cases from {} through the shared interface",
            self.case_count, self.source
        )
    }
}

impl StructuredLog for PolymorphicRunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            case_count = self.case_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "polymorphic_run",
            span_name = name,
            source = self.source,
            case_count = self.case_count,
        )
    }
}

/// A case was skipped because its input failed validation.
///
/// # Log Level
/// `debug!` - Skipping is the documented behavior
pub struct CaseSkipped<'a> {
    pub position: usize,
    pub processor: &'a str,
}

impl Display for CaseSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Skipping case {} for processor '{}': validation failed",
            self.position, self.processor
        )
    }
}

impl StructuredLog for CaseSkipped<'_> {
    fn log(&self) {
        tracing::debug!(
            position = self.position,
            processor = self.processor,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "case_skipped",
            span_name = name,
            position = self.position,
            processor = self.processor,
        )
    }
}

/// A case file was read and parsed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct CaseFileLoaded<'a> {
    pub path: &'a Path,
    pub case_count: usize,
}

impl Display for CaseFileLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded {} cases from '{}'",
            self.case_count,
            self.path.display()
        )
    }
}

impl StructuredLog for CaseFileLoaded<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            case_count = self.case_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "case_file_loaded",
            span_name = name,
            path = %self.path.display(),
            case_count = self.case_count,
        )
    }
}
