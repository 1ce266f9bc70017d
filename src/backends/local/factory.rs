// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::processors::*;
use crate::config::ProcessorKind;
use crate::traits::DataProcessor;

/// Factory for creating local (in-process) processor instances
pub struct LocalProcessorFactory;

impl LocalProcessorFactory {
    /// Create a processor instance for a kind
    ///
    /// - `ProcessorKind::Numeric` -> NumericProcessor
    /// - `ProcessorKind::Text` -> TextProcessor
    /// - `ProcessorKind::Log` -> LogProcessor
    pub fn create_processor(kind: ProcessorKind) -> Box<dyn DataProcessor> {
        match kind {
            ProcessorKind::Numeric => Box::new(NumericProcessor::new()),
            ProcessorKind::Text => Box::new(TextProcessor::new()),
            ProcessorKind::Log => Box::new(LogProcessor::new()),
        }
    }
}
