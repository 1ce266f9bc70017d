// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;

use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::DataProcessor;

/// Rendered when `process` receives something other than a string.
pub const INVALID_TEXT_MESSAGE: &str = "ERROR ! Invalid text data";

/// Prefix added by [`TextProcessor::format_output`].
pub const TEXT_OUTPUT_PREFIX: &str = "Processing text: ";

/// Text processor - counts characters and space-separated words
pub struct TextProcessor;

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProcessor for TextProcessor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn validate(&self, data: &Value) -> bool {
        let valid = matches!(data, Value::String(text) if !text.is_empty());

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
        let Some(text) = data.as_str() else {
            return INVALID_TEXT_MESSAGE.to_string();
        };

        let char_count = text.chars().count();
        // Only a single space separates words; runs of spaces yield empty segments.
        let word_count = text.split(' ').count();

        let output = format!("{} characters, {} words", char_count, word_count);

        ProcessorCompleted {
            processor: self.name(),
            output_size: output.len(),
        }
        .log();

        output
    }

    fn format_output(&self, result: &str) -> String {
        format!("{}{}", TEXT_OUTPUT_PREFIX, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_sentence() {
        let processor = TextProcessor::new();
        let data = json!("Hello Nexus World");
        assert!(processor.validate(&data));

        let result = processor.process(&data);
        assert_eq!(result, "17 characters, 3 words");
        assert_eq!(
            processor.format_output(&result),
            "Processing text: 17 characters, 3 words"
        );
    }

    #[test]
    fn test_counts_follow_single_space_split() {
        let processor = TextProcessor::new();
        let cases = [
            ("Hello World!", "12 characters, 2 words"),
            ("a  b", "4 characters, 3 words"),
            ("tab\tseparated", "13 characters, 1 words"),
            (" leading", "8 characters, 2 words"),
        ];

        for (input, expected) in cases {
            assert_eq!(processor.process(&json!(input)), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let processor = TextProcessor::new();
        assert_eq!(processor.process(&json!("héllo wörld")), "11 characters, 2 words");
    }

    #[test]
    fn test_validate_rejects_empty_and_non_strings() {
        let processor = TextProcessor::new();
        assert!(!processor.validate(&json!("")));
        assert!(!processor.validate(&json!(42)));
        assert!(!processor.validate(&json!(["a"])));
    }

    #[test]
    fn test_process_is_total() {
        let processor = TextProcessor::new();
        assert_eq!(processor.process(&json!("")), "0 characters, 1 words");
        assert_eq!(processor.process(&json!([1, 2])), INVALID_TEXT_MESSAGE);
    }

    #[test]
    fn test_format_output_always_prefixed() {
        let processor = TextProcessor::new();
        for result in ["", "anything", "Processing text: twice"] {
            assert!(processor.format_output(result).starts_with(TEXT_OUTPUT_PREFIX));
        }
    }
}
