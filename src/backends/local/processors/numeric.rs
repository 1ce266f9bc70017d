// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::Value;
use std::fmt;

use crate::errors::NumericError;
use crate::observability::messages::{processor::*, StructuredLog};
use crate::traits::DataProcessor;

/// Numeric processor - counts, sums and averages a list of numbers
pub struct NumericProcessor;

impl NumericProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Computes count and total for `data`.
    ///
    /// Booleans count as the integers 0 and 1. Any other non-number element,
    /// or an input without elements to sum, yields
    /// [`NumericError::InvalidData`]. An empty list, empty string or empty
    /// mapping has length zero and yields [`NumericError::EmptyList`].
    pub fn summarize(data: &Value) -> Result<NumericSummary, NumericError> {
        let values = match data {
            Value::Array(values) => values,
            Value::String(text) if text.is_empty() => return Err(NumericError::EmptyList),
            Value::Object(map) if map.is_empty() => return Err(NumericError::EmptyList),
            _ => return Err(NumericError::InvalidData),
        };

        let mut total = Total::Integer(0);
        for value in values {
            total = total.add(value).ok_or(NumericError::InvalidData)?;
        }

        if values.is_empty() {
            return Err(NumericError::EmptyList);
        }

        Ok(NumericSummary {
            count: values.len(),
            total,
        })
    }
}

impl Default for NumericProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Running sum that stays integral until a float shows up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Total {
    Integer(i128),
    Float(f64),
}

impl Total {
    /// Adds one element, or returns `None` when it is not numeric.
    fn add(self, value: &Value) -> Option<Self> {
        let integer = match value {
            Value::Bool(flag) => Some(i128::from(*flag)),
            Value::Number(number) => number
                .as_i64()
                .map(i128::from)
                .or_else(|| number.as_u64().map(i128::from)),
            _ => return None,
        };

        let sum = match (self, integer) {
            (Total::Integer(acc), Some(n)) => match acc.checked_add(n) {
                Some(sum) => Total::Integer(sum),
                None => Total::Float(acc as f64 + n as f64),
            },
            (_, Some(n)) => Total::Float(self.as_f64() + n as f64),
            (_, None) => Total::Float(self.as_f64() + value.as_f64()?),
        };
        Some(sum)
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Total::Integer(n) => n as f64,
            Total::Float(x) => x,
        }
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Integer(n) => write!(f, "{}", n),
            Total::Float(x) => f.write_str(&format_float(*x)),
        }
    }
}

/// Shortest round-trip rendering of a float.
///
/// Decimal form keeps at least one fractional digit (`20.0`). Magnitudes
/// below `1e-4` or from `1e16` up use exponent form with an explicit sign and
/// at least two exponent digits (`1e+16`, `1e-05`).
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = x.abs();
    if x == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return format!("{:?}", x);
    }

    let exponent_form = format!("{:e}", x);
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => exponent_form,
    }
}

/// Structured result of a successful numeric summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericSummary {
    pub count: usize,
    pub total: Total,
}

impl NumericSummary {
    pub fn average(&self) -> f64 {
        self.total.as_f64() / self.count as f64
    }
}

impl fmt::Display for NumericSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} numeric values, sum={}, avg={}",
            self.count,
            self.total,
            format_float(self.average())
        )
    }
}

impl DataProcessor for NumericProcessor {
    fn name(&self) -> &'static str {
        "numeric"
    }

    fn validate(&self, data: &Value) -> bool {
        let valid = matches!(data, Value::Array(values)
            if !values.is_empty()
                && values.iter().all(|value| value.is_number() || value.is_boolean()));

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
        let output = match Self::summarize(data) {
            Ok(summary) => summary.to_string(),
            Err(error) => {
                ProcessorFailureRecovered {
                    processor: self.name(),
                    error: &error,
                }
                .log();
                error.to_string()
            }
        };

        ProcessorCompleted {
            processor: self.name(),
            output_size: output.len(),
        }
        .log();

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_process_integers() {
        let processor = NumericProcessor::new();
        let data = json!([10, 20, 30]);
        assert!(processor.validate(&data));
        assert_eq!(
            processor.process(&data),
            "Processed 3 numeric values, sum=60, avg=20.0"
        );
    }

    #[test]
    fn test_process_mixed_int_and_float() {
        let processor = NumericProcessor::new();
        assert_eq!(
            processor.process(&json!([1, 2.5, 3])),
            "Processed 3 numeric values, sum=6.5, avg=2.1666666666666665"
        );
    }

    #[test]
    fn test_process_fractional_average() {
        let processor = NumericProcessor::new();
        assert_eq!(
            processor.process(&json!([1, 2])),
            "Processed 2 numeric values, sum=3, avg=1.5"
        );
    }

    #[test]
    fn test_summary_fields() {
        let summary = NumericProcessor::summarize(&json!([4, -2, 7, 3])).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.total, Total::Integer(12));
        assert_eq!(summary.average(), 3.0);
    }

    #[test]
    fn test_sum_past_i64_stays_exact() {
        let processor = NumericProcessor::new();
        let data = json!([i64::MAX, 1]);
        assert_eq!(
            NumericProcessor::summarize(&data).unwrap().total,
            Total::Integer(i64::MAX as i128 + 1)
        );
        assert_eq!(
            processor.process(&data),
            "Processed 2 numeric values, sum=9223372036854775808, avg=4.611686018427388e+18"
        );
    }

    #[test]
    fn test_large_floats_use_signed_exponent() {
        let processor = NumericProcessor::new();
        assert_eq!(
            processor.process(&json!([1e16, 1e16])),
            "Processed 2 numeric values, sum=2e+16, avg=1e+16"
        );
    }

    #[test]
    fn test_small_floats_use_two_digit_exponent() {
        let processor = NumericProcessor::new();
        assert_eq!(
            processor.process(&json!([0.00001])),
            "Processed 1 numeric values, sum=1e-05, avg=1e-05"
        );
    }

    #[test]
    fn test_format_float() {
        let cases = [
            (20.0, "20.0"),
            (0.0001, "0.0001"),
            (-0.0, "-0.0"),
            (1.5e16, "1.5e+16"),
            (-2.5e-7, "-2.5e-07"),
            (1e300, "1e+300"),
            (9999999999999998.0, "9999999999999998.0"),
            (f64::INFINITY, "inf"),
        ];

        for (value, expected) in cases {
            assert_eq!(format_float(value), expected, "value {:?}", value);
        }
    }

    #[test]
    fn test_empty_list() {
        let processor = NumericProcessor::new();
        assert!(!processor.validate(&json!([])));
        assert_eq!(processor.process(&json!([])), "ERROR ! Empty numeric list");
        assert_eq!(
            NumericProcessor::summarize(&json!([])),
            Err(NumericError::EmptyList)
        );
    }

    #[test]
    fn test_mixed_invalid_types() {
        let processor = NumericProcessor::new();
        let data = json!([1, "a"]);
        assert!(!processor.validate(&data));
        assert_eq!(processor.process(&data), "ERROR ! Invalid numeric data");
    }

    #[test]
    fn test_non_list_input() {
        let processor = NumericProcessor::new();
        for data in [json!("123"), json!(42), json!(null), json!(true), json!({"a": 1})] {
            assert!(!processor.validate(&data), "accepted {}", data);
            assert_eq!(processor.process(&data), "ERROR ! Invalid numeric data");
        }
    }

    #[test]
    fn test_empty_string_and_mapping_are_empty() {
        let processor = NumericProcessor::new();
        for data in [json!(""), json!({})] {
            assert!(!processor.validate(&data), "accepted {}", data);
            assert_eq!(processor.process(&data), "ERROR ! Empty numeric list");
        }
    }

    #[test]
    fn test_booleans_count_as_integers() {
        let processor = NumericProcessor::new();
        let data = json!([true, 1]);
        assert!(processor.validate(&data));
        assert_eq!(
            processor.process(&data),
            "Processed 2 numeric values, sum=2, avg=1.0"
        );
        assert_eq!(
            processor.process(&json!([false, 2.5])),
            "Processed 2 numeric values, sum=2.5, avg=1.25"
        );
    }

    #[test]
    fn test_format_output_is_identity() {
        let processor = NumericProcessor::new();
        let result = processor.process(&json!([1, 2, 3]));
        assert_eq!(processor.format_output(&result), result);
    }
}
