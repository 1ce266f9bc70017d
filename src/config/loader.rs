// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ConfigError;
use crate::observability::messages::{demo::CaseFileLoaded, StructuredLog};
use serde::Deserialize;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// Configuration for the polymorphic section of the demo.
///
/// Lists the (processor, input) pairs run through the shared
/// [`DataProcessor`](crate::traits::DataProcessor) interface, in order.
/// Inputs are untyped; each processor decides whether it accepts them.
///
/// # Example
/// ```yaml
/// cases:
///   - processor: numeric
///     input: [1, 2, 3]
///   - processor: text
///     input: "Hello World!"
///   - processor: log
///     input: "INFO: System ready"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DemoConfig {
    pub cases: Vec<DemoCase>,
}

impl DemoConfig {
    /// The cases run when no case file is given.
    pub fn builtin() -> Self {
        Self {
            cases: vec![
                DemoCase::new(ProcessorKind::Numeric, json!([1, 2, 3])),
                DemoCase::new(ProcessorKind::Text, json!("Hello World!")),
                DemoCase::new(ProcessorKind::Log, json!("INFO: System ready")),
            ],
        }
    }
}

/// One processor/input pair.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DemoCase {
    pub processor: ProcessorKind,
    #[serde(default)]
    pub input: Value,
}

impl DemoCase {
    pub fn new(processor: ProcessorKind, input: Value) -> Self {
        Self { processor, input }
    }
}

/// Which processor variant handles a case.
///
/// # Variants
/// * `Numeric` - list of numbers: count, sum, average
/// * `Text` - string: character and word counts
/// * `Log` - log line: ERROR/INFO classification
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessorKind {
    Numeric,
    Text,
    Log,
}

/// Parse a case file already read into memory.
///
/// `path` is only used for error reporting.
pub fn parse_config(content: &str, path: &Path) -> Result<DemoConfig, ConfigError> {
    let cfg: DemoConfig = serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if cfg.cases.is_empty() {
        return Err(ConfigError::NoCases {
            path: path.to_path_buf(),
        });
    }

    Ok(cfg)
}

/// Load a case file from YAML
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let cfg = parse_config(&content, path)?;

    CaseFileLoaded {
        path,
        case_count: cfg.cases.len(),
    }
    .log();

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_basic_config() {
        let yaml = r#"
cases:
  - processor: numeric
    input: [1, 2.5, 3]
  - processor: text
    input: "Hello World!"
  - processor: log
    input: "INFO: System ready"
"#;
        let cfg = parse_config(yaml, Path::new("inline.yaml")).unwrap();
        assert_eq!(cfg.cases.len(), 3);
        assert_eq!(cfg.cases[0].processor, ProcessorKind::Numeric);
        assert_eq!(cfg.cases[0].input, json!([1, 2.5, 3]));
        assert_eq!(cfg.cases[1].input, json!("Hello World!"));
        assert_eq!(cfg.cases[2].processor, ProcessorKind::Log);
    }

    #[test]
    fn parse_missing_input_is_null() {
        let yaml = "cases:\n  - processor: text\n";
        let cfg = parse_config(yaml, Path::new("inline.yaml")).unwrap();
        assert_eq!(cfg.cases[0].input, Value::Null);
    }

    #[test]
    fn parse_unknown_processor_fails() {
        let yaml = "cases:\n  - processor: stream\n    input: []\n";
        let err = parse_config(yaml, Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn parse_empty_case_list_fails() {
        let err = parse_config("cases: []\n", Path::new("empty.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NoCases { .. }));
    }

    #[test]
    fn load_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "cases:\n  - processor: log\n    input: \"ERROR: disk full\"").unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(
            cfg.cases,
            vec![DemoCase::new(ProcessorKind::Log, json!("ERROR: disk full"))]
        );
    }

    #[test]
    fn load_config_missing_file() {
        let err = load_config("/nonexistent/cases.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn builtin_cases_in_demo_order() {
        let kinds: Vec<_> = DemoConfig::builtin().cases.iter().map(|c| c.processor).collect();
        assert_eq!(kinds, vec![ProcessorKind::Numeric, ProcessorKind::Text, ProcessorKind::Log]);
    }
}
