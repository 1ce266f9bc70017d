// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Demo driver.
//!
//! Runs each processor directly on a fixed input (the showcase), then runs a
//! list of cases through `&dyn DataProcessor` (the polymorphic section).
//! Everything is written to a caller-supplied `Write` so the exact output can
//! be asserted in tests.

use serde_json::{json, Value};
use std::io::{self, Write};

use crate::backends::local::{LocalProcessorFactory, LogProcessor, NumericProcessor, TextProcessor};
use crate::config::consts::*;
use crate::config::DemoConfig;
use crate::observability::messages::demo::{CaseSkipped, PolymorphicRunStarted};
use crate::observability::messages::StructuredLog;
use crate::traits::DataProcessor;

/// Runs the whole demo: banner, showcase, then the polymorphic section.
pub fn run_demo<W: Write>(out: &mut W, config: &DemoConfig, source: &str) -> io::Result<()> {
    run_showcase(out)?;
    run_polymorphic(out, config, source)?;
    Ok(())
}

/// Prints the banner and runs every processor on its showcase input.
pub fn run_showcase<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BANNER)?;
    writeln!(out)?;

    let numbers = SHOWCASE_NUMBERS
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    showcase_step(
        out,
        &NumericProcessor::new(),
        "Numeric",
        &json!(SHOWCASE_NUMBERS),
        &format!("[{}]", numbers),
        "Numeric data verified",
    )?;
    writeln!(out)?;

    showcase_step(
        out,
        &TextProcessor::new(),
        "Text",
        &json!(SHOWCASE_TEXT),
        &format!("\"{}\"", SHOWCASE_TEXT),
        "Text data verified",
    )?;
    writeln!(out)?;

    showcase_step(
        out,
        &LogProcessor::new(),
        "Log",
        &json!(SHOWCASE_LOG_LINE),
        SHOWCASE_LOG_LINE,
        "Log entry verified",
    )?;

    Ok(())
}

/// One showcase block. Prints nothing when `data` fails validation.
fn showcase_step<W: Write>(
    out: &mut W,
    processor: &dyn DataProcessor,
    title: &str,
    data: &Value,
    data_display: &str,
    verification: &str,
) -> io::Result<()> {
    if !processor.validate(data) {
        return Ok(());
    }

    writeln!(out, "Initializing {} Processor...", title)?;
    let result = processor.process(data);
    writeln!(out, "Processing data: {}", data_display)?;
    writeln!(out, "Validation: {}", verification)?;
    writeln!(out, "Output: {}", processor.format_output(&result))?;
    Ok(())
}

/// Runs every case through the shared interface.
///
/// Only cases whose input validates are printed, numbered from 1 without gaps.
/// Returns how many results were printed.
pub fn run_polymorphic<W: Write>(
    out: &mut W,
    config: &DemoConfig,
    source: &str,
) -> io::Result<usize> {
    let start_msg = PolymorphicRunStarted {
        source,
        case_count: config.cases.len(),
    };
    let span = start_msg.span("polymorphic_run");
    let _guard = span.enter();
    start_msg.log();

    writeln!(out)?;
    writeln!(out, "{}", POLYMORPHIC_HEADER)?;
    writeln!(out)?;
    writeln!(out, "{}", POLYMORPHIC_INTRO)?;

    let mut printed = 0;
    for (position, case) in config.cases.iter().enumerate() {
        let processor = LocalProcessorFactory::create_processor(case.processor);

        if !processor.validate(&case.input) {
            CaseSkipped {
                position: position + 1,
                processor: processor.name(),
            }
            .log();
            continue;
        }

        let result = processor.process(&case.input);
        printed += 1;
        writeln!(out, "Result {}: {}", printed, processor.format_output(&result))?;
    }

    Ok(printed)
}
