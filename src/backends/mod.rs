// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Processor implementations for Code Nexus.
//!
//! All processors are local, in-process Rust types implementing
//! [`DataProcessor`](crate::traits::DataProcessor):
//! - **Numeric**: count, sum and average of a list of numbers
//! - **Text**: character and word counts of a string
//! - **Log**: ERROR/INFO classification of a log line
//!
//! Processors are built directly or through the factory:
//! ```text
//! ProcessorKind → LocalProcessorFactory → Box<dyn DataProcessor> → demo driver
//! ```
//!
//! # Example
//! ```rust
//! use code_nexus::backends::local::LocalProcessorFactory;
//! use code_nexus::config::ProcessorKind;
//! use serde_json::json;
//!
//! let processor = LocalProcessorFactory::create_processor(ProcessorKind::Text);
//! let data = json!("Hello Nexus World");
//!
//! assert!(processor.validate(&data));
//! let result = processor.process(&data);
//! assert_eq!(
//!     processor.format_output(&result),
//!     "Processing text: 17 characters, 3 words"
//! );
//! ```

pub mod local;
