// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading a demo case file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The case file could not be read.
    #[error("Failed to read case file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The case file is not valid YAML or does not match the expected layout.
    #[error("Failed to parse case file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The case file parsed but lists nothing to run.
    #[error("Case file '{}' does not list any cases", .path.display())]
    NoCases { path: PathBuf },
}
