// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failure kinds recovered inside the numeric processor.

use thiserror::Error;

/// Why a numeric input could not be summarized.
///
/// The `Display` text of each variant is exactly what the numeric processor
/// renders in place of a summary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericError {
    /// The input is not a list, or one of its elements is not a number.
    #[error("ERROR ! Invalid numeric data")]
    InvalidData,

    /// The list has no elements, so no average exists.
    #[error("ERROR ! Empty numeric list")]
    EmptyList,
}
