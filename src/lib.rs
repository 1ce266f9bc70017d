// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // processor variants + factory
pub mod config;     // demo cases + constants
pub mod engine;     // demo driver
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // the DataProcessor contract
