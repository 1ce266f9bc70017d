// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod demo;

pub use demo::{run_demo, run_polymorphic, run_showcase};
