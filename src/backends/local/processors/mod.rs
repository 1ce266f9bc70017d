// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod log;
pub mod numeric;
pub mod text;

pub use log::*;
pub use numeric::*;
pub use text::*;
