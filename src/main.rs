// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};

use code_nexus::config::consts::BUILTIN_CASES_SOURCE;
use code_nexus::config::{load_config, DemoConfig};
use code_nexus::engine::run_demo;
use code_nexus::observability::init_tracing;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [cases.yaml]", args[0]);
        eprintln!("Example: {} configs/polymorphic-cases.yaml", args[0]);
        std::process::exit(1);
    }

    // Optional case file replaces the built-in polymorphic cases
    let (config, source) = match args.get(1) {
        Some(path) => (load_config(path)?, path.as_str()),
        None => (DemoConfig::builtin(), BUILTIN_CASES_SOURCE),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &config, source).context("Failed to write demo output")?;
    out.flush().context("Failed to flush demo output")?;

    Ok(())
}
