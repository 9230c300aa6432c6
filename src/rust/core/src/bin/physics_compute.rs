// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! physics_compute — CLI binary for a single WormholeKernel tick
//!
//! Takes a tick request on stdin or as --json argument, runs the full
//! pipeline (validation, energy, metric, collapse, wave, chirp, detectors,
//! SNR) and prints the report as JSON. With --export, prints the versioned
//! export document for the tick instead, stamped with the current time.
//!
//! Usage:
//!   echo '{"parameters":{"frequency":100,"amplitude":1e-21,"phase":0,"throatRadius":5e4}}' | physics_compute
//!   physics_compute --json '{"parameters":{...},"context":{"stability":80}}' --export
//!
//! Logging goes to stderr; set RUST_LOG=wormhole_core=debug for per-tick detail.

use std::env;
use std::io::{self, Read};
use std::process;

use tracing_subscriber::EnvFilter;
use wormhole_core::physics_kernel::WormholeKernel;
use wormhole_core::WormholeResult;

struct CliArgs {
    json: Option<String>,
    export: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = parse_args();
    if let Err(e) = run(args) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}

fn run(args: CliArgs) -> WormholeResult<()> {
    let input = match args.json {
        Some(json) => json,
        None => read_stdin(),
    };

    let request = WormholeKernel::parse_request(&input)?;
    let config = request.config.clone().unwrap_or_default();
    let report = WormholeKernel::compute_tick(
        &config,
        &request.parameters,
        &request.context,
        &mut rand::thread_rng(),
    )?;

    let output = if args.export {
        let now_ms = chrono::Utc::now().timestamp_millis();
        WormholeKernel::export(&config, now_ms, &request.parameters, &report)?.to_json_pretty()?
    } else {
        serde_json::to_string(&report)?
    };

    println!("{}", output);
    Ok(())
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = env::args().collect();
    let mut cli = CliArgs {
        json: None,
        export: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--json" if i + 1 < args.len() => {
                cli.json = Some(args[i + 1].clone());
                i += 1;
            }
            "--export" => cli.export = true,
            other => {
                eprintln!("ERROR: Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }
    cli
}

fn read_stdin() -> String {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("ERROR: Failed to read stdin: {}", e);
        process::exit(1);
    }
    input
}
