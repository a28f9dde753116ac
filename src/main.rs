// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process;

use anyhow::{Context, Result};
use textsmith::service::{handle, run_pipeline_file, Request, Response};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

const OPERATIONS: [&str; 7] = [
    "analyze",
    "transform",
    "transform_advanced",
    "filter",
    "map_filter_reduce",
    "lambda",
    "summary",
];

fn usage(program: &str) {
    eprintln!("Usage: {} <operation> <text>", program);
    eprintln!("       {} --pipeline <pipeline.yaml|pipeline.toml> <text>", program);
    eprintln!("Operations: {}", OPERATIONS.join(", "));
    eprintln!("Example: {} analyze \"The quick brown fox\"", program);
    eprintln!("Example: {} --pipeline demos/pipelines/shout.yaml \"hello world\"", program);
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &[String]) -> Result<Response> {
    let response = match args {
        [flag, path, text] if flag == "--pipeline" => run_pipeline_file(path, text)
            .with_context(|| format!("pipeline '{}' failed", path))?,
        [operation, text] => {
            let request = Request::with_defaults(operation, text)
                .with_context(|| format!("unknown operation '{}'", operation))?;
            handle(&request).with_context(|| format!("operation '{}' failed", operation))?
        }
        _ => anyhow::bail!("wrong number of arguments"),
    };
    Ok(response)
}

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("textsmith");

    let response = match run(args.get(1..).unwrap_or_default()) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            usage(program);
            process::exit(1);
        }
    };

    match response.to_json_pretty() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Failed to serialize response: {}", e);
            process::exit(1);
        }
    }
}
