//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};

use rs_readability::{extract, CandidateStats};
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Output {
    main_content: String,
    candidate: Option<CandidateStats>,
    pruned: usize,
    warnings: Vec<String>,
    error: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        error!(%err, "failed to read from stdin");
        std::process::exit(1);
    }

    let output = match extract(&html) {
        Ok(r) => Output {
            main_content: r.content_text,
            candidate: r.candidate,
            pruned: r.pruned,
            warnings: r.warnings,
            error: None,
        },
        Err(err) => Output {
            main_content: String::new(),
            candidate: None,
            pruned: 0,
            warnings: Vec::new(),
            error: Some(err.to_string()),
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
