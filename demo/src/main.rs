//! Masthead demo binary.
//!
//! Usage: `masthead [--json] [--reconcile]`. Logging is controlled with
//! `RUST_LOG` (default: info for the masthead crates).

use std::env;
use std::io;
use std::process::ExitCode;

use masthead_demo::{run, Options};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "masthead=info,masthead_graph=info,masthead_demo=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let result = Options::parse(env::args().skip(1))
        .and_then(|options| run(&options, &mut io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
