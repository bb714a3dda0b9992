use banking_engine::bank::registry::Registry;
use banking_engine::session::{self, SessionError};

use std::io;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "demo".to_string());

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let result = match mode.as_str() {
        "demo" => session::run(Registry::demo(), stdin, stdout),
        "prompt" => session::run_prompted(stdin, stdout),
        "single" => session::run_single(stdin, stdout),
        other => {
            eprintln!("unknown mode: {} (expected demo, prompt or single)", other);
            std::process::exit(2);
        }
    };

    match result {
        Ok(()) => {}
        // Already reported on the menu output; the run ends quietly.
        Err(SessionError::InvalidAccountType(_)) => {}
        Err(SessionError::Setup(_)) => {}
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
