use std::env;
use std::process;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use rsedr::cli::{execute_request, resolve};
use rsedr::config::Settings;
use rsedr::sink::ActivityLog;

fn main() {
    setup_logging();

    let raw_args: Vec<String> = env::args().skip(1).collect();
    let request = resolve(&raw_args);

    let record = match execute_request(&request) {
        Ok(Some(record)) => record,
        Ok(None) => return,
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            process::exit(1);
        }
    };

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            process::exit(1);
        }
    };

    if let Err(e) = ActivityLog::new(settings.log_file).append(&record) {
        eprintln!("{}", format!("Error: {}", e).red());
        process::exit(1);
    }
}

/// Diagnostic logging goes to stderr and is controlled via RUST_LOG; the
/// activity record stream is the sink's concern, not tracing's.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
