//! JSON-lines host for the notebook store.
//!
//! # Responsibility
//! - Construct one store at startup and drop it at exit.
//! - Read one JSON request per stdin line and write one JSON response per
//!   stdout line.
//!
//! # Invariants
//! - A malformed line yields a `client_error` response, never an exit.
//! - Blank lines are skipped.

mod config;

use clap::Parser;
use config::HostConfig;
use log::{error, info};
use notebook_core::{
    dispatch, init_logging, reject_undecodable, ApiRequest, ApiResponse, NotebookStore,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    // Bad flags print usage and exit with 2.
    let config = HostConfig::parse();

    if let Some(log_dir) = config.log_dir() {
        if let Err(err) = init_logging(config.log_level(), log_dir) {
            eprintln!("notebook_cli: {err}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    }

    let store = NotebookStore::new();
    info!(
        "event=host_start module=cli status=ok version={}",
        notebook_core::core_version()
    );

    let outcome = serve(&store, io::stdin().lock(), io::stdout().lock());
    match outcome {
        Ok(handled) => {
            info!("event=host_stop module=cli status=ok requests={handled}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=host_stop module=cli status=error kind={:?}", err.kind());
            eprintln!("notebook_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Serves requests until `input` reaches EOF; returns the request count.
fn serve(
    store: &NotebookStore,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<usize> {
    let mut handled = 0;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(store, &line);
        writeln!(output, "{}", encode_response(&response))?;
        output.flush()?;
        handled += 1;
    }
    Ok(handled)
}

fn handle_line(store: &NotebookStore, line: &str) -> ApiResponse {
    match serde_json::from_str::<ApiRequest>(line) {
        Ok(request) => dispatch(store, request),
        Err(err) => reject_undecodable(err.to_string()),
    }
}

fn encode_response(response: &ApiResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|err| {
        format!(
            "{{\"status\":\"internal_error\",\"error\":{}}}",
            serde_json::Value::String(format!("failed to encode response: {err}"))
        )
    })
}
