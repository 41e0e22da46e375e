//! toucan - job application tracker CLI
//!
//! Fetches job applications from the job service and shows them as a table or
//! as applied / interview / offer lanes.

use clap::Parser;
use toucan::cli::Cli;
use toucan::output::{emit_error, infer_command_name_from_args};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Longest `RUST_LOG` value still handed to the filter parser.
const MAX_FILTER_LEN: usize = 4096;

/// Logging stays off unless `RUST_LOG` holds a usable filter. Logs go to
/// stderr so `--json` output on stdout stays parseable.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty() && raw.len() <= MAX_FILTER_LEN)
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let command = infer_command_name_from_args();
    let cli = Cli::parse();
    let json = cli.json;
    let Err(err) = cli.run().await else {
        return;
    };
    let _ = emit_error(&command, &err, json);
    std::process::exit(err.exit_code());
}
