//! Sorted ledger harness.
//!
//! Builds the default store, reads the sorted list in one fresh request and
//! prints the data with its cost. Logs go to stderr, filtered by `RUST_LOG`
//! and shaped by `SORTED_LEDGER_LOG_FORMAT`.
use tracing_subscriber::EnvFilter;

use ledger_core::config::{LogConfig, LogFormat, LOG_FORMAT_ENV};
use ledger_core::gas::{format_cost_schedule, RequestScope};
use ledger_core::store::{Response, Store};

fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(ledger_core::config::DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    if let Some(raw) = &config.rejected_format {
        tracing::warn!(var = LOG_FORMAT_ENV, value = %raw, "unknown log format, using text");
    }
}

fn render(response: &Response) -> String {
    format!(
        "SortedList: {:?}\nGas: {}\nFree: {}",
        response.data().unwrap_or_default(),
        response.total_cost(),
        response.is_free()
    )
}

fn main() {
    init_tracing(&LogConfig::from_env());
    tracing::debug!("{}", format_cost_schedule());

    let mut store = Store::new();
    let mut scope = RequestScope::new();

    let response = match store.read_sorted(&mut scope) {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(error = %err, summary = ?scope.summary(), "request failed");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(summary = ?scope.summary(), "request complete");
    println!("{}", render(&response));
}
