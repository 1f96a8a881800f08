use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::args::CliArguments;

/// Initializes the tracing system, printing to stderr without timestamps.
pub fn init_tracing(args: &CliArguments) {
    let fmt_layer = fmt::Layer::default()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(level_filter(args));

    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Returns the log level filter for the given verbosity level.
fn level_filter(args: &CliArguments) -> LevelFilter {
    match args.verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
