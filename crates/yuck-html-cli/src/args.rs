use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser, ValueEnum};

/// Transpiles HTML widget definitions into eww's Yuck language.
#[derive(Debug, Clone, Parser)]
#[clap(name = "yuck-html", version, author)]
pub struct CliArguments {
    /// Directory to search for `.html` files, or a single `.html` file
    #[clap(env = "YUCK_HTML_INPUT", value_parser = parse_non_empty_path)]
    pub input: PathBuf,

    /// Directory to write the `.yuck` files into, created if missing
    #[clap(env = "YUCK_HTML_OUTPUT", value_parser = parse_non_empty_path)]
    pub output: PathBuf,

    /// In which format to emit diagnostics
    #[clap(
        long,
        default_value_t = DiagnosticFormat::Human,
        value_parser = clap::value_parser!(DiagnosticFormat)
    )]
    pub diagnostic_format: DiagnosticFormat,

    /// Whether to use color. `auto` uses color if the terminal supports it
    #[clap(long, default_value_t = ColorChoice::Auto, default_missing_value = "always")]
    pub color: ColorChoice,

    /// Sets the level of logging verbosity:
    /// -v = warning & error, -vv = info, -vvv = debug, -vvvv = trace
    #[clap(short, long, action = ArgAction::Count)]
    pub verbosity: u8,
}

/// Which format to use for diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum DiagnosticFormat {
    Human,
    Short,
}

impl Display for DiagnosticFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}

/// Parses a path that must not be empty.
fn parse_non_empty_path(value: &str) -> Result<PathBuf, &'static str> {
    if value.is_empty() {
        return Err("input and output directories cannot be empty");
    }
    Ok(PathBuf::from(value))
}
