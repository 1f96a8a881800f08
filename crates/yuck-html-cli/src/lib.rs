pub mod args;
pub mod terminal;
pub mod trace;
pub mod transpile;

use std::cell::Cell;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::WriteColor;
use ecow::EcoString;
use once_cell::sync::Lazy;

use crate::args::CliArguments;

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

thread_local! {
    /// The CLI's exit code.
    pub static EXIT: Cell<ExitCode> = const { Cell::new(ExitCode::SUCCESS) };
}

/// The parsed commandline arguments.
pub static ARGS: Lazy<CliArguments> = Lazy::new(CliArguments::parse);

/// Ensure a failure exit code.
pub fn set_failed() {
    EXIT.with(|cell| cell.set(ExitCode::FAILURE));
}

/// Print an application-level error (independent from a source file).
pub fn print_error(msg: &str) -> io::Result<()> {
    write_error(&mut terminal::out(), msg)
}

/// Write an application-level error into the given output.
pub fn write_error(output: &mut impl WriteColor, msg: &str) -> io::Result<()> {
    let styles = term::Styles::default();

    output.set_color(&styles.header_error)?;
    write!(output, "error")?;

    output.reset()?;
    writeln!(output, ": {msg}")
}
