use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use codespan_reporting::term::termcolor;
use once_cell::sync::Lazy;
use termcolor::{ColorChoice, WriteColor};

use crate::ARGS;

/// Returns a handle to the optionally colored terminal output.
pub fn out() -> TermOut {
    static OUTPUT: Lazy<TermOut> = Lazy::new(TermOut::new);
    OUTPUT.clone()
}

/// A utility that allows users to write colored terminal output.
/// If colors are not supported by the terminal, they are disabled.
#[derive(Clone)]
pub struct TermOut {
    stream: Arc<termcolor::StandardStream>,
}

impl TermOut {
    fn new() -> Self {
        let color_choice = match ARGS.color {
            clap::ColorChoice::Auto if io::stderr().is_terminal() => ColorChoice::Auto,
            clap::ColorChoice::Always => ColorChoice::Always,
            _ => ColorChoice::Never,
        };

        let stream = termcolor::StandardStream::stderr(color_choice);
        TermOut { stream: Arc::new(stream) }
    }
}

impl Write for TermOut {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.lock().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.lock().flush()
    }
}

impl WriteColor for TermOut {
    fn supports_color(&self) -> bool {
        self.stream.supports_color()
    }

    fn set_color(&mut self, spec: &termcolor::ColorSpec) -> io::Result<()> {
        self.stream.lock().set_color(spec)
    }

    fn reset(&mut self) -> io::Result<()> {
        self.stream.lock().reset()
    }
}
