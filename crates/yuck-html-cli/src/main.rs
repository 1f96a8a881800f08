use std::process::ExitCode;

use yuck_html_cli::transpile::{Config, transpile};
use yuck_html_cli::{ARGS, EXIT, StrResult, print_error, set_failed, terminal, trace};

/// Entry point.
fn main() -> ExitCode {
    trace::init_tracing(&ARGS);

    let res = dispatch();

    if let Err(msg) = res {
        set_failed();
        print_error(&msg).expect("failed to print error");
    }

    EXIT.with(|cell| cell.get())
}

/// Transpile everything below the input path.
fn dispatch() -> StrResult<()> {
    let config = Config::new(&ARGS);
    let summary = transpile(&config, &mut terminal::out())?;
    if summary.failed > 0 {
        set_failed();
    }
    Ok(())
}
