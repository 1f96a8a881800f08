use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use codespan_reporting::diagnostic::{Diagnostic, Severity as CodespanSeverity};
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term::{self, termcolor::WriteColor};
use ecow::eco_format;
use walkdir::WalkDir;
use yuck_html::diag::{Diagnostic as YuckDiagnostic, Severity, Warned};

use crate::StrResult;
use crate::args::{CliArguments, DiagnosticFormat};

/// A preprocessed set of arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory or file to read HTML from.
    pub input: PathBuf,
    /// Directory to write Yuck to.
    pub output: PathBuf,
    /// The format to emit diagnostics in.
    pub diagnostic_format: DiagnosticFormat,
}

impl Config {
    pub fn new(args: &CliArguments) -> Self {
        Self {
            input: args.input.clone(),
            output: args.output.clone(),
            diagnostic_format: args.diagnostic_format,
        }
    }
}

/// What happened during a run.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Summary {
    /// The files that were written.
    pub written: Vec<PathBuf>,
    /// How many HTML files could not be transpiled.
    pub failed: usize,
}

/// Transpiles every `.html` file below the input path.
///
/// A file that fails is reported and counted, and the remaining files are
/// still processed.
pub fn transpile(config: &Config, out: &mut impl WriteColor) -> StrResult<Summary> {
    fs::create_dir_all(&config.output).map_err(|err| {
        eco_format!(
            "failed to create output directory {} ({err})",
            config.output.display()
        )
    })?;

    let mut summary = Summary::default();
    for entry in WalkDir::new(&config.input).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                crate::write_error(out, &eco_format!("failed to walk directory ({err})"))
                    .map_err(|err| eco_format!("failed to print error ({err})"))?;
                summary.failed += 1;
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() {
            tracing::debug!("Skipping directory: {}", path.display());
            continue;
        }

        if path.extension() != Some(OsStr::new("html")) {
            tracing::warn!("Skipping non-HTML file: {}", path.display());
            continue;
        }

        tracing::info!("Processing file: {}", path.display());
        match transpile_file(config, path, out) {
            Ok(Some(written)) => {
                println!("Transpiled: {} → {}", path.display(), written.display());
                summary.written.push(written);
            }
            Ok(None) => summary.failed += 1,
            Err(msg) => {
                crate::write_error(out, &msg)
                    .map_err(|err| eco_format!("failed to print error ({err})"))?;
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Transpiles one file, returning where the output went.
///
/// Returns `Ok(None)` when the document itself could not be translated; its
/// diagnostics were printed already.
fn transpile_file(
    config: &Config,
    path: &Path,
    out: &mut impl WriteColor,
) -> StrResult<Option<PathBuf>> {
    let text = fs::read_to_string(path)
        .map_err(|err| eco_format!("failed to read {} ({err})", path.display()))?;

    let Warned { output, warnings } = yuck_html::transpile(&text);
    let name = path.display().to_string();
    let error = output.as_ref().err().map(|&err| YuckDiagnostic::from(err));
    print_diagnostics(out, &name, &text, warnings.iter().chain(&error), config.diagnostic_format)
        .map_err(|err| eco_format!("failed to print diagnostics ({err})"))?;

    let Ok(yuck) = output else { return Ok(None) };

    let target = output_path(config, path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            eco_format!("failed to create directory {} ({err})", parent.display())
        })?;
    }
    fs::write(&target, yuck)
        .map_err(|err| eco_format!("failed to write {} ({err})", target.display()))?;

    tracing::info!("Wrote {}", target.display());
    Ok(Some(target))
}

/// Where the Yuck version of an input file goes, mirroring its location
/// relative to the input directory.
fn output_path(config: &Config, path: &Path) -> PathBuf {
    let relative = match path.strip_prefix(&config.input) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative,
        _ => Path::new(path.file_name().unwrap_or(path.as_os_str())),
    };
    config.output.join(relative).with_extension("yuck")
}

/// Print diagnostic messages to the terminal.
fn print_diagnostics<'a>(
    out: &mut impl WriteColor,
    name: &str,
    source: &str,
    diagnostics: impl IntoIterator<Item = &'a YuckDiagnostic>,
    diagnostic_format: DiagnosticFormat,
) -> Result<(), codespan_reporting::files::Error> {
    let mut config = term::Config { tab_width: 2, ..Default::default() };
    if diagnostic_format == DiagnosticFormat::Short {
        config.display_style = term::DisplayStyle::Short;
    }

    let file = SimpleFile::new(name, source);
    for diagnostic in diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => CodespanSeverity::Error,
            Severity::Warning => CodespanSeverity::Warning,
        };

        let diag = Diagnostic::new(severity)
            .with_message(eco_format!("{name}: {}", diagnostic.message))
            .with_notes(
                diagnostic.hints.iter().map(|e| eco_format!("hint: {e}").into()).collect(),
            );

        term::emit(out, &config, &file, &diag)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use codespan_reporting::term::termcolor::NoColor;

    use super::*;

    const WIDGET: &str = "<html><body><widget name=\"w\"><box></box></widget></body></html>";

    fn config(input: &Path, output: &Path) -> Config {
        Config {
            input: input.into(),
            output: output.into(),
            diagnostic_format: DiagnosticFormat::Short,
        }
    }

    fn run(config: &Config) -> (Summary, String) {
        let mut out = NoColor::new(Vec::new());
        let summary = transpile(config, &mut out).unwrap();
        (summary, String::from_utf8(out.into_inner()).unwrap())
    }

    #[test]
    fn test_transpile_mirrors_directory_layout() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::create_dir_all(input.path().join("bars/top")).unwrap();
        fs::write(input.path().join("main.html"), WIDGET).unwrap();
        fs::write(input.path().join("bars/top/clock.html"), WIDGET).unwrap();
        fs::write(input.path().join("notes.txt"), "not html").unwrap();

        let (summary, printed) = run(&config(input.path(), output.path()));
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.written, [
            output.path().join("bars/top/clock.yuck"),
            output.path().join("main.yuck"),
        ]);
        assert!(printed.is_empty());

        let text = fs::read_to_string(output.path().join("main.yuck")).unwrap();
        assert!(text.starts_with(yuck_html::HEADER));
        assert!(text.contains("(defwidget w []"));
        assert!(!output.path().join("notes.yuck").exists());
    }

    #[test]
    fn test_transpile_continues_after_failure() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.html"), "<html><frameset></frameset></html>").unwrap();
        fs::write(input.path().join("b.html"), WIDGET).unwrap();

        let (summary, printed) = run(&config(input.path(), output.path()));
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.written, [output.path().join("b.yuck")]);
        assert!(printed.contains("error"));
        assert!(printed.contains("no <body> tag found inside <html>"));
        assert!(!output.path().join("a.yuck").exists());
    }

    #[test]
    fn test_transpile_reports_warnings() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("w.html"), "<div></div><widget name=\"x\"></widget>")
            .unwrap();

        let (summary, printed) = run(&config(input.path(), output.path()));
        assert_eq!(summary.failed, 0);
        assert!(printed.contains("warning"));
        assert!(printed.contains("unhandled top-level tag <div>"));
    }

    #[test]
    fn test_transpile_single_file() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let file = input.path().join("solo.html");
        fs::write(&file, WIDGET).unwrap();

        let target = output.path().join("nested/out");
        let (summary, _) = run(&config(&file, &target));
        assert_eq!(summary.written, [target.join("solo.yuck")]);
        assert!(target.join("solo.yuck").exists());
    }
}
