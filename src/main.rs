// duolog - main.rs
//
// Command-line front end: appends one log line from the shell, e.g.
//
//   duolog --file deploy.log --location deploy.sh:40 warn disk at 91%
//
// The message words are joined verbatim; no placeholder expansion.
//
// Acts as the embedding application: it opens the log file, installs a
// mutex-backed lock hook and picks the console style, then emits through an
// Emitter built from the flags.

use clap::Parser;
use duolog::util::error::SinkError;
use duolog::{file_sink, Emitter, Level, MutexHook, Options, Style};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// duolog - write a leveled log line to stderr and optionally a file.
#[derive(Parser, Debug)]
#[command(name = "duolog", version, about)]
struct Cli {
    /// Severity of the message (trace, debug, info, warn, error, fatal).
    level: String,

    /// Message text. Multiple words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,

    /// Drop the message if it is below this level.
    #[arg(short = 'm', long = "min-level", default_value = "trace")]
    min_level: String,

    /// Do not write to stderr.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Omit the timestamp field.
    #[arg(long = "no-timestamp")]
    no_timestamp: bool,

    /// Colour the level and location fields on stderr.
    #[arg(short = 'c', long = "color")]
    color: bool,

    /// Also append the line to this file (created if missing).
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Source location to report, as FILE:LINE.
    #[arg(short = 'l', long = "location", default_value = "shell:0")]
    location: String,

    /// Show duolog's own diagnostics (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Split "FILE:LINE" at the last colon. A missing or non-numeric line
/// reports line 0 and keeps the whole input as the file.
fn split_location(location: &str) -> (&str, u32) {
    match location.rsplit_once(':') {
        Some((file, line)) => match line.parse() {
            Ok(line) => (file, line),
            Err(_) => (location, 0),
        },
        None => (location, 0),
    }
}

fn open_append(path: &Path) -> Result<std::fs::File, SinkError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn run(cli: &Cli) -> duolog::util::error::Result<()> {
    let level: Level = cli.level.parse()?;
    let min_level: Level = cli.min_level.parse()?;
    let style = if cli.color { Style::Ansi } else { Style::Plain };
    let options = Options::default()
        .with_level(min_level)
        .with_quiet(cli.quiet)
        .with_timestamp(!cli.no_timestamp)
        .with_style(style);

    let emitter = Emitter::with_options(options);
    emitter.set_lock_hook(Some(Arc::new(MutexHook::new())));

    if let Some(path) = &cli.file {
        let file = open_append(path)?;
        tracing::debug!(path = %path.display(), "Log file opened");
        emitter.set_file_sink(Some(file_sink(file)));
    }

    let (file, line) = split_location(&cli.location);
    let message = cli.message.join(" ");
    emitter.log(level, file, line, format_args!("{message}"));
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    duolog::util::logging::init(cli.debug);

    tracing::debug!(
        version = duolog::util::constants::APP_VERSION,
        level = %cli.level,
        min_level = %cli.min_level,
        "duolog starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Failed to emit log line");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duolog::util::error::DuologError;

    #[test]
    fn test_split_location() {
        assert_eq!(split_location("a.c:42"), ("a.c", 42));
        assert_eq!(split_location("C:\\src\\m.rs:7"), ("C:\\src\\m.rs", 7));
        assert_eq!(split_location("script"), ("script", 0));
        assert_eq!(split_location("odd:line"), ("odd:line", 0));
    }

    #[test]
    fn test_cli_parses_levels_and_words() {
        let cli = Cli::try_parse_from([
            "duolog", "--min-level", "WARN", "-q", "error", "disk", "at", "91%",
        ])
        .unwrap();
        assert_eq!(cli.level.parse::<Level>().unwrap(), Level::Error);
        assert_eq!(cli.min_level.parse::<Level>().unwrap(), Level::Warn);
        assert!(cli.quiet);
        assert_eq!(cli.message.join(" "), "disk at 91%");
    }

    #[test]
    fn test_run_rejects_unknown_level() {
        let cli = Cli::try_parse_from(["duolog", "-q", "loud", "hi"]).unwrap();
        match run(&cli) {
            Err(DuologError::Level(e)) => assert!(e.to_string().contains("loud")),
            other => panic!("expected level error, got {other:?}"),
        }

        let cli = Cli::try_parse_from(["duolog", "-q", "-m", "verbose", "info", "hi"]).unwrap();
        assert!(matches!(run(&cli), Err(DuologError::Level(_))));
    }

    #[test]
    fn test_run_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let cli = Cli::try_parse_from([
            "duolog",
            "-q",
            "--no-timestamp",
            "-l",
            "deploy.sh:12",
            "-f",
            path.to_str().unwrap(),
            "info",
            "done",
        ])
        .unwrap();
        run(&cli).unwrap();
        run(&cli).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, " INFO  deploy.sh:12: done\n INFO  deploy.sh:12: done\n");
    }

    #[test]
    fn test_run_reports_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "duolog",
            "-q",
            "-f",
            dir.path().to_str().unwrap(),
            "info",
            "x",
        ])
        .unwrap();
        assert!(matches!(run(&cli), Err(DuologError::Sink(_))));
    }
}
