//! Logging init: file under the XDG state dir, with stderr fallback.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-event writer: the shared log file, or stderr when cloning the file
/// handle fails mid-run.
enum LogTarget {
    File(fs::File),
    Stderr,
}

impl io::Write for LogTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogTarget::File(f) => f.write(buf),
            LogTarget::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogTarget::File(f) => f.flush(),
            LogTarget::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// MakeWriter over the opened log file.
struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogTarget;

    fn make_writer(&'a self) -> LogTarget {
        match self.0.try_clone() {
            Ok(f) => LogTarget::File(f),
            Err(_) => LogTarget::Stderr,
        }
    }
}

fn init_with(writer: BoxMakeWriter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ttsfix_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
}

/// Initialize structured logging to `~/.local/state/ttsfix/ttsfix.log`.
/// Returns Err when the log dir is unwritable so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ttsfix")?;
    let log_dir = xdg_dirs.get_state_home().join("ttsfix");
    fs::create_dir_all(&log_dir).with_context(|| format!("create {}", log_dir.display()))?;

    let path = log_dir.join("ttsfix.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    init_with(BoxMakeWriter::new(LogFile(file)));
    tracing::info!("ttsfix logging to {}", path.display());
    Ok(())
}

/// Initialize logging to stderr only. Use when `init_logging` fails so the
/// CLI still runs.
pub fn init_logging_stderr() {
    init_with(BoxMakeWriter::new(io::stderr));
}
