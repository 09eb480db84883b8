//! Logging init: append to a file under the XDG state dir, or stderr.
//!
//! Resolution output goes to stdout, so log lines never share it.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,hubres=debug,hubres_core=debug";
const VERBOSE_FILTER: &str = "debug,hubres=trace,hubres_core=trace";

/// Where log lines should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogTarget {
    /// `~/.local/state/hubres/hubres.log`, falling back to stderr.
    #[default]
    StateFile,
    Stderr,
}

/// Hands out clones of the log file; a failed clone writes to stderr instead.
struct SharedFile(File);

enum LogWriter {
    File(File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogWriter::File)
            .unwrap_or(LogWriter::Stderr)
    }
}

/// `RUST_LOG` wins; otherwise the default (or verbose) filter applies.
fn env_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hubres")?;
    Ok(xdg_dirs.get_state_home().join("hubres").join("hubres.log"))
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Installs the global subscriber. Never fails: if the state directory is
/// unwritable, logging goes to stderr.
pub fn init_logging(target: LogTarget, verbose: bool) {
    let opened = match target {
        LogTarget::StateFile => open_log_file().ok(),
        LogTarget::Stderr => None,
    };

    match opened {
        Some((file, path)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(SharedFile(file))
                .with_ansi(false)
                .init();
            tracing::debug!("hubres logging to {}", path.display());
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter(verbose))
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
        }
    }
}
