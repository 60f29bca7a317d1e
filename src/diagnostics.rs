//! Severity-tagged message sink for the build and cleanup passes.
//!
//! The hook reports non-fatal conditions through an injected sink rather
//! than a global logger, so a host can route messages wherever it wants and
//! decide for itself what an error-level message means for the build.

use std::cell::Cell;

use colored::Colorize;

/// Message sink with three severities.
///
/// `debug` messages carry a verbosity level; sinks drop messages above their
/// configured threshold. `warning` and `error` are always surfaced.
pub trait Diagnostics {
    fn debug(&self, message: &str, level: u8);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink printing to stderr with cargo-style severity prefixes.
///
/// Keeps a count of error-level messages so the caller can map "an error was
/// reported" to an exit status after the pass completes.
#[derive(Debug, Default)]
pub struct ConsoleDiagnostics {
    verbosity: u8,
    errors: Cell<usize>,
}

impl ConsoleDiagnostics {
    pub fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            errors: Cell::new(0),
        }
    }

    /// Number of error-level messages emitted so far.
    pub fn error_count(&self) -> usize {
        self.errors.get()
    }
}

impl Diagnostics for ConsoleDiagnostics {
    fn debug(&self, message: &str, level: u8) {
        if level <= self.verbosity {
            eprintln!("{}", message.dimmed());
        }
    }

    fn warning(&self, message: &str) {
        eprintln!("{}: {}", "warning".bold().yellow(), message);
    }

    fn error(&self, message: &str) {
        self.errors.set(self.errors.get() + 1);
        eprintln!("{}: {}", "error".bold().red(), message);
    }
}

#[cfg(test)]
pub(crate) use recording::{Level, RecordingDiagnostics};
