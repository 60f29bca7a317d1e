//! The compiler collaborator turning a textual catalog into its binary form.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Compiles one translation catalog.
///
/// The contract: read the textual catalog at `input` and write its compiled
/// binary form at `output`, overwriting any existing file. Failures are fatal
/// to the build step; a catalog that does not compile is an authoring error,
/// not a condition to recover from.
pub trait Compiler {
    fn compile(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Delegates compilation to the GNU gettext `msgfmt` executable.
#[derive(Debug, Clone)]
pub struct SystemMsgfmt {
    program: PathBuf,
}

impl SystemMsgfmt {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("msgfmt"),
        }
    }

    /// Use a specific msgfmt binary instead of the one on PATH.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemMsgfmt {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler for SystemMsgfmt {
    fn compile(&self, input: &Path, output: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-o")
            .arg(output)
            .arg(input)
            .status()
            .with_context(|| format!("Failed to run {}", self.program.display()))?;
        if !status.success() {
            bail!("msgfmt failed for {}", input.display());
        }
        Ok(())
    }
}
