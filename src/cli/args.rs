//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `build`: Compile `.po` catalogs into the locale tree and stage them
//! - `clean`: Remove compiled catalogs and the directories they leave empty
//! - `init`: Initialize a mopack configuration file

use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};

use crate::hook::PACKAGE_TARGET;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by build and clean.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (contains the messages directory and the
    /// configuration file)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Project name used for the default translation domain
    /// (defaults to the root directory name)
    #[arg(long)]
    pub project: Option<String>,

    /// Increase debug output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct BuildCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Build target being produced; anything but "package" turns the build
    /// step into a no-op
    #[arg(long, default_value = PACKAGE_TARGET)]
    pub target: String,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remove every file under the locale directory, not just compiled
    /// catalogs
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile .po catalogs into the locale tree and stage them for packaging
    Build(BuildCommand),
    /// Remove compiled catalogs and the directories left empty
    Clean(CleanCommand),
    /// Initialize a new .mopackrc.json configuration file
    Init,
}
