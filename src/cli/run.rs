use anyhow::Result;

use super::args::{Arguments, Command};
use super::commands::{build::build, clean::clean, init::init};
use super::exit_status::ExitStatus;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
