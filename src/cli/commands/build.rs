use anyhow::Result;
use colored::Colorize;

use super::shared;
use crate::cli::{BuildCommand, ExitStatus};
use crate::compiler::SystemMsgfmt;
use crate::diagnostics::ConsoleDiagnostics;
use crate::hook::{BuildData, BuildHook};

/// Drive the build step: compile every catalog under the messages directory
/// and print what was staged for packaging.
pub fn build(cmd: BuildCommand) -> Result<ExitStatus> {
    let config = shared::resolve_config(&cmd.common)?;
    let compiler = SystemMsgfmt::new();
    let diagnostics = ConsoleDiagnostics::new(cmd.common.verbose);
    let hook = BuildHook::new(
        &cmd.common.root,
        &cmd.target,
        config,
        &compiler,
        &diagnostics,
    );

    let mut build_data = BuildData::default();
    hook.initialize("", &mut build_data)?;

    if diagnostics.error_count() > 0 {
        return Ok(ExitStatus::Failure);
    }

    for included in build_data.force_include.keys() {
        println!("{} {}", "staged".green().bold(), included);
    }
    Ok(ExitStatus::Success)
}
