use anyhow::Result;

use super::shared;
use crate::cli::{CleanCommand, ExitStatus};
use crate::compiler::SystemMsgfmt;
use crate::diagnostics::ConsoleDiagnostics;
use crate::hook::{BuildHook, PACKAGE_TARGET};

/// Drive the cleanup pass. Removal failures surface as warnings, never as a
/// failing exit status.
pub fn clean(cmd: CleanCommand) -> Result<ExitStatus> {
    let mut config = shared::resolve_config(&cmd.common)?;
    config.force_clean = config.force_clean || cmd.force;

    let compiler = SystemMsgfmt::new();
    let diagnostics = ConsoleDiagnostics::new(cmd.common.verbose);
    let hook = BuildHook::new(
        &cmd.common.root,
        PACKAGE_TARGET,
        config,
        &compiler,
        &diagnostics,
    );

    hook.clean(&[]);
    Ok(ExitStatus::Success)
}
