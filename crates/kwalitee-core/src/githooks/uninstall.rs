use std::fs;
use std::io;
use std::path::PathBuf;

use crate::discovery::HooksDir;
use crate::error::KwaliteeError;
use crate::githooks::HookName;

/// What [`uninstall`] did with a single hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOutcome {
    Removed,
    NotPresent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedHook {
    pub hook: HookName,
    pub path: PathBuf,
    pub outcome: UninstallOutcome,
}

/// Per-hook results of an uninstall, in [`HookName::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    pub hooks: Vec<RemovedHook>,
}

impl UninstallReport {
    pub fn removed(&self) -> impl Iterator<Item = &RemovedHook> {
        self.hooks
            .iter()
            .filter(|h| h.outcome == UninstallOutcome::Removed)
    }
}

/// Delete the file at every managed hook path in `hooks_dir`.
///
/// A hook that does not exist is reported as
/// [`UninstallOutcome::NotPresent`], so running this twice is harmless.
///
/// # Errors
///
/// Returns [`KwaliteeError::Delete`] for the first hook that exists but
/// cannot be removed.
pub fn uninstall(hooks_dir: &HooksDir) -> Result<UninstallReport, KwaliteeError> {
    let mut report = UninstallReport::default();

    for hook in HookName::ALL {
        let path = hooks_dir.hook_path(hook);

        let outcome = match fs::remove_file(&path) {
            Ok(()) => UninstallOutcome::Removed,
            Err(e) if e.kind() == io::ErrorKind::NotFound => UninstallOutcome::NotPresent,
            Err(source) => return Err(KwaliteeError::Delete { path, source }),
        };

        report.hooks.push(RemovedHook {
            hook,
            path,
            outcome,
        });
    }

    Ok(report)
}
