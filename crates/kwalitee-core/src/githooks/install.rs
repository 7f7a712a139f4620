use std::path::PathBuf;

use crate::atomic::write_executable;
use crate::discovery::HooksDir;
use crate::error::KwaliteeError;
use crate::githooks::HookName;

/// What [`install`] did with a single hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// No file existed; the script was created.
    Installed,
    /// A file existed and was replaced because `force` was set.
    Overwritten,
    /// A file existed and was left untouched.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledHook {
    pub hook: HookName,
    pub path: PathBuf,
    pub outcome: InstallOutcome,
}

/// Per-hook results of an install, in [`HookName::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub hooks: Vec<InstalledHook>,
}

impl InstallReport {
    pub fn skipped(&self) -> impl Iterator<Item = &InstalledHook> {
        self.hooks
            .iter()
            .filter(|h| h.outcome == InstallOutcome::Skipped)
    }

    pub fn written(&self) -> impl Iterator<Item = &InstalledHook> {
        self.hooks
            .iter()
            .filter(|h| h.outcome != InstallOutcome::Skipped)
    }
}

/// Write kwalitee's hook scripts into `hooks_dir`.
///
/// A pre-existing file is kept byte-for-byte unless `force` is set, in
/// which case it is replaced. Every script written is made executable.
///
/// # Errors
///
/// Returns [`KwaliteeError::Write`] for the first hook that cannot be
/// written. Hooks earlier in the loop are not rolled back.
pub fn install(hooks_dir: &HooksDir, force: bool) -> Result<InstallReport, KwaliteeError> {
    let mut report = InstallReport::default();

    for hook in HookName::ALL {
        let path = hooks_dir.hook_path(hook);
        // symlink_metadata so a dangling symlink still counts as an existing hook
        let exists = path.symlink_metadata().is_ok();

        let outcome = if exists && !force {
            InstallOutcome::Skipped
        } else {
            write_executable(&path, &hook.script()).map_err(|source| KwaliteeError::Write {
                path: path.clone(),
                source,
            })?;
            if exists {
                InstallOutcome::Overwritten
            } else {
                InstallOutcome::Installed
            }
        };

        report.hooks.push(InstalledHook {
            hook,
            path,
            outcome,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::locate_hooks_dir;
    use std::fs;
    use tempfile::TempDir;

    fn git_repo() -> (TempDir, HooksDir) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git").join("hooks")).unwrap();
        let hooks = locate_hooks_dir(tmp.path()).unwrap();
        (tmp, hooks)
    }

    #[test]
    fn install_creates_all_hooks() {
        let (_tmp, hooks) = git_repo();

        let report = install(&hooks, false).unwrap();

        assert_eq!(report.hooks.len(), 3);
        for entry in &report.hooks {
            assert_eq!(entry.outcome, InstallOutcome::Installed);
            assert_eq!(fs::read_to_string(&entry.path).unwrap(), entry.hook.script());
        }
    }

    #[cfg(unix)]
    #[test]
    fn installed_hooks_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_tmp, hooks) = git_repo();
        install(&hooks, false).unwrap();

        for hook in HookName::ALL {
            let mode = fs::metadata(hooks.hook_path(hook))
                .unwrap()
                .permissions()
                .mode();
            assert!(mode & 0o100 != 0, "{hook} should be executable by owner");
        }
    }

    #[test]
    fn install_keeps_existing_hook_without_force() {
        let (_tmp, hooks) = git_repo();
        let pre_commit = hooks.hook_path(HookName::PreCommit);
        fs::write(&pre_commit, "").unwrap();

        let report = install(&hooks, false).unwrap();

        assert_eq!(fs::read(&pre_commit).unwrap(), b"");
        assert_eq!(report.hooks[0].outcome, InstallOutcome::Skipped);
        assert_eq!(report.skipped().count(), 1);
        assert_eq!(report.written().count(), 2);
        assert!(hooks.hook_path(HookName::PrepareCommitMsg).exists());
        assert!(hooks.hook_path(HookName::PostCommit).exists());
    }

    #[test]
    fn install_overwrites_existing_hook_with_force() {
        let (_tmp, hooks) = git_repo();
        let pre_commit = hooks.hook_path(HookName::PreCommit);
        fs::write(&pre_commit, "").unwrap();

        let report = install(&hooks, true).unwrap();

        assert_eq!(report.hooks[0].outcome, InstallOutcome::Overwritten);
        assert_eq!(
            fs::read_to_string(&pre_commit).unwrap(),
            HookName::PreCommit.script()
        );
        assert_eq!(report.skipped().count(), 0);
    }

    #[test]
    fn install_twice_skips_everything_the_second_time() {
        let (_tmp, hooks) = git_repo();
        install(&hooks, false).unwrap();

        let report = install(&hooks, false).unwrap();

        assert!(report
            .hooks
            .iter()
            .all(|h| h.outcome == InstallOutcome::Skipped));
    }

    #[test]
    fn install_reports_write_failure_with_path() {
        let (_tmp, hooks) = git_repo();
        // a directory cannot be replaced by the renamed temp file
        let blocked = hooks.hook_path(HookName::PostCommit);
        fs::create_dir(&blocked).unwrap();

        let err = install(&hooks, true).unwrap_err();

        match err {
            KwaliteeError::Write { path, .. } => assert_eq!(path, blocked),
            other => panic!("unexpected error: {other}"),
        }
        assert!(blocked.is_dir());

        let mut left: Vec<String> = fs::read_dir(hooks.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left, ["post-commit", "pre-commit", "prepare-commit-msg"]);
    }
}
