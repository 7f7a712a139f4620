//! CLI handler for `kwalitee githooks` subcommands.
//!
//! Handles:
//! - `kwalitee githooks install [--force] [--repo <path>]`
//! - `kwalitee githooks uninstall [--repo <path>]`
//! - `kwalitee githooks status [--repo <path>]`

use std::env;
use std::path::Path;

use kwalitee_core::discovery::{locate_hooks_dir, HooksDir};
use kwalitee_core::githooks::{
    install, status, uninstall, HookState, InstallOutcome, UninstallOutcome,
};

use crate::output::Reporter;

/// Install the hooks, keeping existing files unless `force` is set.
///
/// Returns `true` on success, `false` on failure.
pub fn run_install(force: bool, repo: Option<&Path>, reporter: &mut Reporter) -> bool {
    let hooks_dir = match resolve_hooks_dir(repo, reporter) {
        Some(h) => h,
        None => return false,
    };

    reporter.section("Installing git hooks");

    match install(&hooks_dir, force) {
        Ok(report) => {
            for entry in &report.hooks {
                let path = entry.path.display().to_string();
                match entry.outcome {
                    InstallOutcome::Installed => {
                        reporter.success_with_details(&format!("Installed {}", entry.hook), &path)
                    }
                    InstallOutcome::Overwritten => {
                        reporter.success_with_details(&format!("Overwrote {}", entry.hook), &path)
                    }
                    InstallOutcome::Skipped => reporter.warning(&format!(
                        "Hook {} already exists at {path}, skipping (use --force to overwrite)",
                        entry.hook
                    )),
                }
            }
            true
        }
        Err(e) => {
            reporter.error(&format!("Failed to install hooks: {e}"));
            false
        }
    }
}

/// Remove the hooks. Missing hooks are not an error.
pub fn run_uninstall(repo: Option<&Path>, reporter: &mut Reporter) -> bool {
    let hooks_dir = match resolve_hooks_dir(repo, reporter) {
        Some(h) => h,
        None => return false,
    };

    reporter.section("Removing git hooks");

    match uninstall(&hooks_dir) {
        Ok(report) => {
            for entry in &report.hooks {
                let path = entry.path.display().to_string();
                match entry.outcome {
                    UninstallOutcome::Removed => {
                        reporter.success_with_details(&format!("Removed {}", entry.hook), &path)
                    }
                    UninstallOutcome::NotPresent => {
                        reporter.info_with_details(&format!("{} not installed", entry.hook), &path)
                    }
                }
            }
            if report.removed().next().is_none() {
                reporter.info("No hooks removed");
            }
            true
        }
        Err(e) => {
            reporter.error(&format!("Failed to remove hooks: {e}"));
            false
        }
    }
}

pub fn run_status(repo: Option<&Path>, reporter: &mut Reporter) -> bool {
    let hooks_dir = match resolve_hooks_dir(repo, reporter) {
        Some(h) => h,
        None => return false,
    };

    reporter.section("Git hooks");

    match status(&hooks_dir) {
        Ok(statuses) => {
            for entry in &statuses {
                let state = match entry.state {
                    HookState::Installed => "installed",
                    HookState::Foreign => "present (not installed by kwalitee)",
                    HookState::Missing => "missing",
                };
                reporter.info_with_details(
                    &format!("{}: {state}", entry.hook),
                    &entry.path.display().to_string(),
                );
            }
            true
        }
        Err(e) => {
            reporter.error(&format!("Failed to read hooks: {e}"));
            false
        }
    }
}

/// Locates `.git/hooks` under `repo`, or under the current directory.
fn resolve_hooks_dir(repo: Option<&Path>, reporter: &mut Reporter) -> Option<HooksDir> {
    let root = match repo {
        Some(path) => path.to_path_buf(),
        None => match env::current_dir() {
            Ok(c) => c,
            Err(e) => {
                reporter.error(&format!("Cannot get current directory: {e}"));
                return None;
            }
        },
    };

    match locate_hooks_dir(&root) {
        Ok(h) => Some(h),
        Err(e) => {
            reporter.error(&format!("{e}"));
            None
        }
    }
}
