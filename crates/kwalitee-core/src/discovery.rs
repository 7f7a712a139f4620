use std::path::{Path, PathBuf};

use crate::error::KwaliteeError;
use crate::githooks::HookName;

/// Location of git's hook directory, relative to the repository root.
pub const HOOK_PATH: &str = ".git/hooks";

/// A hook directory that was verified to exist when it was located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HooksDir {
    repo_root: PathBuf,
    path: PathBuf,
}

impl HooksDir {
    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the script git runs for `hook`.
    pub fn hook_path(&self, hook: HookName) -> PathBuf {
        self.path.join(hook.as_str())
    }
}

/// Locate `.git/hooks` directly under `repo_root`.
///
/// Parent directories are not searched and nothing is created: a missing
/// hook directory means `repo_root` is not a usable git repository.
pub fn locate_hooks_dir(repo_root: &Path) -> Result<HooksDir, KwaliteeError> {
    let path = repo_root.join(HOOK_PATH);

    if !path.is_dir() {
        return Err(KwaliteeError::NotAGitRepository {
            path: repo_root.to_path_buf(),
        });
    }

    Ok(HooksDir {
        repo_root: repo_root.to_path_buf(),
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn locate_finds_hooks_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(HOOK_PATH)).unwrap();

        let hooks = locate_hooks_dir(tmp.path()).unwrap();
        assert_eq!(hooks.repo_root(), tmp.path());
        assert_eq!(hooks.path(), tmp.path().join(".git").join("hooks"));
        assert_eq!(
            hooks.hook_path(HookName::PrepareCommitMsg),
            tmp.path().join(".git/hooks/prepare-commit-msg")
        );
    }

    #[test]
    fn locate_fails_outside_git_repo() {
        let tmp = TempDir::new().unwrap();
        let err = locate_hooks_dir(tmp.path()).unwrap_err();
        match err {
            KwaliteeError::NotAGitRepository { path } => assert_eq!(path, tmp.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn locate_fails_when_hooks_dir_missing() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        assert!(locate_hooks_dir(tmp.path()).is_err());
        assert!(!tmp.path().join(HOOK_PATH).exists());
    }

    #[test]
    fn locate_rejects_hooks_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        fs::write(tmp.path().join(HOOK_PATH), "").unwrap();
        assert!(locate_hooks_dir(tmp.path()).is_err());
    }
}
