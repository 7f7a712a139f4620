use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::discovery::HooksDir;
use crate::error::KwaliteeError;
use crate::githooks::HookName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// The file matches the script kwalitee would install.
    Installed,
    /// Some other file occupies the hook path.
    Foreign,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookStatus {
    pub hook: HookName,
    pub path: PathBuf,
    pub state: HookState,
}

/// Inspect every managed hook path without modifying anything.
pub fn status(hooks_dir: &HooksDir) -> Result<Vec<HookStatus>, KwaliteeError> {
    HookName::ALL
        .into_iter()
        .map(|hook| {
            let path = hooks_dir.hook_path(hook);
            let state = hook_state(hook, &path)?;
            Ok(HookStatus { hook, path, state })
        })
        .collect()
}

fn hook_state(hook: HookName, path: &Path) -> Result<HookState, KwaliteeError> {
    match fs::read(path) {
        Ok(content) if content == hook.script().as_bytes() => Ok(HookState::Installed),
        Ok(_) => Ok(HookState::Foreign),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HookState::Missing),
        // a directory or unreadable file still blocks the hook
        Err(_) if path.symlink_metadata().is_ok() => Ok(HookState::Foreign),
        Err(source) => Err(KwaliteeError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
