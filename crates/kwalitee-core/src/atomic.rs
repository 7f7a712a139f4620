//! Atomic replacement of hook scripts.
//!
//! A hook is first written to a temporary file inside the hook directory and
//! then persisted over the target path. The rename happens on the same
//! filesystem, so git never observes a partially written script.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Permission bits given to every script written by [`write_executable`].
pub const HOOK_MODE: u32 = 0o755;

/// Atomically write `contents` to `path` and mark it executable.
///
/// The parent directory of `path` must already exist.
pub fn write_executable(path: &Path, contents: &str) -> io::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "hook path has no parent"))?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(HOOK_MODE))?;
    }

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
