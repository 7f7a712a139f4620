use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KwaliteeError {
    #[error("Not a git repository (no .git/hooks directory): {}", .path.display())]
    NotAGitRepository { path: PathBuf },

    #[error("Failed to write hook {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete hook {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read hook {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
