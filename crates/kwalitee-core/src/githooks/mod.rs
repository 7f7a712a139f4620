//! Installation and removal of kwalitee's git hooks.
//!
//! Three hooks are managed: `pre-commit`, `prepare-commit-msg` and
//! `post-commit`. Each one is a small shell script in `.git/hooks/` that
//! hands control to `kwalitee hook <name>` when git runs it.
//!
//! Operations walk the hooks in [`HookName::ALL`] order and stop at the
//! first I/O failure. Hooks handled before the failure stay as they are.

pub mod hook;
pub mod install;
pub mod status;
pub mod uninstall;

pub use hook::HookName;
pub use install::{install, InstallOutcome, InstallReport};
pub use status::{status, HookState, HookStatus};
pub use uninstall::{uninstall, UninstallOutcome, UninstallReport};
