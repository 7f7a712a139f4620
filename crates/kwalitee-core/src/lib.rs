pub mod atomic;
pub mod discovery;
pub mod error;
pub mod githooks;

pub use discovery::{locate_hooks_dir, HooksDir};
pub use error::KwaliteeError;
pub use githooks::{install, status, uninstall, HookName};
