use std::fmt;

/// Marker line identifying a script written by kwalitee.
pub const HOOK_MARKER: &str = "# Installed by kwalitee githooks";

/// Script body for every hook; `{hook}` is replaced with the hook name.
const HOOK_TEMPLATE: &str = "#!/bin/sh\n{marker}\nexec kwalitee hook {hook} \"$@\"\n";

/// Git hooks managed by kwalitee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    PreCommit,
    PrepareCommitMsg,
    PostCommit,
}

impl HookName {
    /// Every managed hook, in the order operations visit them.
    pub const ALL: [HookName; 3] = [
        HookName::PreCommit,
        HookName::PrepareCommitMsg,
        HookName::PostCommit,
    ];

    /// The file name git looks for in the hook directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::PreCommit => "pre-commit",
            HookName::PrepareCommitMsg => "prepare-commit-msg",
            HookName::PostCommit => "post-commit",
        }
    }

    /// Render the shell script installed for this hook.
    ///
    /// Arguments from git are forwarded untouched; `prepare-commit-msg`
    /// receives the path of the message file that way.
    pub fn script(&self) -> String {
        HOOK_TEMPLATE
            .replace("{marker}", HOOK_MARKER)
            .replace("{hook}", self.as_str())
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
