use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "kwalitee", version, about = "Code-quality checks wired into git")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Color mode
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage kwalitee's git hooks
    Githooks {
        #[command(subcommand)]
        action: GithooksAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum GithooksAction {
    /// Install the pre-commit, prepare-commit-msg and post-commit hooks
    Install {
        /// Overwrite hooks that already exist
        #[arg(long, short)]
        force: bool,

        #[command(flatten)]
        repo: RepoArg,
    },
    /// Remove the installed hooks
    Uninstall {
        #[command(flatten)]
        repo: RepoArg,
    },
    /// Show which hooks are installed
    Status {
        #[command(flatten)]
        repo: RepoArg,
    },
}

#[derive(Args, Debug)]
pub struct RepoArg {
    /// Repository root (defaults to the current directory)
    #[arg(long)]
    pub repo: Option<PathBuf>,
}
