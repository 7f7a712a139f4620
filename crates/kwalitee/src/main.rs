mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, ColorMode, Commands, GithooksAction};
use output::{OutputMode, Reporter};

fn main() {
    let cli = Cli::parse();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Human
    };

    match cli.color {
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Auto => {}
    }

    let mut reporter = Reporter::new(mode);

    let success = match cli.command {
        Commands::Githooks { action } => match action {
            GithooksAction::Install { force, repo } => {
                commands::githooks::run_install(force, repo.repo.as_deref(), &mut reporter)
            }
            GithooksAction::Uninstall { repo } => {
                commands::githooks::run_uninstall(repo.repo.as_deref(), &mut reporter)
            }
            GithooksAction::Status { repo } => {
                commands::githooks::run_status(repo.repo.as_deref(), &mut reporter)
            }
        },
        Commands::Completions { shell } => commands::completions::run_completions(shell),
    };

    reporter.finish();

    if !success {
        std::process::exit(1);
    }
}
