mod cli;
mod commands;
mod error;
mod exit_codes;
mod git;
mod logging;
mod message;
mod prompt;

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use commands::{Plan, run_auto_push};
use error::SequenceError;
use git::SystemGit;
use prompt::{DefaultsPrompter, LinePrompter, TerminalPrompter};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        for cause in err.chain() {
            eprintln!("error: {}", cause);
        }
        let code = err
            .downcast_ref::<SequenceError>()
            .map_or(exit_codes::FAILURE, SequenceError::exit_code);
        std::process::exit(code);
    }
    std::process::exit(exit_codes::OK);
}

fn run(cli: Cli) -> Result<()> {
    if cli.explain {
        print_explanations();
        return Ok(());
    }

    let workdir = std::env::current_dir().context("failed to read the current directory")?;
    let git = SystemGit::new(&workdir);
    let plan = Plan {
        remote: cli.remote,
        pull_branch: cli.pull_branch,
        ..Plan::new(message::resolve_message(&cli.message))
    };
    debug!(?plan, "resolved plan");

    if cli.yes {
        run_auto_push(&workdir, &git, &mut DefaultsPrompter, &plan)?;
    } else if io::stdin().is_terminal() {
        run_auto_push(&workdir, &git, &mut TerminalPrompter, &plan)?;
    } else {
        let mut prompter = LinePrompter::new(io::stdin().lock(), io::stdout());
        run_auto_push(&workdir, &git, &mut prompter, &plan)?;
    }
    Ok(())
}

fn print_explanations() {
    println!("autopush runs these git steps in the current directory, in order:");
    println!();
    println!("  check  – stop unless the directory contains .git (exit code 3).");
    println!("  status – `git status`; a failure stops the run (exit code 4).");
    println!("  stage  – `git add .`; a failure stops the run (exit code 5).");
    println!("  commit – `git commit -m <message>`; the message is the words you pass,");
    println!("           or \"Auto commit at YYYY-MM-DD HH:MM:SS\" (exit code 6).");
    println!("  pull   – asks first (default yes), then `git pull <remote> <pull-branch>`;");
    println!("           a failure is only a warning.");
    println!("  push   – asks for a branch (default main), then `git push <remote> HEAD:<branch>`");
    println!("           (exit code 7 on failure).");
    println!();
    println!("Use --yes to accept every default without being asked.");
}
