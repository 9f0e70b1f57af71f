use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{SequenceError, Step};
use crate::git::{GitOutput, GitRunner, is_repository};
use crate::prompt::{Prompter, push_branch, wants_pull};

pub const DEFAULT_BRANCH: &str = "main";
pub const PULL_PROMPT: &str = "Pull remote changes first? (y/n, default y)";
pub const PUSH_PROMPT: &str = "Branch to push (default main)";

const RULE_WIDTH: usize = 50;

/// Parameters of one run, fixed before any git command is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub message: String,
    pub remote: String,
    pub pull_branch: String,
    pub default_push_branch: String,
}

impl Plan {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            remote: "origin".to_string(),
            pull_branch: DEFAULT_BRANCH.to_string(),
            default_push_branch: DEFAULT_BRANCH.to_string(),
        }
    }
}

/// Runs status, add, commit, the optional pull and the push, in that order.
///
/// The first three steps abort the run on failure. A failed pull only prints
/// a warning. A failed push is reported and returned after the
/// partial-failure notice.
pub fn run_auto_push<G, P>(
    workdir: &Path,
    git: &G,
    prompter: &mut P,
    plan: &Plan,
) -> Result<(), SequenceError>
where
    G: GitRunner,
    P: Prompter,
{
    println!("→ Working directory: {}", workdir.display());
    if !is_repository(workdir) {
        eprintln!("✗ Not a git repository");
        return Err(SequenceError::NotARepository(workdir.to_path_buf()));
    }

    println!("→ Commit message: {}", plan.message);
    print_rule();

    println!("→ Checking status...");
    let status = run_step(git, Step::Status, &["status"])?;
    print_output(&status);

    print_section_break();
    println!("→ Staging all changes...");
    run_step(git, Step::Stage, &["add", "."])?;
    println!("✓ Changes staged");

    print_section_break();
    println!("→ Committing: {}", plan.message);
    let commit = run_step(git, Step::Commit, &["commit", "-m", plan.message.as_str()])?;
    println!("✓ Commit created");
    print_output(&commit);

    print_section_break();
    let answer = prompter.ask(PULL_PROMPT)?;
    if wants_pull(&answer) {
        pull(git, plan);
    } else {
        info!("pull skipped");
    }

    print_section_break();
    let answer = prompter.ask(PUSH_PROMPT)?;
    let branch = push_branch(&answer, &plan.default_push_branch);
    let refspec = format!("HEAD:{}", branch);

    println!("→ Pushing to {}/{}...", plan.remote, branch);
    match run_step(git, Step::Push, &["push", plan.remote.as_str(), refspec.as_str()]) {
        Ok(output) => {
            println!("✓ Pushed successfully");
            print_output(&output);
            println!();
            println!("✓ All steps completed.");
            Ok(())
        }
        Err(err) => {
            eprintln!("⚠ Some steps failed - check the repository manually.");
            Err(err)
        }
    }
}

fn pull<G: GitRunner>(git: &G, plan: &Plan) {
    println!("→ Pulling from {}/{}...", plan.remote, plan.pull_branch);
    debug!(step = %Step::Pull, "starting step");
    match git.run(&["pull", plan.remote.as_str(), plan.pull_branch.as_str()]) {
        Ok(_) => println!("✓ Pull complete"),
        Err(err) => {
            warn!(error = %err, "pull failed, continuing");
            eprintln!("⚠ Pull failed: {}", err);
            eprintln!("  Continuing with the push anyway...");
        }
    }
}

fn run_step<G: GitRunner>(git: &G, step: Step, args: &[&str]) -> Result<GitOutput, SequenceError> {
    debug!(%step, "starting step");
    git.run(args).map_err(|source| {
        debug!(%step, code = ?source.code(), "step failed");
        eprintln!("✗ {} failed: {}", step, source.stderr().trim());
        SequenceError::step(step, source)
    })
}

fn print_output(output: &GitOutput) {
    debug!(code = output.code, "git succeeded");
    for text in [&output.stdout, &output.stderr] {
        let text = text.trim_end();
        if !text.is_empty() {
            println!("{}", text);
        }
    }
}

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_section_break() {
    println!();
    print_rule();
}
