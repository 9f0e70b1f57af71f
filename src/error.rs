use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

/// Failure of a single git invocation.
#[derive(Debug, Error)]
pub enum GitError {
    #[error("failed to execute git {args} - is git installed?")]
    Spawn {
        args: String,
        #[source]
        source: io::Error,
    },

    #[error("git {args} failed:{}{hint}", format_stderr(.stderr))]
    Failed {
        args: String,
        code: Option<i32>,
        stderr: String,
        hint: String,
    },
}

impl GitError {
    /// Error text of the failed command, empty for spawn errors.
    pub fn stderr(&self) -> &str {
        match self {
            GitError::Spawn { .. } => "",
            GitError::Failed { stderr, .. } => stderr,
        }
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            GitError::Spawn { .. } => None,
            GitError::Failed { code, .. } => *code,
        }
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n  {}", trimmed)
    }
}

/// Pipeline steps that invoke git, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Status,
    Stage,
    Commit,
    Pull,
    Push,
}

impl Step {
    pub fn as_str(self) -> &'static str {
        match self {
            Step::Status => "status",
            Step::Stage => "stage",
            Step::Commit => "commit",
            Step::Pull => "pull",
            Step::Push => "push",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("{} is not a git repository - cd into a repo first", .0.display())]
    NotARepository(PathBuf),

    #[error("{step} step failed")]
    Step {
        step: Step,
        #[source]
        source: GitError,
    },

    #[error("failed to read answer from the terminal")]
    Prompt(#[from] io::Error),
}

impl SequenceError {
    pub fn step(step: Step, source: GitError) -> Self {
        SequenceError::Step { step, source }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SequenceError::NotARepository(_) => exit_codes::NOT_A_REPOSITORY,
            SequenceError::Step { step, .. } => match step {
                Step::Status => exit_codes::STATUS_FAILED,
                Step::Stage => exit_codes::STAGE_FAILED,
                Step::Commit => exit_codes::COMMIT_FAILED,
                Step::Push => exit_codes::PUSH_FAILED,
                // pull failures are downgraded to warnings and never surface here
                Step::Pull => exit_codes::FAILURE,
            },
            SequenceError::Prompt(_) => exit_codes::FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failed(stderr: &str, hint: &str) -> GitError {
        GitError::Failed {
            args: "commit -m msg".to_string(),
            code: Some(1),
            stderr: stderr.to_string(),
            hint: hint.to_string(),
        }
    }

    #[test]
    fn failed_message_includes_trimmed_stderr_and_hint() {
        let err = failed("  nothing to commit\n", "\n  hint: stage something");
        assert_eq!(
            err.to_string(),
            "git commit -m msg failed:\n  nothing to commit\n  hint: stage something"
        );
    }

    #[test]
    fn failed_message_without_stderr_stays_on_one_line() {
        assert_eq!(failed("\n", "").to_string(), "git commit -m msg failed:");
    }

    #[test]
    fn exit_codes_differ_per_fatal_step() {
        let codes: Vec<i32> = [Step::Status, Step::Stage, Step::Commit, Step::Push]
            .into_iter()
            .map(|step| SequenceError::step(step, failed("", "")).exit_code())
            .collect();
        assert_eq!(
            codes,
            vec![
                exit_codes::STATUS_FAILED,
                exit_codes::STAGE_FAILED,
                exit_codes::COMMIT_FAILED,
                exit_codes::PUSH_FAILED,
            ]
        );
        assert_eq!(
            SequenceError::NotARepository(PathBuf::from("/tmp")).exit_code(),
            exit_codes::NOT_A_REPOSITORY
        );
    }
}
