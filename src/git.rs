use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};

use tracing::debug;

use crate::error::GitError;

pub const NOT_IN_REPO_HINT: &str = "not in a git repository - cd into a repo first";
pub const NOTHING_TO_COMMIT_HINT: &str =
    "nothing to commit - edit some files before running autopush";

/// Captured result of one successful git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs git with the given arguments and waits for it to exit.
pub trait GitRunner {
    fn run(&self, args: &[&str]) -> Result<GitOutput, GitError>;
}

/// The `git` binary on `PATH`, run inside a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> Result<GitOutput, GitError> {
        debug!(args = %args.join(" "), dir = %self.workdir.display(), "running git");
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| GitError::Spawn {
                args: args.join(" "),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        debug!(code = ?output.status.code(), "git exited");

        if output.status.success() {
            Ok(GitOutput {
                code: output.status.code().unwrap_or_default(),
                stdout,
                stderr,
            })
        } else {
            // `git commit` reports "nothing to commit" on stdout
            let stderr = if stderr.trim().is_empty() { stdout } else { stderr };
            let hint = suggest_hint_for_git_error(&stderr, args);
            Err(GitError::Failed {
                args: args.join(" "),
                code: output.status.code(),
                stderr,
                hint,
            })
        }
    }
}

/// True when `dir` holds a `.git` directory or gitfile.
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}

pub(crate) fn suggest_hint_for_git_error(stderr: &str, args: &[&str]) -> String {
    let stderr_lower = stderr.to_lowercase();
    let cmd = args.first().copied().unwrap_or("");

    if stderr_lower.contains("not a git repository") {
        return format!("\n  hint: {}", NOT_IN_REPO_HINT);
    }

    if cmd == "commit"
        && (stderr_lower.contains("nothing to commit")
            || stderr_lower.contains("no changes added to commit")
            || stderr_lower.contains("nothing added to commit"))
    {
        return format!("\n  hint: {}", NOTHING_TO_COMMIT_HINT);
    }

    if cmd == "commit" && stderr_lower.contains("please tell me who you are") {
        return "\n  hint: set user.name and user.email with 'git config'".to_string();
    }

    if cmd == "push" {
        if stderr_lower.contains("rejected") {
            return "\n  hint: remote has new commits - answer 'y' to the pull question next time"
                .to_string();
        }
        if stderr_lower.contains("src refspec") {
            return "\n  hint: there is no commit to push on this branch yet".to_string();
        }
    }

    if cmd == "pull" {
        if stderr_lower.contains("couldn't find remote ref") {
            return "\n  hint: the branch does not exist on the remote yet".to_string();
        }
        if stderr_lower.contains("conflict") {
            return "\n  hint: resolve merge conflicts, then commit the resolution".to_string();
        }
        if stderr_lower.contains("divergent branches") {
            return "\n  hint: choose a strategy with 'git config pull.rebase false' (merge) or 'true' (rebase)".to_string();
        }
    }

    if (cmd == "push" || cmd == "pull")
        && (stderr_lower.contains("could not resolve host")
            || stderr_lower.contains("could not read from remote")
            || stderr_lower.contains("network"))
    {
        return "\n  hint: check your network connection and the remote URL".to_string();
    }

    if stderr_lower.contains("permission denied") {
        return "\n  hint: check file permissions or your access to the remote".to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::nothing_to_commit(&["commit", "-m", "x"], "nothing to commit, working tree clean", NOTHING_TO_COMMIT_HINT)]
    #[case::rejected(&["push", "origin", "HEAD:main"], " ! [rejected]  main -> main (fetch first)", "pull question")]
    #[case::missing_ref(&["pull", "origin", "main"], "fatal: couldn't find remote ref main", "does not exist on the remote")]
    #[case::conflict(&["pull", "origin", "main"], "CONFLICT (content): Merge conflict in a.txt", "resolve merge conflicts")]
    #[case::offline(&["push", "origin", "HEAD:main"], "ssh: Could not resolve host: example.com", "network")]
    #[case::not_a_repo(&["status"], "fatal: not a git repository", NOT_IN_REPO_HINT)]
    fn hints_match_known_failures(
        #[case] args: &[&str],
        #[case] stderr: &str,
        #[case] expected: &str,
    ) {
        let hint = suggest_hint_for_git_error(stderr, args);
        assert!(hint.starts_with("\n  hint: "), "no hint for {stderr:?}");
        assert!(hint.contains(expected), "unexpected hint {hint:?}");
    }

    #[test]
    fn unknown_failure_has_no_hint() {
        assert_eq!(suggest_hint_for_git_error("boom", &["add", "."]), "");
    }

    #[test]
    fn nothing_to_commit_hint_is_commit_only() {
        assert_eq!(suggest_hint_for_git_error("nothing to commit", &["status"]), "");
    }

    #[test]
    fn repository_detection_looks_for_dot_git() {
        let dir = TempDir::new().unwrap();
        assert!(!is_repository(dir.path()));

        dir.child(".git").create_dir_all().unwrap();
        assert!(is_repository(dir.path()));
    }

    #[test]
    fn gitfile_counts_as_repository() {
        let dir = TempDir::new().unwrap();
        dir.child(".git").write_str("gitdir: ../elsewhere\n").unwrap();
        assert!(is_repository(dir.path()));
    }

    #[test]
    fn system_git_maps_non_zero_exit_to_failed() {
        let dir = TempDir::new().unwrap();
        let git = SystemGit::new(dir.path());
        let err = git.run(&["rev-parse", "--verify", "no-such-ref"]).unwrap_err();
        match err {
            GitError::Failed { args, code, .. } => {
                assert_eq!(args, "rev-parse --verify no-such-ref");
                assert_ne!(code, Some(0));
            }
            GitError::Spawn { .. } => panic!("git should be installed"),
        }
    }

    #[test]
    fn failure_without_stderr_keeps_stdout() {
        let dir = TempDir::new().unwrap();
        let git = SystemGit::new(dir.path());
        git.run(&["init", "--quiet"]).unwrap();
        git.run(&["config", "user.name", "Test"]).unwrap();
        git.run(&["config", "user.email", "test@example.com"]).unwrap();

        let err = git.run(&["commit", "-m", "empty"]).unwrap_err();
        assert!(err.stderr().contains("nothing to commit"), "{err}");
        assert!(err.to_string().contains(NOTHING_TO_COMMIT_HINT));
    }

    #[test]
    fn system_git_captures_stdout() {
        let dir = TempDir::new().unwrap();
        let output = SystemGit::new(dir.path()).run(&["--version"]).unwrap();
        assert_eq!(output.code, 0);
        assert!(output.stdout.starts_with("git version"));
    }
}
