use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "autopush",
    about = "Stage, commit, pull and push the current git repository in one go",
    version
)]
pub struct Cli {
    /// Describe each step and exit
    #[arg(long)]
    pub explain: bool,

    /// Remote used for pull and push
    #[arg(short, long, value_name = "REMOTE", default_value = "origin")]
    pub remote: String,

    /// Branch pulled before pushing
    #[arg(long, value_name = "BRANCH", default_value = "main")]
    pub pull_branch: String,

    /// Accept the default answer to every question
    #[arg(short, long)]
    pub yes: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Commit message; words are joined with spaces
    #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}
