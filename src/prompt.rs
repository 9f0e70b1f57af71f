use std::io::{self, BufRead, Write};

use dialoguer::Input;

/// Asks the user a free-text question. An empty answer means "use the default".
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String>;
}

/// Interactive prompt on the terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(io::Error::other)
    }
}

/// Reads one line per question, for piped stdin. End of input answers "".
#[derive(Debug)]
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Answers every question with the default (`--yes`).
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        println!("{}: (default)", prompt);
        Ok(String::new())
    }
}

/// Anything but an explicit "n"/"no" means yes.
pub fn wants_pull(answer: &str) -> bool {
    !matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

pub fn push_branch(answer: &str, default: &str) -> String {
    match answer.trim() {
        "" => default.to_string(),
        branch => branch.to_string(),
    }
}
