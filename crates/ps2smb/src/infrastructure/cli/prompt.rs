//! Line-based terminal prompts used by `init`.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Shows `question` and returns the answer line with surrounding
    /// whitespace trimmed.  End of input yields an empty answer.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// Replays canned answers and records the questions asked.
///
/// Running out of answers behaves like pressing Enter.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.questions.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .unwrap_or_default())
    }
}

/// Asks a `(y/N)` question; only `y` or `yes` (any case) mean yes.
pub fn ask_yes_no(prompter: &mut dyn Prompter, question: &str) -> io::Result<bool> {
    let answer = prompter.ask(&format!("{question} (y/N): "))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Asks for a value showing `default` in brackets; an empty answer picks it.
pub fn ask_with_default(
    prompter: &mut dyn Prompter,
    question: &str,
    default: &str,
) -> io::Result<String> {
    let answer = prompter.ask(&format!("{question} [{default}]: "))?;
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
