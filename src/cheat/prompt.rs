//! Interactive input as an injectable capability, so the add and delete
//! flows can be driven by scripted input in tests (or by piped stdin).

use crate::error::{CheatError, Result};
use std::io::{self, BufRead, Write};

/// A source of one-line answers to labeled questions.
pub trait Prompt {
    /// Ask for one line of input; the answer is trimmed of surrounding
    /// whitespace.
    fn ask(&mut self, label: &str) -> Result<String>;
}

/// Production prompt: prints `"{label}: "` and reads a line from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, label: &str) -> Result<String> {
        print!("{}: ", label);
        io::stdout().flush().map_err(CheatError::Io)?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(CheatError::Io)?;
        Ok(line.trim().to_string())
    }
}


#[cfg(test)]
mod tests {
    use super::scripted::ScriptedPrompt;
    use super::*;

    #[test]
    fn scripted_prompt_trims_and_records_labels() {
        let mut prompt = ScriptedPrompt::new(["  git  ", "yes"]);
        assert_eq!(prompt.ask("Tool").unwrap(), "git");
        assert_eq!(prompt.ask("Delete these entries? (yes/no)").unwrap(), "yes");
        assert_eq!(prompt.asked.len(), 2);
        assert!(prompt.ask("extra").is_err());
    }
}
