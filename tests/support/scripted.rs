use anyhow::Result;
use std::collections::VecDeque;

use pizza_split::terminal::Terminal;

/// Terminal that answers prompts from a fixed script and records every
/// prompt it was shown.
pub struct ScriptedTerminal {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedTerminal {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Terminal for ScriptedTerminal {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
