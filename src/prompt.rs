use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use tracing::error;

pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

#[derive(Debug, Default, Clone)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            println!("{message} [y/N] y");
            return true;
        }

        print!("{message} [y/N] ");
        if let Err(err) = io::stdout().flush() {
            error!("failed to flush prompt: {err}");
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                error!("failed to read confirmation: {err}");
                false
            }
        }
    }

    fn alert(&self, message: &str) {
        println!("{message}");
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Confirm(String),
    Alert(String),
}

/// Answers confirmations from a queue, then declines.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    dialogs: Mutex<Vec<Dialog>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            dialogs: Mutex::new(Vec::new()),
        }
    }

    pub fn accepting() -> Self {
        Self::new([true])
    }

    pub fn declining() -> Self {
        Self::new([false])
    }

    pub fn dialogs(&self) -> Vec<Dialog> {
        self.dialogs
            .lock()
            .map(|dialogs| dialogs.clone())
            .unwrap_or_default()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.dialogs()
            .into_iter()
            .filter_map(|dialog| match dialog {
                Dialog::Alert(message) => Some(message),
                Dialog::Confirm(_) => None,
            })
            .collect()
    }

    fn record(&self, dialog: Dialog) {
        if let Ok(mut dialogs) = self.dialogs.lock() {
            dialogs.push(dialog);
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.record(Dialog::Confirm(message.to_string()));
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop_front())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.record(Dialog::Alert(message.to_string()));
    }
}
