//! Console menu for managing products
//!
//! This module parses menu choices into commands, runs each command against
//! the product repository and renders the outcome as a [`Reply`].

pub mod command;
pub mod product;
pub mod reply;

pub use command::{Command, MenuCommand};
pub use reply::Reply;

use crate::error::{InputError, SessionError};

/// Line-oriented console the commands prompt through
pub trait Console {
    /// Print `question` and read one line of input, without its line ending
    fn ask(&mut self, question: &str) -> Result<String, SessionError>;
}

/// Parse a product identifier typed by the user
pub fn parse_id(input: &str) -> Result<i32, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|source| InputError::InvalidId {
            input: trimmed.to_string(),
            source,
        })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::Console;
    use crate::error::SessionError;

    /// Console fed from a fixed list of answers, recording every prompt
    pub struct ScriptedConsole {
        answers: VecDeque<String>,
        pub prompts: Vec<String>,
    }

    impl ScriptedConsole {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn ask(&mut self, question: &str) -> Result<String, SessionError> {
            self.prompts.push(question.to_string());
            self.answers.pop_front().ok_or(SessionError::InputClosed)
        }
    }
}
