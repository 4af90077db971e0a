// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Player console I/O.
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors reading the player answers.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The console input or output failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),
    /// The player entered a value that is not an integer.
    #[error("Invalid integer {0:?}")]
    InvalidInteger(String),
    /// The input ended while waiting for an answer.
    #[error("Unexpected end of input")]
    EndOfInput,
}

/// Asks the player questions and shows messages.
pub trait Prompter {
    /// Prompts for an integer, a non integer answer is an error.
    fn read_int(&mut self, prompt: &str) -> Result<i64, PromptError>;

    /// Prompts for a Y or N answer until the player enters one of them.
    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError>;

    /// Shows a line of text.
    fn show(&mut self, line: &str) -> Result<(), PromptError>;
}

/// A line oriented console.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Creates a console on the process standard input and output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console that reads from `input` and writes to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Consumes the console and returns its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the prompt and reads the next line without surrounding whitespace.
    fn prompt(&mut self, prompt: &str) -> Result<&str, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(PromptError::EndOfInput);
        }

        Ok(self.line.trim())
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn read_int(&mut self, prompt: &str) -> Result<i64, PromptError> {
        let text = self.prompt(prompt)?;
        text.parse::<i64>()
            .map_err(|_| PromptError::InvalidInteger(text.to_string()))
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.prompt(prompt)?.to_uppercase();
            match answer.as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => self.show("ERROR! Only 'Y' and 'N' allowed as input!")?,
            }
        }
    }

    fn show(&mut self, line: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }
}
