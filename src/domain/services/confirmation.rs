//! Confirmation gate for destructive operations
//!
//! Writes the descriptor's warning, reads exactly one line, and proceeds only
//! if that line is `y` or `Y`. A gate resolves once; asking again returns the
//! first answer without touching the streams.

use std::io::{self, BufRead, Write};

use crate::domain::entities::CommandDescriptor;
use crate::domain::value_objects::MessageKind;
use crate::error::{PxfError, PxfResult};

/// Outcome of a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Pending,
    Resolved(Confirmation),
}

/// Interpret one line of user input
///
/// Only trailing CR/LF is stripped; anything other than a case-folded `y`
/// cancels.
pub fn parse_answer(line: &str) -> Confirmation {
    let answer = line.trim_end_matches(['\r', '\n']);
    if answer.to_lowercase() == "y" {
        Confirmation::Proceed
    } else {
        Confirmation::Cancel
    }
}

/// Synchronous yes/no prompt over arbitrary streams
pub struct ConfirmationGate<R, W> {
    input: R,
    output: W,
    state: GateState,
}

impl ConfirmationGate<io::StdinLock<'static>, io::Stderr> {
    /// Gate reading from stdin and prompting on stderr
    ///
    /// stdout carries only the plan and the summary, so `--json` output stays
    /// parseable.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConfirmationGate<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: GateState::Pending,
        }
    }

    /// Prompt once and return the answer; later calls return the same answer
    pub fn confirm(&mut self, prompt: &str) -> Confirmation {
        if let GateState::Resolved(outcome) = self.state {
            return outcome;
        }

        let outcome = self.ask(prompt);
        self.state = GateState::Resolved(outcome);
        outcome
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, GateState::Resolved(_))
    }

    fn ask(&mut self, prompt: &str) -> Confirmation {
        let _ = write!(self.output, "{}", prompt);
        let _ = self.output.flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => parse_answer(&line),
            Err(e) => {
                tracing::debug!(error = %e, "failed to read confirmation");
                Confirmation::Cancel
            }
        }
    }

    /// Run the gate for `descriptor` unless it needs no confirmation or the
    /// caller already confirmed
    pub fn guard(&mut self, descriptor: &CommandDescriptor, auto_confirm: bool) -> PxfResult<()> {
        if !descriptor.requires_confirmation || auto_confirm {
            return Ok(());
        }

        let prompt = descriptor.message(MessageKind::Warning).unwrap_or_default();
        match self.confirm(prompt) {
            Confirmation::Proceed => Ok(()),
            Confirmation::Cancel => Err(PxfError::Cancelled {
                operation: descriptor.operation,
            }),
        }
    }
}
