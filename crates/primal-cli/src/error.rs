// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use primal_core::PrimalError;
use thiserror::Error;

/// Everything that can end a session early.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Menu selector outside the known table.
    #[error("Invalid option `{0}`; choose 1, 2 or 3.")]
    InvalidSelection(u64),
    /// Token is empty or not a base-10 unsigned integer.
    #[error("String was not a valid numeric value.")]
    NotANumber {
        /// Token as typed.
        input: String,
    },
    /// Token is numeric but does not fit in a u64.
    #[error("Numeric value of string was out of range for the requested numeric type.")]
    OutOfRange {
        /// Token as typed.
        input: String,
    },
    /// Input ended before the prompt was answered.
    #[error("no input for prompt `{prompt}`")]
    MissingInput {
        /// Prompt that went unanswered.
        prompt: String,
    },
    /// The query itself failed.
    #[error(transparent)]
    Query(#[from] PrimalError),
    /// Reading the terminal or writing output failed.
    #[error("terminal i/o failed")]
    Io(#[from] std::io::Error),
}
