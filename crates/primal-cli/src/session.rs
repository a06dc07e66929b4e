// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Carrying out an invocation: direct queries, `--version`, or the
//! interactive menu.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use primal_core::{index, list, test, QueryOptions};
use tracing::debug;

use crate::banner::BANNER;
use crate::{SessionError, VERSION};

/// A query together with its numeric argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Every prime up to the ceiling.
    List(u64),
    /// The prime at a 1-based index.
    Index(u64),
    /// Classification of one number.
    Test(u64),
}

/// What one invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a query directly.
    Query(Query),
    /// Print the version string.
    Version,
    /// Prompt for a query and its argument.
    Interactive,
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `[1]`
    List,
    /// `[2]`
    Index,
    /// `[3]`
    Test,
}

impl MenuChoice {
    /// Selector numbers, in menu order.
    pub const TABLE: [(u64, MenuChoice); 3] = [
        (1, MenuChoice::List),
        (2, MenuChoice::Index),
        (3, MenuChoice::Test),
    ];

    /// Map a typed selector to a menu entry.
    pub fn from_selector(selector: u64) -> Result<Self, SessionError> {
        Self::TABLE
            .iter()
            .find(|(number, _)| *number == selector)
            .map(|&(_, choice)| choice)
            .ok_or(SessionError::InvalidSelection(selector))
    }

    /// Menu line text.
    pub const fn description(self) -> &'static str {
        match self {
            Self::List => "Print every prime up to a given ceiling.",
            Self::Index => "Print the prime with a particular index.",
            Self::Test => "Print whether a given number is a prime.",
        }
    }

    /// Prompt for this entry's numeric argument.
    pub const fn argument_prompt(self) -> &'static str {
        match self {
            Self::List => "Ceiling: ",
            Self::Index => "Index: ",
            Self::Test => "Number: ",
        }
    }

    /// Attach the argument.
    pub const fn with_argument(self, value: u64) -> Query {
        match self {
            Self::List => Query::List(value),
            Self::Index => Query::Index(value),
            Self::Test => Query::Test(value),
        }
    }
}

/// Parse a base-10 u64, distinguishing garbage from overflow.
pub fn parse_u64(input: &str) -> Result<u64, SessionError> {
    input.parse::<u64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => SessionError::OutOfRange {
            input: input.to_owned(),
        },
        _ => SessionError::NotANumber {
            input: input.to_owned(),
        },
    })
}

/// One invocation bound to an input and an output.
pub struct Session<R, W> {
    input: R,
    out: W,
    options: QueryOptions,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Bind a session to `input`/`out` with the given query options.
    pub fn new(input: R, out: W, options: QueryOptions) -> Self {
        Self {
            input,
            out,
            options,
            pending: VecDeque::new(),
        }
    }

    /// Carry out `action` and flush the output.
    pub fn run(&mut self, action: Action) -> Result<(), SessionError> {
        match action {
            Action::Query(query) => self.execute(query)?,
            Action::Version => writeln!(self.out, "Version: {VERSION}")?,
            Action::Interactive => self.interactive()?,
        }
        self.out.flush()?;
        Ok(())
    }

    /// Run one query against the output.
    pub fn execute(&mut self, query: Query) -> Result<(), SessionError> {
        debug!(?query, strategy = %self.options.strategy, "executing query");
        match query {
            Query::List(ceiling) => {
                list(&mut self.out, ceiling)?;
            }
            Query::Index(n) => {
                index(&mut self.out, n, &self.options)?;
            }
            Query::Test(number) => {
                test(&mut self.out, number, &self.options)?;
            }
        }
        Ok(())
    }

    /// Show the banner and menu, read a selection and its argument, run it.
    pub fn interactive(&mut self) -> Result<(), SessionError> {
        self.out.write_all(BANNER.as_bytes())?;
        for (number, choice) in MenuChoice::TABLE {
            writeln!(self.out, "[{number}] {}", choice.description())?;
        }
        writeln!(self.out)?;

        let choice = MenuChoice::from_selector(self.prompt("Option: ")?)?;
        let value = self.prompt(choice.argument_prompt())?;
        self.execute(choice.with_argument(value))
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Write `text`, read one token, echo a newline, parse the token.
    fn prompt(&mut self, text: &str) -> Result<u64, SessionError> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        let token = self
            .next_token()?
            .ok_or_else(|| SessionError::MissingInput {
                prompt: text.trim_end().trim_end_matches(':').to_owned(),
            })?;
        writeln!(self.out)?;
        parse_u64(&token)
    }

    /// Next whitespace-delimited token; tokens may span or share lines.
    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }
}
