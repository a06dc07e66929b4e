// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line front end for `primal-core`.
//!
//! [`Cli`] parses flags into an [`Action`]; a [`Session`] carries the action
//! out against any input/output pair, prompting through the interactive menu
//! when no command flag was given.
//!
//! # Usage
//! ```text
//! primal [--list <CEILING> | --index <INDEX> | --test <NUMBER> | --version | --help]
//! ```
//!
//! The binary exits with code `0` on success and `1` on any error, which is
//! printed to stderr as `Error: <message>`.

mod banner;
pub mod cli;
mod error;
pub mod session;

pub use cli::{resolve_options, Cli};
pub use error::SessionError;
pub use session::{Action, MenuChoice, Query, Session};

/// Version string printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
