// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! User preferences for the primal CLI.

use primal_core::{QueryOptions, Strategy};
use serde::{Deserialize, Serialize};

/// Store key for [`Prefs`] (`primal.json` on disk).
pub const PREFS_KEY: &str = "primal";

/// Saved preferences. Fields missing from the file take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    /// Fallback used by the test query.
    pub strategy: Strategy,
    /// Print a notice each time the index query regrows its sieve.
    pub retry_notice: bool,
}

impl Default for Prefs {
    fn default() -> Self {
        let options = QueryOptions::default();
        Self {
            strategy: options.strategy,
            retry_notice: options.retry_notice,
        }
    }
}

impl From<Prefs> for QueryOptions {
    fn from(prefs: Prefs) -> Self {
        Self {
            strategy: prefs.strategy,
            retry_notice: prefs.retry_notice,
        }
    }
}
