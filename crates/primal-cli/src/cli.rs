// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flag parsing and preference resolution.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use primal_config::{ConfigService, FsConfigStore, Prefs, PREFS_KEY};
use primal_core::{QueryOptions, Strategy};
use tracing::warn;

use crate::session::{Action, Query};

/// Parsed command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "primal",
    about = "Compute prime numbers with a Sieve of Eratosthenes.",
    long_about = "Compute prime numbers with a Sieve of Eratosthenes.\n\n\
                  With no command flag, primal starts an interactive session.",
    disable_version_flag = true
)]
#[command(group(
    ArgGroup::new("command")
        .args(["list", "index", "test", "version"])
        .multiple(false)
))]
pub struct Cli {
    /// Print every prime up to a given ceiling.
    #[arg(short, long, value_name = "CEILING")]
    pub list: Option<u64>,

    /// Print the prime with a particular index.
    #[arg(short, long, value_name = "INDEX")]
    pub index: Option<u64>,

    /// Print whether a given number is a prime.
    #[arg(short, long, value_name = "NUMBER")]
    pub test: Option<u64>,

    /// Show version information.
    #[arg(short, long)]
    pub version: bool,

    /// Primality fallback for --test: `trial-division` or `sieve`.
    ///
    /// Overrides the `strategy` preference.
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Directory holding `primal.json` (default: the platform config dir).
    #[arg(long, env = "PRIMAL_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Neither read nor write the preferences file.
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// What the invocation asks for. At most one command flag can be set.
    pub fn action(&self) -> Action {
        if self.version {
            Action::Version
        } else if let Some(ceiling) = self.list {
            Action::Query(Query::List(ceiling))
        } else if let Some(n) = self.index {
            Action::Query(Query::Index(n))
        } else if let Some(number) = self.test {
            Action::Query(Query::Test(number))
        } else {
            Action::Interactive
        }
    }

    /// Load preferences best-effort: any store problem is logged and the
    /// defaults are used instead. Defaults are written once when no file
    /// exists yet.
    pub fn load_prefs(&self) -> Prefs {
        if self.no_config {
            return Prefs::default();
        }

        let store = match &self.config_dir {
            Some(dir) => FsConfigStore::at(dir),
            None => match FsConfigStore::new() {
                Ok(store) => store,
                Err(err) => {
                    warn!(
                        error = &err as &dyn std::error::Error,
                        "config store unavailable, using default preferences"
                    );
                    return Prefs::default();
                }
            },
        };

        let service = ConfigService::new(store);
        match service.load_or_init::<Prefs>(PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(
                    error = &err as &dyn std::error::Error,
                    path = %service.store().path_for(PREFS_KEY).display(),
                    "could not load preferences, using defaults"
                );
                Prefs::default()
            }
        }
    }
}

/// Query options from preferences, with command-line overrides applied.
pub fn resolve_options(cli: &Cli) -> QueryOptions {
    let mut options = QueryOptions::from(cli.load_prefs());
    if let Some(strategy) = cli.strategy {
        options.strategy = strategy;
    }
    options
}
