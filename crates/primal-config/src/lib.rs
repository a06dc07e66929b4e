// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Preferences for the primal CLI and the stores that persist them.
//!
//! [`ConfigService`] turns typed values into pretty JSON and hands the bytes to
//! a [`ConfigStore`]. Two stores ship here: [`FsConfigStore`] (one
//! `<key>.json` file per key under the platform config directory) and
//! [`MemoryConfigStore`] (tests).

mod fs;
mod prefs;
mod service;
mod store;

pub use fs::FsConfigStore;
pub use prefs::{Prefs, PREFS_KEY};
pub use service::ConfigService;
pub use store::{ConfigError, ConfigStore, MemoryConfigStore};
