// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! primal repository maintenance tasks.
//!
//! Single entrypoint for repo automation via `cargo xtask …` (see
//! `.cargo/config.toml`).
//!
//! Invariants:
//! - This is *not* runtime code; it only writes generated artifacts.
//! - Generated output is a pure function of the CLI definition (no timestamps).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "primal repo maintenance tasks (cargo xtask …)",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the `primal(1)` man page from the CLI definition.
    Man(ManArgs),
}

#[derive(Args)]
struct ManArgs {
    /// Directory to write `primal.1` into.
    #[arg(long, default_value = "target/man")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Man(args) => run_man(&args),
    }
}

fn run_man(args: &ManArgs) -> Result<()> {
    let command = primal_cli::Cli::command().version(primal_cli::VERSION);
    let name = command.get_name().to_owned();
    validate_page_name(&name)?;

    let mut buffer = Vec::new();
    clap_mangen::Man::new(command)
        .render(&mut buffer)
        .context("failed to render man page")?;

    write_artifact(&args.out, &format!("{name}.1"), &buffer)
}

fn write_artifact(dir: &Path, name: &str, bytes: &[u8]) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(name);
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn validate_page_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("CLI definition has an empty command name");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        bail!("command name `{name}` is not a safe man page file name");
    }
    Ok(())
}
