use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use cdnctl_core::{ApiClient, ProfileStore};

mod cli_args;
mod cli_command;
mod modules;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::config::handle_config_command;
use crate::modules::system::CommandContext;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub(crate) const CONFIG_DIR: &str = "cdnctl";
pub(crate) const CONFIG_FILE: &str = "config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let path = match cli.config.as_deref() {
        Some(path) => PathBuf::from(path),
        None => config_path()?,
    };
    debug!(path = %path.display(), "using profile file");
    let store = ProfileStore::new(path);
    store.bootstrap()?;

    match cli.command {
        Command::Config(args) => handle_config_command(args, &store)?,
        command => {
            let client = ApiClient::new(store)?;
            let ctx = CommandContext {
                client: &client,
                base_url: cli.base_url.as_deref(),
                profile: cli.profile.as_deref().unwrap_or_default(),
            };
            handle_command(command, &ctx).await?;
        }
    }

    Ok(())
}

fn config_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home)
        .join(".config")
        .join(CONFIG_DIR)
        .join(CONFIG_FILE))
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let raw = if io::stdin().is_terminal() {
        rpassword::read_password()?
    } else {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        input
    };
    secret_from_input(&raw)
}

/// Strips only the line terminator; whitespace inside a secret is kept.
pub(crate) fn secret_from_input(raw: &str) -> anyhow::Result<String> {
    let secret = raw.trim_end_matches(|c| c == '\n' || c == '\r');
    if secret.trim().is_empty() {
        anyhow::bail!("access key secret is required");
    }
    Ok(secret.to_string())
}

pub(crate) fn prompt_yes_no(prompt: &str) -> anyhow::Result<bool> {
    let answer = prompt_line(prompt)?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}
