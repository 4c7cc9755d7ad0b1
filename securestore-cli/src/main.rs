//! Developer CLI for the SecureStore vault.
//!
//! Every invocation is a fresh launch: a configured passcode starts locked,
//! so commands touching protected content need `--passcode` (or
//! `SECURESTORE_PASSCODE`).

mod commands;
mod terminal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use securestore_core::DecodePolicy;

use crate::commands::{
    generate::GenerateArgs, images::ImagesCommand, passcode::PasscodeCommand,
    passwords::PasswordsCommand, Session,
};

#[derive(Parser)]
#[command(name = "securestore", version)]
#[command(about = "Passcode-gated password and image vault", long_about = None)]
struct Cli {
    /// Directory holding the preference files.
    #[arg(long, global = true, env = "SECURESTORE_ROOT")]
    root: Option<PathBuf>,

    /// Current passcode, verified before protected commands run.
    #[arg(long, global = true, env = "SECURESTORE_PASSCODE", hide_env_values = true)]
    passcode: Option<String>,

    /// Behaviour when a stored collection cannot be decoded.
    #[arg(long, global = true, default_value = "default-empty")]
    decode_policy: DecodePolicy,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the passcode gate
    #[command(subcommand)]
    Passcode(PasscodeCommand),

    /// Manage stored passwords
    #[command(subcommand)]
    Passwords(PasswordsCommand),

    /// Manage stored images
    #[command(subcommand)]
    Images(ImagesCommand),

    /// Generate a random password
    Generate(GenerateArgs),
}

fn default_root() -> eyre::Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("securestore"))
        .ok_or_else(|| eyre::eyre!("no data directory on this platform; pass --root"))
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let root = match cli.root {
        Some(root) => root,
        None => default_root()?,
    };
    let session = Session::launch(&root, cli.decode_policy, cli.passcode)?;

    match cli.command {
        Command::Passcode(command) => commands::passcode::run(&session, command).await,
        Command::Passwords(command) => commands::passwords::run(&session, command),
        Command::Images(command) => commands::images::run(&session, command),
        Command::Generate(args) => commands::generate::run(&session, &args),
    }
}
