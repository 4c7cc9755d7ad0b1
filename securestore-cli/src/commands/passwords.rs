use clap::Subcommand;
use securestore_core::PasswordEntry;
use serde_json::json;

use super::{format_timestamp, Session};

#[derive(Subcommand)]
pub enum PasswordsCommand {
    /// List stored passwords (secrets hidden)
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print one password including its secret
    Show {
        /// Record identifier
        id: String,
    },

    /// Store a new password
    Add {
        /// Service name
        #[arg(long)]
        name: String,

        /// Account username
        #[arg(long)]
        username: String,

        /// Secret to store
        #[arg(long, env = "SECURESTORE_NEW_PASSWORD", hide_env_values = true)]
        password: String,

        /// Category label
        #[arg(long, default_value = "")]
        category: String,
    },

    /// Delete a password
    Remove {
        /// Record identifier
        id: String,
    },
}

fn to_json(entry: &PasswordEntry, reveal: bool) -> serde_json::Value {
    let mut value = json!({
        "id": entry.id,
        "name": entry.name,
        "username": entry.username,
        "category": entry.category,
        "dateAdded": format_timestamp(entry.date_added_ms),
    });
    if reveal {
        value["password"] = json!(entry.password);
    }
    value
}

pub fn run(session: &Session, command: PasswordsCommand) -> eyre::Result<()> {
    session.unlock()?;
    let vault = session.store().passwords()?;
    match command {
        PasswordsCommand::List { json } => {
            let entries = vault.list()?;
            if json {
                let values: Vec<_> = entries.iter().map(|entry| to_json(entry, false)).collect();
                println!("{}", serde_json::to_string_pretty(&values)?);
            } else {
                for entry in &entries {
                    println!(
                        "{}  {:<20} {:<20} {}",
                        entry.id, entry.name, entry.username, entry.category
                    );
                }
            }
        }
        PasswordsCommand::Show { id } => {
            let entry = vault
                .get(id.clone())?
                .ok_or_else(|| eyre::eyre!("no password with id {id}"))?;
            println!("{}", serde_json::to_string_pretty(&to_json(&entry, true))?);
        }
        PasswordsCommand::Add {
            name,
            username,
            password,
            category,
        } => {
            let entry = vault.add(name, username, password, category)?;
            println!("{}", entry.id);
        }
        PasswordsCommand::Remove { id } => {
            vault.remove(id)?;
            tracing::info!("password removed");
        }
    }
    Ok(())
}
