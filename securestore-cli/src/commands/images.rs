use std::fs;
use std::path::PathBuf;

use clap::Subcommand;

use super::{format_timestamp, Session};

#[derive(Subcommand)]
pub enum ImagesCommand {
    /// List stored images
    List,

    /// Import an image file
    Add {
        /// File to import
        path: PathBuf,

        /// Category label (defaults to "Personal")
        #[arg(long)]
        category: Option<String>,
    },

    /// Write an image's bytes to a file
    Export {
        /// Record identifier
        id: String,

        /// Destination file
        path: PathBuf,
    },

    /// Replace an image's bytes with a file's content
    Replace {
        /// Record identifier
        id: String,

        /// File holding the new content
        path: PathBuf,
    },

    /// Delete an image
    Remove {
        /// Record identifier
        id: String,
    },
}

pub fn run(session: &Session, command: ImagesCommand) -> eyre::Result<()> {
    session.unlock()?;
    let vault = session.store().images()?;
    match command {
        ImagesCommand::List => {
            for entry in vault.list()? {
                println!(
                    "{}  {:<12} {:>9} bytes  {}",
                    entry.id,
                    entry.category,
                    entry.image_data.len(),
                    format_timestamp(entry.date_added_ms)
                );
            }
        }
        ImagesCommand::Add { path, category } => {
            let entry = vault.add(fs::read(&path)?, category)?;
            println!("{}", entry.id);
        }
        ImagesCommand::Export { id, path } => {
            let entry = vault
                .get(id.clone())?
                .ok_or_else(|| eyre::eyre!("no image with id {id}"))?;
            fs::write(&path, &entry.image_data)?;
            tracing::info!(path = %path.display(), "image exported");
        }
        ImagesCommand::Replace { id, path } => {
            vault.replace_content(id, fs::read(&path)?)?;
            tracing::info!("image replaced");
        }
        ImagesCommand::Remove { id } => {
            vault.remove(id)?;
            tracing::info!("image removed");
        }
    }
    Ok(())
}
