use clap::Subcommand;

use super::Session;

#[derive(Subcommand)]
pub enum PasscodeCommand {
    /// Show whether a passcode is configured
    Status,

    /// Set or replace the passcode
    Set {
        /// New passcode
        new_passcode: String,
    },

    /// Check a passcode without changing anything
    Verify {
        /// Passcode to check
        candidate: String,
    },

    /// Erase the passcode after a confirmation prompt
    Reset,
}

pub async fn run(session: &Session, command: PasscodeCommand) -> eyre::Result<()> {
    let gate = session.store().gate();
    match command {
        PasscodeCommand::Status => {
            println!("state: {}", gate.state()?);
            println!("passcode set: {}", gate.is_passcode_set()?);
        }
        PasscodeCommand::Set { new_passcode } => {
            if gate.is_passcode_set()? {
                session.unlock()?;
            }
            gate.set_passcode(new_passcode)?;
            println!("passcode updated");
        }
        PasscodeCommand::Verify { candidate } => {
            if gate.verify(candidate)? {
                println!("passcode accepted");
            } else {
                eyre::bail!("incorrect passcode");
            }
        }
        PasscodeCommand::Reset => {
            gate.reset_via_biometric().await?;
            println!("passcode erased");
        }
    }
    Ok(())
}
