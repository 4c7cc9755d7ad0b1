use clap::Args;
use securestore_core::generator::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use securestore_core::PasswordOptions;

use super::Session;

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of characters
    #[arg(long, default_value_t = DEFAULT_LENGTH,
          value_parser = clap::value_parser!(u32).range(i64::from(MIN_LENGTH)..=i64::from(MAX_LENGTH)))]
    length: u32,

    /// Leave out 0-9
    #[arg(long)]
    no_numbers: bool,

    /// Leave out symbols
    #[arg(long)]
    no_symbols: bool,

    /// Leave out A-Z
    #[arg(long)]
    no_uppercase: bool,

    /// Leave out a-z
    #[arg(long)]
    no_lowercase: bool,

    /// Also store the result as an "Auto Generated" password
    #[arg(long)]
    save: bool,
}

impl GenerateArgs {
    const fn options(&self) -> PasswordOptions {
        PasswordOptions {
            length: self.length,
            include_numbers: !self.no_numbers,
            include_symbols: !self.no_symbols,
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
        }
    }
}

pub fn run(session: &Session, args: &GenerateArgs) -> eyre::Result<()> {
    let store = session.store();
    if args.save {
        session.unlock()?;
        let entry = store.generate_and_save_password(args.options())?;
        println!("{}", entry.password);
        tracing::info!(id = %entry.id, "generated password saved");
    } else {
        println!("{}", store.generate_password(args.options())?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: GenerateArgs,
    }

    #[test]
    fn test_flags_map_to_options() {
        let harness = Harness::parse_from(["generate", "--length", "8", "--no-symbols"]);
        let options = harness.args.options();
        assert_eq!(options.length, 8);
        assert!(!options.include_symbols);
        assert!(options.include_numbers);
        assert!(!harness.args.save);
    }

    #[test]
    fn test_length_out_of_range_is_rejected() {
        assert!(Harness::try_parse_from(["generate", "--length", "21"]).is_err());
        assert!(Harness::try_parse_from(["generate", "--length", "5"]).is_err());
    }
}
